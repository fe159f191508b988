// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keycloak_lookup::{
    config::ProviderConfig,
    constants::TOKIO_WORKER_THREADS,
    lookup::{Parameters, Resolver},
    resources::ResourceKind,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Resolve Keycloak object ids from identifying properties
#[derive(Parser, Debug)]
#[command(name = "keycloak-lookup")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the id of one Keycloak object and print it (empty if not found)
    Resolve(ResolveArgs),
    /// List the supported resource kinds and their identifying properties
    Kinds,
}

#[derive(clap::Args, Debug)]
struct ResolveArgs {
    /// Resource kind, by CLI name (`group`) or Terraform name (`keycloak_group`)
    #[arg(long, value_parser = parse_kind)]
    kind: ResourceKind,

    /// Provider credentials document (JSON)
    #[arg(long)]
    credentials: PathBuf,

    /// Currently recorded id of the object
    #[arg(long, default_value = "")]
    external_name: String,

    /// Identifying property as key=value; repeatable, overrides --params-file
    #[arg(long = "param", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// YAML or JSON map of identifying properties
    #[arg(long)]
    params_file: Option<PathBuf>,
}

fn parse_kind(value: &str) -> Result<ResourceKind, String> {
    value.parse().map_err(|e| format!("{e}"))
}

fn parse_param(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((key, val)) if !key.is_empty() => Ok((key.to_string(), val.to_string())),
        _ => Err(format!("expected key=value, got '{value}'")),
    }
}

/// Parameters from the optional file, overridden by the `--param` pairs.
async fn load_parameters(
    params_file: Option<&Path>,
    overrides: &[(String, String)],
) -> Result<Parameters> {
    let mut parameters = match params_file {
        Some(path) => {
            let contents = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;
            if contents.trim().is_empty() {
                Parameters::new()
            } else {
                serde_yaml::from_str(&contents)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
        }
        None => Parameters::new(),
    };

    for (key, value) in overrides {
        parameters.insert(key.as_str(), value.as_str());
    }
    Ok(parameters)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Build Tokio runtime with custom thread names
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(TOKIO_WORKER_THREADS)
        .thread_name("keycloak-lookup")
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> Result<()> {
    // Logs go to stderr so stdout only carries the resolved id.
    // Respects RUST_LOG (default info) and RUST_LOG_FORMAT=json|text
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_thread_names(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_thread_names(true)
                .with_target(false)
                .with_ansi(true)
                .compact()
                .init();
        }
    }

    match cli.command {
        Commands::Resolve(args) => resolve(args).await,
        Commands::Kinds => {
            print!("{}", kinds_table());
            Ok(())
        }
    }
}

async fn resolve(args: ResolveArgs) -> Result<()> {
    debug!(credentials = %args.credentials.display(), "Loading provider configuration");
    let config = ProviderConfig::from_file(&args.credentials).await?;

    let parameters = load_parameters(args.params_file.as_deref(), &args.params).await?;
    if parameters.is_empty() {
        warn!(kind = %args.kind, "No identifying properties given");
    }

    info!(
        kind = %args.kind,
        url = %config.server_url(),
        realm = %config.realm,
        params = parameters.len(),
        "Resolving Keycloak object"
    );

    let resolver = Resolver::from_config(&config).await?;
    let id = resolver
        .resolve(args.kind, &args.external_name, &parameters)
        .await
        .with_context(|| format!("failed to resolve {}", args.kind))?;

    println!("{}", id.unwrap_or_default());
    Ok(())
}

/// One line per kind: CLI name, Terraform name, required and optional properties.
fn kinds_table() -> String {
    let mut out = String::new();
    for kind in ResourceKind::ALL {
        let lookup = kind.lookup();
        let optional = lookup.optional_parameters();
        out.push_str(&format!(
            "{:<32} {:<42} required: {}",
            kind.name(),
            kind.terraform_name(),
            lookup.required_parameters().join(",")
        ));
        if !optional.is_empty() {
            out.push_str(&format!(" optional: {}", optional.join(",")));
        }
        out.push('\n');
    }
    out
}
