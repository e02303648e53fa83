use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::PathBuf;

use mini_idp::config::Config;
use mini_idp::manifest::ManifestBuilder;

mod check;
mod generate;

pub use generate::GenerateArgs;

#[derive(Subcommand)]
pub enum Commands {
    /// Render the Namespace, Deployment, Service and Ingress for an environment
    Generate {
        /// Service name
        #[arg(short, long, value_name = "SERVICE_NAME")]
        service_name: String,

        /// Environment type, appended to the service name to form the namespace
        #[arg(short, long = "env", value_name = "ENV_TYPE", default_value = "dev")]
        env_type: String,

        /// Deployment replica count
        #[arg(short, long, value_name = "N", default_value_t = 1, allow_negative_numbers = true)]
        replicas: i64,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Fail if any generated name is not a valid Kubernetes name
        #[arg(long)]
        strict: bool,

        /// Show what would be generated
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// Check the names an environment would get
    Check {
        /// Service name
        #[arg(value_name = "SERVICE_NAME")]
        service_name: String,

        /// Environment type
        #[arg(short, long = "env", value_name = "ENV_TYPE", default_value = "dev")]
        env_type: String,

        /// Print the findings as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Load config from an explicit file or the standard search path
pub fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load configuration")?,
    };
    Ok(config)
}

pub fn execute(command: Commands, config: Config) -> Result<()> {
    let builder = ManifestBuilder::new(config.manifest);

    match command {
        Commands::Generate {
            service_name,
            env_type,
            replicas,
            output,
            strict,
            dry_run,
        } => generate::execute(
            &builder,
            GenerateArgs {
                service_name,
                env_type,
                replicas,
                output,
                strict,
                dry_run,
            },
        ),
        Commands::Check {
            service_name,
            env_type,
            json,
        } => check::execute(
            &service_name,
            &env_type,
            &builder.settings().ingress_domain,
            json,
        ),
    }
}
