use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod utils;

use commands::Commands;

/// idp - render Kubernetes environment manifests
#[derive(Parser)]
#[command(name = "idp")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to the mini-idp search path)
    #[arg(long, global = true, value_name = "FILE", env = "MINI_IDP_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = commands::load_config(cli.config.as_ref())
        .and_then(|config| commands::execute(cli.command, config));

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);

            if let Some(source) = e.source() {
                eprintln!("\n{} {}", "Caused by:".yellow(), source);
            }

            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "idp", "generate", "-s", "checkout", "--env", "prod", "-r", "3", "--strict",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate {
                service_name,
                env_type,
                replicas,
                strict,
                dry_run,
                ..
            } => {
                assert_eq!(service_name, "checkout");
                assert_eq!(env_type, "prod");
                assert_eq!(replicas, 3);
                assert!(strict);
                assert!(!dry_run);
            }
            _ => panic!("Expected generate command"),
        }
    }

    #[test]
    fn test_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["idp", "generate", "--service-name", "api", "-r", "-1"]).unwrap();

        match cli.command {
            Commands::Generate { env_type, replicas, .. } => {
                assert_eq!(env_type, "dev");
                assert_eq!(replicas, -1);
            }
            _ => panic!("Expected generate command"),
        }
    }

    #[test]
    fn test_generate_requires_service_name() {
        assert!(Cli::try_parse_from(["idp", "generate"]).is_err());
    }
}
