//! Broker Registry Command Line Interface
//!
//! Replays scripted registry calls against a fresh registry and prints
//! one JSON outcome per call.

mod script;
mod settings;

use anyhow::Result;
use broker_registry::{BrokerRegistry, LogFormat, RegistryConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "broker-registry")]
#[command(about = "Broker verification registry scenario runner", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (TOML, JSON or YAML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial admin principal (overrides config and BROKER_REGISTRY_ADMIN)
    #[arg(long)]
    admin: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON script of registry calls
    Run {
        /// Path to the script
        script: PathBuf,
    },
    /// Print the effective configuration
    ShowConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = settings::load(cli.config.as_deref())?;
    let config = settings::apply_admin_override(loaded, cli.admin);

    init_logging(&config);

    match cli.command {
        Commands::Run { script } => {
            let calls = script::load(&script)?;
            let registry = BrokerRegistry::from_config(&config);
            for outcome in script::replay(&registry, &calls) {
                println!("{}", serde_json::to_string(&outcome)?);
            }
        }
        Commands::ShowConfig => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn init_logging(config: &RegistryConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init(),
    }
}
