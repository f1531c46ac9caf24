use anyhow::Result;
use clap::{Parser, Subcommand};
use coolcare_infrastructure::ConfigService;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "coolcare")]
#[command(about = "Coolcare CLI - AC service booking and back office", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a contact number is a valid 10-digit phone number
    CheckPhone {
        phone: String,
    },
    /// Book a service: verify the phone by OTP and pay the advance
    Book(commands::book::BookArgs),
    /// Inspect the resolved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Browse the demo back office
    Admin {
        #[command(subcommand)]
        list: commands::admin::AdminList,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration as TOML
    Show {
        /// Path to config.toml (defaults to the platform config directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckPhone { phone } => commands::check_phone::run(&phone),
        Commands::Book(args) => {
            let service = config_service(args.config.clone());
            let config = service.get_config()?;
            init_tracing(&config.logging.level)?;
            commands::book::run(&config, args).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { config } => commands::config::show(&config_service(config))?,
        },
        Commands::Admin { list } => {
            init_tracing("warn")?;
            commands::admin::run(list).await?;
        }
    }

    Ok(())
}

fn config_service(path: Option<PathBuf>) -> ConfigService {
    match path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    }
}

/// Logs go to stderr so they never interleave with prompts on stdout.
fn init_tracing(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
