use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "vigil")]
#[command(about = "VIGIL - GRC monitoring console", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the console assistant
    Chat {
        /// Path to a TOML configuration file
        #[arg(long)]
        config: Option<std::path::PathBuf>,
    },
    /// Search the built-in record set
    Search {
        /// Query matched against record titles and paths
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("VIGIL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat { config } => commands::chat::run(config).await?,
        Commands::Search { query } => commands::search::run(&query)?,
    }

    Ok(())
}
