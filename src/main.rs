use anyhow::Result;
use clap::{Parser, Subcommand};
use luach::cli::generate::GenerateArgs;

/// luach - Hebrew date recurring calendars
#[derive(Parser)]
#[command(name = "luach")]
#[command(about = "Recurring calendar events anchored to Hebrew dates", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Write a calendar file without starting the server
    Generate(GenerateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = luach::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    luach::observability::init_observability(
        "luach",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => luach::cli::server::serve(config, host, port).await,
        Commands::Generate(args) => luach::cli::generate::run(config, args),
    }
}
