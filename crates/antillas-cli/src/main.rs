use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "antillas")]
#[command(version, about = "Antillas - Caribbean services marketplace assistant", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding config.toml and preferences.json (overrides `storage_dir` in config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or change the selected region
    Location {
        #[command(subcommand)]
        action: LocationAction,
    },
    /// Ask the assistant a single question
    Ask {
        /// Region to answer for (defaults to the selected region)
        #[arg(long)]
        region: Option<String>,
        /// What you need help with
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Start an interactive assistant chat
    Chat {
        /// Region for this session (defaults to the selected region)
        #[arg(long)]
        region: Option<String>,
    },
}

#[derive(Subcommand)]
enum LocationAction {
    /// Print the current selection
    Show,
    /// List supported regions
    List,
    /// Confirm a region
    Select { region: String },
    /// Clear the confirmed selection
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG controls verbosity, e.g. RUST_LOG=antillas_core=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = commands::context::AppContext::load(cli.config, cli.data_dir).await?;

    let result = match cli.command {
        Commands::Location { action } => match action {
            LocationAction::Show => commands::location::show(&ctx),
            LocationAction::List => commands::location::list(),
            LocationAction::Select { region } => commands::location::select(&ctx, &region),
            LocationAction::Reset => commands::location::reset(&ctx),
        },
        Commands::Ask { region, text } => commands::ask::run(&ctx, region.as_deref(), &text.join(" ")),
        Commands::Chat { region } => commands::chat::run(&ctx, region.as_deref()).await,
    };

    ctx.store.flush().await;
    result
}
