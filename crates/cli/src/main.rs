//! Command-line client for querying free card memory

use clap::{Parser, Subcommand};
use tracing::info;

use cardmem_client::{CardInfoClient, display};
use cardmem_core::prelude::*;
use cardmem_transport_pcsc::{PcscConfig, PcscDeviceManager};

mod reader;

#[derive(Parser)]
#[command(version, about = "Query free memory on a card running the info applet")]
struct Cli {
    /// Optional reader name to use (will auto-detect if not specified)
    #[arg(short, long)]
    reader: Option<String>,

    /// Debug level output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available readers
    List,

    /// Query the card and print the memory report (default)
    Info,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let manager = PcscDeviceManager::new()?;

    match cli.command.unwrap_or(Commands::Info) {
        Commands::List => reader::list_readers(&manager)?,
        Commands::Info => {
            let readers = manager.list_readers()?;
            let reader = reader::pick_reader(&readers, cli.reader.as_deref())?;
            info!("Using reader: {}", reader.name());

            let transport = manager.open_reader_with_config(reader.name(), PcscConfig::default())?;
            let mut client = CardInfoClient::new(CardExecutor::new(transport));

            // Selection failure is fatal; no query is sent after a refusal
            client.select()?;

            let info = client.memory_info()?;
            println!("{}", display::report(&info));
        }
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_ansi(true)
        .init();
}
