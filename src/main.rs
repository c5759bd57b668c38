mod cli;
mod commands;
mod error;
mod mcp;
mod page_selector;
mod pdf;
mod source;
mod workflow;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Mcp => {
            mcp::run_server().await?;
        }
        Commands::Split {
            pages,
            inputs,
            output,
        } => {
            let written = commands::split::run(&inputs, &pages, &output).await?;
            println!(
                "Extracted {} page(s) to {}",
                written.page_count,
                written.output_path.display()
            );
        }
        Commands::Merge { inputs, output } => {
            let written = commands::merge::run(&inputs, &output).await?;
            println!(
                "Merged {} page(s) into {}",
                written.page_count,
                written.output_path.display()
            );
        }
    }

    Ok(())
}

/// Logs always go to stderr; stdout carries MCP traffic in server mode.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
