//! restdeck - terminal client for browsing and editing a demo REST API

use anyhow::Result;
use clap::Parser as _;

use restdeck_cli::cli::Cli;
use restdeck_cli::handlers;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    handlers::run(cli).await
}
