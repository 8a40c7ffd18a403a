use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the restdeck TUI.
#[derive(Debug, Parser)]
#[command(
    name = "restdeck",
    version,
    about = "Browse, search, and edit users and posts against a demo REST API"
)]
pub struct Cli {
    /// Base URL of the remote collection API
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Path to an alternate configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
