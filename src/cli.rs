use std::path::PathBuf;

use clap::Parser;

/// Terminal client for the bus ticket booking service.
#[derive(Debug, Clone, Parser)]
#[command(name = "ticketdesk", version, about)]
pub struct Cli {
    /// Read configuration from PATH instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the booking service base URL for this session
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Start on the admin screen
    #[arg(long)]
    pub admin: bool,
}
