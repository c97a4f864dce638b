use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "rosterdesk",
    version,
    about = "A terminal client for staff, project and allocation records",
    long_about = None
)]
/// Command-line arguments.
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the record service.
    #[arg(long, env = "ROSTERDESK_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub request_timeout: Option<u64>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Seconds a notice stays visible.
    #[arg(long)]
    pub notice_duration: Option<u64>,
}
