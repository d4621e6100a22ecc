use clap::Parser;
use std::path::PathBuf;

/// Ask questions about Premier League statistics
#[derive(Parser, Debug)]
#[command(name = "premstats", author, version, about, long_about = None)]
pub struct Args {
    /// The question to send to the stats backend
    #[arg(index = 1)] // Positional argument
    pub prompt: Option<String>,

    /// Enter interactive mode
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,

    /// Backend origin, e.g. http://localhost:8000
    #[arg(long, env = "BACKEND_API_URL")]
    pub backend_url: Option<String>,

    /// Path to the config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show the rows behind each answer
    #[arg(short = 'd', long, default_value_t = false)]
    pub show_data: bool,

    /// Print the raw backend reply as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long, default_value_t = false)]
    pub save_config: bool,

    /// List example questions and exit
    #[arg(long, default_value_t = false)]
    pub suggestions: bool,

    /// Enable verbose output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
