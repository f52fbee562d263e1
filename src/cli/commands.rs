use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "costscope", version, about = "Read-only REST API over cost report files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP REST API server
    Serve(ServeArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port (overrides the PORT environment variable)
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Root directory of report files (overrides the DATA_PATH environment variable)
    #[arg(long)]
    pub data: Option<String>,
}
