//! Command-line argument definitions for the Maquette CLI.

use clap::Parser;

/// Command-line arguments for the workspace generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output workspace file
    #[arg(short, long, default_value = "workspace.json")]
    pub output: String,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
