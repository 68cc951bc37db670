// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,
}
