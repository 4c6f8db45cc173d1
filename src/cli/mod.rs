//! CLI argument definitions

pub mod complete;
pub mod config;
pub mod exec;
pub mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Stable process exit codes for scripting against the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
    pub const QUEUE_ERROR: i32 = 3;
    pub const UNKNOWN_COMMAND: i32 = 4;
    pub const UNEXPECTED_FAILURE: i32 = 70;
}

/// Relays in-game AI slash commands into a filesystem queue
#[derive(Debug, Parser)]
#[command(name = "aibridge", version, about)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, env = "AIBRIDGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_output: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Drive one command invocation through the bridge, as the host would
    Exec(exec::ExecArgs),

    /// Print tab-completion suggestions for partial input
    Complete(complete::CompleteArgs),

    /// Read invocations line by line from stdin (default)
    Serve(serve::ServeArgs),

    /// Print the effective configuration
    Config(config::ConfigArgs),
}
