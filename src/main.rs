//! AIBridge - relays in-game AI slash commands into a filesystem queue
//!
//! Players issue `/claude`, `/openai`, `/gemini`, ... in chat; the bridge
//! parses an optional `:submodel` suffix, acknowledges the player and drops
//! one JSON file per command into a queue directory. An out-of-process agent
//! worker consumes the files; it is not part of this crate.

mod cli;
mod completer;
mod core;
mod host;
mod logging;
mod queue;
mod router;
mod settings;

use clap::Parser;

use cli::{exit_codes, Cli, Commands};
use settings::{Settings, SettingsError};

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.json_output) {
        eprintln!("Failed to initialize logging: {e}");
        return exit_codes::UNEXPECTED_FAILURE;
    }

    let config_path = cli.config.unwrap_or_else(Settings::default_path);
    let settings = match Settings::load(&config_path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            return exit_codes::CONFIG_ERROR;
        }
    };

    let result = match cli.command.unwrap_or(Commands::Serve(cli::serve::ServeArgs {})) {
        Commands::Exec(args) => cli::exec::run(args, settings),
        Commands::Complete(args) => cli::complete::run(args, settings),
        Commands::Serve(args) => cli::serve::run(args, settings),
        Commands::Config(args) => cli::config::run(args, settings),
    };

    match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            categorize_error(&e)
        }
    }
}

/// Map an error to the appropriate exit code
fn categorize_error(e: &anyhow::Error) -> i32 {
    if e.downcast_ref::<queue::QueueError>().is_some() {
        exit_codes::QUEUE_ERROR
    } else if e.downcast_ref::<SettingsError>().is_some() {
        exit_codes::CONFIG_ERROR
    } else if e.to_string().starts_with("Unknown command") {
        exit_codes::UNKNOWN_COMMAND
    } else {
        exit_codes::UNEXPECTED_FAILURE
    }
}
