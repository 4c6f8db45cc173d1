//! `aibridge serve` - line-oriented host shim on stdin
//!
//! Lets a game server (or a test harness) drive the bridge through a pipe
//! without linking against any plugin ABI. Protocol, one request per line:
//!
//! ```text
//! cmd <sender> <command> [tokens...]   route a command invocation
//! tab <sender> <command> [tokens...]   print completions, tab-separated
//! quit                                 stop reading
//! ```
//!
//! The reserved sender name `console` simulates a non-player source.

use std::io::BufRead;

use anyhow::Result;
use clap::Args;

use crate::host::{Bridge, CommandSource, TerminalSource};
use crate::settings::Settings;

#[derive(Debug, Args)]
pub struct ServeArgs {}

pub fn run(_args: ServeArgs, settings: Settings) -> Result<()> {
    let bridge = Bridge::new(settings)?;
    tracing::info!("Queue directory: {}", bridge.queue().dir().display());

    let stdin = std::io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;
        if !handle_line(&bridge, &line) {
            break;
        }
    }
    Ok(())
}

/// Process one protocol line; returns `false` on `quit`
fn handle_line(bridge: &Bridge, line: &str) -> bool {
    let mut parts = line.split_whitespace();
    let verb = match parts.next() {
        Some(v) => v,
        None => return true,
    };

    match verb {
        "quit" => return false,
        "cmd" | "tab" => {}
        other => {
            tracing::warn!("Ignoring unknown request verb: {other}");
            return true;
        }
    }

    let (sender, command) = match (parts.next(), parts.next()) {
        (Some(s), Some(c)) => (s, c),
        _ => {
            tracing::warn!("Malformed request line: {line}");
            return true;
        }
    };

    let source = if sender == "console" {
        TerminalSource::console()
    } else {
        TerminalSource::player(sender)
    };
    let tokens: Vec<String> = parts.map(String::from).collect();

    if verb == "cmd" {
        tracing::debug!("Dispatching /{command} for {}", source.name());
        bridge.dispatch_command(&source, command, &tokens);
    } else {
        let suggestions = bridge.tab_complete(&source, command, command, &tokens);
        println!("{}", suggestions.join("\t"));
    }
    true
}
