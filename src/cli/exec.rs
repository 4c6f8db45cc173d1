//! `aibridge exec` - drive a single invocation through the bridge

use anyhow::{bail, Result};
use clap::Args;

use crate::host::{Bridge, TerminalSource};
use crate::settings::Settings;

#[derive(Debug, Args)]
pub struct ExecArgs {
    /// Player name recorded in the queue file; omit to invoke as the
    /// (rejected) server console
    #[arg(long)]
    pub player: Option<String>,

    /// Command name, without the leading slash
    pub command: String,

    /// Argument tokens, joined with spaces to form the prompt
    #[arg(trailing_var_arg = true)]
    pub tokens: Vec<String>,
}

pub fn run(args: ExecArgs, settings: Settings) -> Result<()> {
    let bridge = Bridge::new(settings)?;

    let source = match args.player.as_deref() {
        Some(name) => TerminalSource::player(name),
        None => TerminalSource::console(),
    };

    if !bridge.dispatch_command(&source, &args.command, &args.tokens) {
        bail!("Unknown command: /{}", args.command);
    }
    Ok(())
}
