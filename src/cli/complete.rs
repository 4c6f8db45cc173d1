//! `aibridge complete` - print tab-completion suggestions

use anyhow::Result;
use clap::Args;

use crate::host::{Bridge, TerminalSource};
use crate::settings::Settings;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Command name, without the leading slash
    pub command: String,

    /// Argument tokens typed so far; none means an empty first argument
    #[arg(trailing_var_arg = true)]
    pub tokens: Vec<String>,
}

pub fn run(args: CompleteArgs, settings: Settings) -> Result<()> {
    let bridge = Bridge::new(settings)?;
    let source = TerminalSource::player("completion");

    // The host sends an empty first token when the player has typed
    // `/claude ` and nothing more; mirror that for a bare `complete claude`
    let tokens = if args.tokens.is_empty() {
        vec![String::new()]
    } else {
        args.tokens
    };

    for suggestion in bridge.tab_complete(&source, &args.command, &args.command, &tokens) {
        println!("{suggestion}");
    }
    Ok(())
}
