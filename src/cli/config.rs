//! `aibridge config` - print the effective configuration

use anyhow::{Context, Result};
use clap::Args;

use crate::settings::Settings;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Print JSON instead of TOML
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ConfigArgs, settings: Settings) -> Result<()> {
    if args.json {
        let text =
            serde_json::to_string_pretty(&settings).context("Failed to render configuration")?;
        println!("{text}");
    } else {
        let text = toml::to_string_pretty(&settings).context("Failed to render configuration")?;
        print!("{text}");
    }
    Ok(())
}
