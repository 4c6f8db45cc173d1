//! Command routing
//!
//! One synchronous pass per invocation: reject non-players, special-case the
//! passthrough commands, otherwise join the tokens, split off a sub-model
//! suffix and hand the record to the queue. Nothing here blocks or retries.

use std::sync::Arc;

use crate::core::{parse_prompt, QueuedCommand};
use crate::host::{CommandExecutor, CommandSource};
use crate::queue::QueueWriter;
use crate::settings::Settings;

/// Shown to consoles and command blocks; only players can queue prompts
const PLAYERS_ONLY: &str = "This command can only be used by players.";

/// Routes command invocations into the queue
pub struct CommandRouter {
    settings: Arc<Settings>,
    queue: Arc<QueueWriter>,
}

impl CommandRouter {
    pub fn new(settings: Arc<Settings>, queue: Arc<QueueWriter>) -> Self {
        Self { settings, queue }
    }
}

impl CommandExecutor for CommandRouter {
    fn execute(&self, source: &dyn CommandSource, command: &str, args: &[String]) -> bool {
        if !source.is_player() {
            source.send_message(PLAYERS_ONLY);
            return true;
        }

        let command = command.to_lowercase();

        // Passthrough commands queue immediately; trailing arguments, if
        // any, are dropped on the floor
        if self.settings.is_passthrough(&command) {
            self.queue
                .enqueue(&QueuedCommand::now(source.name(), &command, ""));
            return true;
        }

        if args.is_empty() {
            source.send_message(&format!("§cUsage: /{command} <prompt>"));
            source.send_message(&format!("§7Example: /{command} build a medieval castle"));
            return true;
        }

        let raw = args.join(" ");
        let parsed = parse_prompt(&command, &raw);
        if let Some(sub) = &parsed.sub_model {
            tracing::debug!("Sub-model {sub} selected for /{command}");
        }

        source.send_message(&format!(
            "§b[AIBridge] §7Processing your request with §e{}§7...",
            parsed.command
        ));
        self.queue
            .enqueue(&QueuedCommand::now(source.name(), &parsed.command, &parsed.prompt));
        true
    }
}
