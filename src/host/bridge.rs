//! Bridge assembly and command dispatch

use std::collections::HashMap;
use std::sync::Arc;

use crate::completer::TabCompleter;
use crate::host::{CommandExecutor, CommandSource, Completer};
use crate::queue::{QueueError, QueueWriter};
use crate::router::CommandRouter;
use crate::settings::Settings;

/// The wired-up plugin core: queue, router, completer and the dispatch
/// tables routing each registered command name to its handlers.
pub struct Bridge {
    queue: Arc<QueueWriter>,
    executors: HashMap<String, Arc<dyn CommandExecutor>>,
    completers: HashMap<String, Arc<dyn Completer>>,
}

impl Bridge {
    /// Build the bridge from settings: open the queue directory and register
    /// every configured command name with the router and completer
    pub fn new(settings: Settings) -> Result<Self, QueueError> {
        let settings = Arc::new(settings);
        let queue = Arc::new(QueueWriter::open(&settings.queue_dir)?);
        let router: Arc<dyn CommandExecutor> =
            Arc::new(CommandRouter::new(settings.clone(), queue.clone()));
        let completer: Arc<dyn Completer> = Arc::new(TabCompleter::new(settings.clone()));

        let mut executors = HashMap::new();
        let mut completers = HashMap::new();
        for name in &settings.commands {
            executors.insert(name.to_lowercase(), router.clone());
            completers.insert(name.to_lowercase(), completer.clone());
        }

        tracing::info!(
            "AIBridge enabled. Commands: {}",
            settings
                .commands
                .iter()
                .map(|c| format!("/{c}"))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self {
            queue,
            executors,
            completers,
        })
    }

    /// Route one command invocation from the host.
    ///
    /// Returns `false` only for names the bridge never registered - the host
    /// should not be sending those here in the first place.
    pub fn dispatch_command(
        &self,
        source: &dyn CommandSource,
        command: &str,
        args: &[String],
    ) -> bool {
        match self.executors.get(&command.to_lowercase()) {
            Some(executor) => executor.execute(source, command, args),
            None => false,
        }
    }

    /// Route one tab-completion request from the host
    pub fn tab_complete(
        &self,
        source: &dyn CommandSource,
        command: &str,
        alias: &str,
        args: &[String],
    ) -> Vec<String> {
        match self.completers.get(&command.to_lowercase()) {
            Some(completer) => completer.complete(source, command, alias, args),
            None => Vec::new(),
        }
    }

    /// The queue this bridge writes into
    pub fn queue(&self) -> &QueueWriter {
        &self.queue
    }
}

impl Drop for Bridge {
    fn drop(&mut self) {
        tracing::info!("AIBridge disabled.");
    }
}
