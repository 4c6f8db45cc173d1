//! Host-facing dispatch surface
//!
//! The game server owns literal command registration and player sessions;
//! this module is the seam it calls into, kept free of any plugin ABI: a
//! `CommandSource` capability for the sender, handler traits for execution
//! and completion, and a registry mapping command names to handlers, built
//! once at startup.

mod bridge;
mod source;

pub use bridge::*;
pub use source::*;

/// Handler for one command invocation. Returns the host's "handled" flag.
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, source: &dyn CommandSource, command: &str, args: &[String]) -> bool;
}

/// Handler for one tab-completion request, ordered best-first.
///
/// `alias` is whichever spelling the player actually typed; handlers key off
/// the canonical `command` name.
pub trait Completer: Send + Sync {
    fn complete(
        &self,
        source: &dyn CommandSource,
        command: &str,
        alias: &str,
        args: &[String],
    ) -> Vec<String>;
}
