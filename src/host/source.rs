//! Command sources - who is invoking a command and how to answer them

#[cfg(test)]
use std::cell::RefCell;

/// Capability view of whoever sent a command
pub trait CommandSource {
    /// Whether the sender is an in-game player (consoles and command blocks
    /// are not)
    fn is_player(&self) -> bool;

    /// Sender identity as recorded in queue files
    fn name(&self) -> &str;

    /// Deliver a chat message back to the sender
    fn send_message(&self, message: &str);
}

/// Command source backed by the local terminal, used by the CLI harness.
///
/// Messages the game would render in chat are printed to stdout, `§` color
/// codes and all.
pub struct TerminalSource {
    name: String,
    player: bool,
}

impl TerminalSource {
    /// A simulated player
    pub fn player(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            player: true,
        }
    }

    /// A simulated non-player sender (server console)
    pub fn console() -> Self {
        Self {
            name: "console".to_string(),
            player: false,
        }
    }
}

impl CommandSource for TerminalSource {
    fn is_player(&self) -> bool {
        self.player
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn send_message(&self, message: &str) {
        println!("{message}");
    }
}

/// Test double that records every message it is sent
#[cfg(test)]
pub struct RecordingSource {
    pub name: String,
    pub player: bool,
    pub messages: RefCell<Vec<String>>,
}

#[cfg(test)]
impl RecordingSource {
    pub fn player(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            player: true,
            messages: RefCell::new(Vec::new()),
        }
    }

    pub fn console() -> Self {
        Self {
            name: "console".to_string(),
            player: false,
            messages: RefCell::new(Vec::new()),
        }
    }
}

#[cfg(test)]
impl CommandSource for RecordingSource {
    fn is_player(&self) -> bool {
        self.player
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn send_message(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
