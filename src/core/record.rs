//! Queued command record - the one durable artifact this crate produces

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single player command captured for the out-of-process agent worker.
///
/// Field order matters: the queue file contract is a single-line JSON object
/// with exactly these four keys, in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedCommand {
    /// Name of the player who issued the command
    pub player: String,

    /// Effective command identifier, possibly a `name:submodel` composite
    pub command: String,

    /// Free-text prompt, possibly empty
    pub prompt: String,

    /// Unix timestamp in milliseconds; doubles as the queue file key
    pub timestamp: i64,
}

impl QueuedCommand {
    /// Create a record with an explicit timestamp
    pub fn new(
        player: impl Into<String>,
        command: impl Into<String>,
        prompt: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            player: player.into(),
            command: command.into(),
            prompt: prompt.into(),
            timestamp,
        }
    }

    /// Create a record stamped with the current wall-clock time
    pub fn now(
        player: impl Into<String>,
        command: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self::new(player, command, prompt, Utc::now().timestamp_millis())
    }

    /// Queue file name for this record (`cmd_<timestamp>.json`)
    pub fn file_name(&self) -> String {
        format!("cmd_{}.json", self.timestamp)
    }

    /// Encode as the single-line JSON wire form consumed by the agent worker.
    ///
    /// Exactly backslash, double quote, newline, carriage return and tab are
    /// escaped in string values; every other character passes through
    /// untouched. The downstream worker reads this with a standard JSON
    /// parser, so the escape set must not grow without coordinating with it.
    pub fn to_json_line(&self) -> String {
        format!(
            "{{\"player\":\"{}\",\"command\":\"{}\",\"prompt\":\"{}\",\"timestamp\":{}}}",
            escape_json(&self.player),
            escape_json(&self.command),
            escape_json(&self.prompt),
            self.timestamp
        )
    }
}

/// Escape a string value for the queue wire form
fn escape_json(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        let record = QueuedCommand::new("Steve", "claude", "build a castle", 1700000000123);
        assert_eq!(record.file_name(), "cmd_1700000000123.json");
    }

    #[test]
    fn test_key_order() {
        let record = QueuedCommand::new("Steve", "claude:sonnet", "hi", 42);
        assert_eq!(
            record.to_json_line(),
            r#"{"player":"Steve","command":"claude:sonnet","prompt":"hi","timestamp":42}"#
        );
    }

    #[test]
    fn test_escape_set() {
        assert_eq!(escape_json(r#"a\b"#), r#"a\\b"#);
        assert_eq!(escape_json("say \"hi\""), r#"say \"hi\""#);
        assert_eq!(escape_json("line1\nline2"), r#"line1\nline2"#);
        assert_eq!(escape_json("a\rb\tc"), r#"a\rb\tc"#);
        // Only those five characters are escaped; the rest pass through
        assert_eq!(escape_json("naïve / path"), "naïve / path");
    }

    #[test]
    fn test_round_trip_through_standard_parser() {
        let record = QueuedCommand::new("Ste\"ve", "claude", "a \\ quote \" and\ttab\n", 7);
        let parsed: QueuedCommand = serde_json::from_str(&record.to_json_line()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_empty_prompt_serializes_as_empty_string() {
        let record = QueuedCommand::new("Alex", "aihelp", "", 1);
        assert_eq!(
            record.to_json_line(),
            r#"{"player":"Alex","command":"aihelp","prompt":"","timestamp":1}"#
        );
    }
}
