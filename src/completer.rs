//! Tab-completion suggestions
//!
//! Only the first argument position completes. Sub-model suffixes come
//! first, in mapping order, then the shared example prompts; a command with
//! an example override (like `/agent`) offers only its own list.

use std::sync::Arc;

use crate::host::{CommandSource, Completer};
use crate::settings::Settings;

/// Suggests sub-model suffixes and example prompts for partial input
pub struct TabCompleter {
    settings: Arc<Settings>,
}

impl TabCompleter {
    /// The mapping is fixed at construction: loaded once at startup,
    /// immutable thereafter
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    fn suggestions(&self, command: &str, input: &str) -> Vec<String> {
        let input = input.to_lowercase();
        let matches =
            |candidate: &str| input.is_empty() || candidate.to_lowercase().starts_with(&input);

        if let Some(prompts) = self.settings.example_override_for(command) {
            return prompts.iter().filter(|p| matches(p.as_str())).cloned().collect();
        }

        let mut out = Vec::new();
        if let Some(suffixes) = self.settings.sub_models_for(command) {
            out.extend(suffixes.iter().filter(|s| matches(s.as_str())).cloned());
        }
        out.extend(
            self.settings
                .example_prompts
                .iter()
                .filter(|p| matches(p.as_str()))
                .cloned(),
        );
        out
    }
}

impl Completer for TabCompleter {
    fn complete(
        &self,
        _source: &dyn CommandSource,
        command: &str,
        _alias: &str,
        args: &[String],
    ) -> Vec<String> {
        let command = command.to_lowercase();

        if self.settings.is_passthrough(&command) {
            return Vec::new();
        }

        // Only the first argument position completes
        if args.len() != 1 {
            return Vec::new();
        }

        self.suggestions(&command, &args[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingSource;

    fn complete(command: &str, args: &[&str]) -> Vec<String> {
        let completer = TabCompleter::new(Arc::new(Settings::default()));
        let source = RecordingSource::player("Steve");
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        completer.complete(&source, command, command, &args)
    }

    #[test]
    fn test_empty_input_lists_sub_models_then_examples() {
        let out = complete("claude", &[""]);
        assert_eq!(out[0], ":sonnet");
        assert_eq!(out[1], ":haiku");
        assert_eq!(out[2], "build a castle");
        assert_eq!(out[3], "build a medieval house");
        assert_eq!(out.len(), 2 + 8);
    }

    #[test]
    fn test_prefix_filters_both_groups() {
        // Nothing sub-model starts with "b", so only examples survive,
        // keeping their relative order
        let out = complete("claude", &["b"]);
        assert!(out.iter().all(|s| s.starts_with("build")));
        assert_eq!(out[0], "build a castle");
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn test_sub_model_prefix_match() {
        let out = complete("claude", &[":s"]);
        assert_eq!(out, [":sonnet"]);

        let out = complete("openai", &[":gpt"]);
        assert_eq!(out, [":gpt-5.1", ":gpt-5-mini"]);
    }

    #[test]
    fn test_prefix_match_is_case_insensitive() {
        let out = complete("claude", &["BUILD A C"]);
        assert_eq!(out, ["build a castle"]);
    }

    #[test]
    fn test_passthrough_commands_never_complete() {
        assert!(complete("aihelp", &[""]).is_empty());
        assert!(complete("models", &["any"]).is_empty());
    }

    #[test]
    fn test_only_first_argument_position_completes() {
        assert!(complete("claude", &[]).is_empty());
        assert!(complete("claude", &["build", "a"]).is_empty());
    }

    #[test]
    fn test_command_without_sub_models_gets_examples_only() {
        let out = complete("deepseek", &[""]);
        assert_eq!(out.len(), 8);
        assert_eq!(out[0], "build a castle");
    }

    #[test]
    fn test_override_command_gets_only_its_own_prompts() {
        let out = complete("agent", &[""]);
        assert_eq!(out[0], "come to me");
        assert_eq!(out.len(), 7);
        assert!(out.iter().all(|s| !s.starts_with(':')));

        let out = complete("agent", &["mine"]);
        assert_eq!(out, ["mine 10 oak logs"]);
    }

    #[test]
    fn test_unknown_command_still_offers_examples() {
        // The host only routes registered names here, but the completer
        // itself does not insist on the roster
        let out = complete("mystery", &["build a t"]);
        assert_eq!(out, ["build a tower"]);
    }
}
