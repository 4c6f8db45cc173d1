//! Sub-model suffix parsing for raw prompt text

/// Result of splitting a raw prompt into sub-model and prompt text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPrompt {
    /// Effective command identifier (`claude` or `claude:sonnet`)
    pub command: String,

    /// Extracted sub-model token, if any
    pub sub_model: Option<String>,

    /// Remaining prompt text
    pub prompt: String,
}

/// Split an optional `:submodel` prefix off the raw prompt.
///
/// The prefix is only recognized when the text starts with `:` AND contains
/// at least one space; a bare `":sonnet"` stays a plain prompt. An empty
/// token (`": hello"`) leaves the command identifier unchanged. Both gates
/// are observed behavior of the original queue producer, kept exactly.
pub fn parse_prompt(command: &str, raw: &str) -> ParsedPrompt {
    if raw.starts_with(':') {
        if let Some(space_idx) = raw.find(' ') {
            let sub_model = &raw[1..space_idx];
            let prompt = raw[space_idx + 1..].trim();
            let command = if sub_model.is_empty() {
                command.to_string()
            } else {
                format!("{command}:{sub_model}")
            };
            return ParsedPrompt {
                command,
                sub_model: (!sub_model.is_empty()).then(|| sub_model.to_string()),
                prompt: prompt.to_string(),
            };
        }
    }

    ParsedPrompt {
        command: command.to_string(),
        sub_model: None,
        prompt: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prompt_passes_through() {
        let parsed = parse_prompt("claude", "build a castle");
        assert_eq!(parsed.command, "claude");
        assert_eq!(parsed.sub_model, None);
        assert_eq!(parsed.prompt, "build a castle");
    }

    #[test]
    fn test_sub_model_with_prompt() {
        let parsed = parse_prompt("claude", ":sonnet hello world");
        assert_eq!(parsed.command, "claude:sonnet");
        assert_eq!(parsed.sub_model.as_deref(), Some("sonnet"));
        assert_eq!(parsed.prompt, "hello world");
    }

    #[test]
    fn test_sub_model_without_space_is_not_extracted() {
        // "must contain a space" gate: a lone token stays a plain prompt
        let parsed = parse_prompt("claude", ":sonnet");
        assert_eq!(parsed.command, "claude");
        assert_eq!(parsed.sub_model, None);
        assert_eq!(parsed.prompt, ":sonnet");
    }

    #[test]
    fn test_empty_sub_model_token_leaves_command_unchanged() {
        let parsed = parse_prompt("claude", ": hello");
        assert_eq!(parsed.command, "claude");
        assert_eq!(parsed.sub_model, None);
        assert_eq!(parsed.prompt, "hello");
    }

    #[test]
    fn test_remainder_is_trimmed() {
        let parsed = parse_prompt("openai", ":gpt-5.1   spaced out  ");
        assert_eq!(parsed.command, "openai:gpt-5.1");
        assert_eq!(parsed.prompt, "spaced out");
    }

    #[test]
    fn test_colon_later_in_text_is_ignored() {
        let parsed = parse_prompt("gemini", "build a 2:1 scale model");
        assert_eq!(parsed.command, "gemini");
        assert_eq!(parsed.prompt, "build a 2:1 scale model");
    }
}
