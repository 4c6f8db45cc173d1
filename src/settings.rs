//! Runtime configuration
//!
//! Loaded once at startup from a TOML file and immutable afterwards. The
//! sub-model and example mappings live here rather than in code so the
//! supported model roster can change without a rebuild.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration load errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// One command's ordered list of `:suffix` completion tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubModelSet {
    pub command: String,
    pub suffixes: Vec<String>,
}

/// Replacement example prompts for a single command.
///
/// A command listed here completes ONLY from its own prompts - no sub-model
/// suggestions and no shared examples (the `/agent` behavior).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleOverride {
    pub command: String,
    pub prompts: Vec<String>,
}

/// Bridge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory that receives `cmd_<millis>.json` files
    pub queue_dir: PathBuf,

    /// Command names the bridge answers for, without the leading slash
    pub commands: Vec<String>,

    /// Commands queued immediately with an empty prompt, arguments ignored
    pub passthrough_commands: Vec<String>,

    /// Example prompts offered to every prompt-taking command
    pub example_prompts: Vec<String>,

    /// Sub-model completion sets; entry order and suffix order are both
    /// significant and preserved from the file
    pub sub_models: Vec<SubModelSet>,

    /// Per-command example replacements
    pub example_overrides: Vec<ExampleOverride>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            queue_dir: PathBuf::from("queue"),
            commands: [
                "claude",
                "openai",
                "gemini",
                "deepseek",
                "kimi",
                "grok",
                "glm",
                "openrouter",
                "agent",
                "aihelp",
                "models",
            ]
            .map(String::from)
            .to_vec(),
            passthrough_commands: ["aihelp", "models"].map(String::from).to_vec(),
            example_prompts: [
                "build a castle",
                "build a medieval house",
                "build a modern skyscraper",
                "build a japanese temple",
                "build a pirate ship",
                "build a lighthouse",
                "build a fountain",
                "build a tower",
            ]
            .map(String::from)
            .to_vec(),
            sub_models: vec![
                sub_model_set("claude", &[":sonnet", ":haiku"]),
                sub_model_set("openai", &[":o4-mini", ":gpt-5.1", ":gpt-5-mini"]),
                sub_model_set("gemini", &[":flash", ":pro"]),
                sub_model_set("openrouter", &[":deepseek", ":kimi", ":grok", ":glm"]),
            ],
            example_overrides: vec![ExampleOverride {
                command: "agent".to_string(),
                prompts: [
                    "come to me",
                    "mine 10 oak logs",
                    "craft a crafting table",
                    "bring me 32 oak planks",
                    "explore the area around me",
                    "collect all nearby items",
                    "place a ring of torches around me",
                ]
                .map(String::from)
                .to_vec(),
            }],
        }
    }
}

fn sub_model_set(command: &str, suffixes: &[&str]) -> SubModelSet {
    SubModelSet {
        command: command.to_string(),
        suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file
    /// does not exist
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default config location: `aibridge.toml` next to the process if
    /// present, otherwise the platform config directory
    pub fn default_path() -> PathBuf {
        let local = PathBuf::from("aibridge.toml");
        if local.exists() {
            return local;
        }

        dirs::config_dir()
            .map(|dir| dir.join("aibridge").join("config.toml"))
            .unwrap_or(local)
    }

    /// Whether `command` queues immediately with an empty prompt
    pub fn is_passthrough(&self, command: &str) -> bool {
        self.passthrough_commands
            .iter()
            .any(|c| c.eq_ignore_ascii_case(command))
    }

    /// Ordered sub-model suffixes for `command`, if it has any
    pub fn sub_models_for(&self, command: &str) -> Option<&[String]> {
        self.sub_models
            .iter()
            .find(|set| set.command.eq_ignore_ascii_case(command))
            .map(|set| set.suffixes.as_slice())
    }

    /// Replacement example prompts for `command`, if configured
    pub fn example_override_for(&self, command: &str) -> Option<&[String]> {
        self.example_overrides
            .iter()
            .find(|set| set.command.eq_ignore_ascii_case(command))
            .map(|set| set.prompts.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_cover_roster() {
        let settings = Settings::default();
        assert!(settings.commands.iter().any(|c| c == "claude"));
        assert!(settings.is_passthrough("aihelp"));
        assert!(settings.is_passthrough("models"));
        assert!(!settings.is_passthrough("claude"));
        assert_eq!(
            settings.sub_models_for("claude").unwrap(),
            &[":sonnet".to_string(), ":haiku".to_string()]
        );
        assert!(settings.example_override_for("agent").is_some());
        assert!(settings.example_override_for("claude").is_none());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(settings.queue_dir, PathBuf::from("queue"));
    }

    #[test]
    fn test_load_preserves_mapping_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"
queue_dir = "outbox"

[[sub_models]]
command = "kimi"
suffixes = [":k2.5", ":k2"]

[[sub_models]]
command = "grok"
suffixes = [":grok-4"]
"#
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.queue_dir, PathBuf::from("outbox"));
        assert_eq!(settings.sub_models[0].command, "kimi");
        assert_eq!(settings.sub_models[1].command, "grok");
        assert_eq!(
            settings.sub_models_for("kimi").unwrap(),
            &[":k2.5".to_string(), ":k2".to_string()]
        );
        // Unspecified fields keep their defaults
        assert!(settings.is_passthrough("models"));
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "queue_dir = [not toml").unwrap();
        match Settings::load(&path) {
            Err(SettingsError::Parse { .. }) => {}
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_settings_round_trip_toml() {
        let settings = Settings::default();
        let text = toml::to_string_pretty(&settings).unwrap();
        let back: Settings = toml::from_str(&text).unwrap();
        assert_eq!(back.commands, settings.commands);
        assert_eq!(back.example_prompts, settings.example_prompts);
    }
}
