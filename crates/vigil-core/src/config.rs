//! Console configuration.
//!
//! TOML-backed settings for the assistant and the search palette. Every
//! field has a default so a missing or empty config file yields a working
//! console.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Modifier half of a keyboard chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyModifier {
    Ctrl,
    Cmd,
    Alt,
}

/// A keyboard shortcut combining a modifier and a character key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyChord {
    pub modifier: KeyModifier,
    pub key: char,
}

impl Default for KeyChord {
    fn default() -> Self {
        Self {
            modifier: KeyModifier::Ctrl,
            key: 'k',
        }
    }
}

/// Settings for the conversation assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Delay before a scheduled reply fires, in milliseconds. Zero is
    /// legal and collapses the delay (used by tests).
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

fn default_reply_delay_ms() -> u64 {
    1500
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

/// Settings for the search palette.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Chord that toggles the palette open/closed.
    #[serde(default)]
    pub shortcut: KeyChord,
}

/// Root configuration for the console.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl ConsoleConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.assistant.reply_delay_ms, 1500);
        assert_eq!(config.search.shortcut.modifier, KeyModifier::Ctrl);
        assert_eq!(config.search.shortcut.key, 'k');
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = ConsoleConfig::from_toml_str("").unwrap();
        assert_eq!(config.assistant.reply_delay_ms, 1500);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = ConsoleConfig::from_toml_str(
            r#"
            [assistant]
            reply_delay_ms = 0

            [search.shortcut]
            modifier = "cmd"
            key = "p"
            "#,
        )
        .unwrap();
        assert_eq!(config.assistant.reply_delay_ms, 0);
        assert_eq!(config.search.shortcut.modifier, KeyModifier::Cmd);
        assert_eq!(config.search.shortcut.key, 'p');
    }

    #[test]
    fn test_invalid_toml_is_a_serialization_error() {
        let err = ConsoleConfig::from_toml_str("assistant = 3").unwrap_err();
        assert!(err.is_serialization());
    }
}
