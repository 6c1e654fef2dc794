//! Assistant configuration
//!
//! Passed explicitly into every dispatch; nothing here is process-global.

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "z-ai/glm-4.5-air:free";
pub const FALLBACK_MODEL: &str = "anthropic/claude-3-haiku";

/// Settings for the remote completion attempt and history window
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantConfig {
    /// `OpenRouter` key. `None` means every dispatch goes straight to fallback.
    pub api_key: Option<String>,
    pub default_model: String,
    /// Reported by the status endpoint, never dispatched to
    pub fallback_model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub timeout_seconds: u64,
    pub max_history_messages: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            default_model: DEFAULT_MODEL.to_string(),
            fallback_model: FALLBACK_MODEL.to_string(),
            max_tokens: 500,
            temperature: 0.7,
            top_p: 0.9,
            timeout_seconds: 30,
            max_history_messages: 10,
        }
    }
}

impl AssistantConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Unparseable values keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_key: lookup("OPENROUTER_API_KEY").filter(|k| !k.trim().is_empty()),
            default_model: lookup("SAFENEST_DEFAULT_MODEL").unwrap_or(defaults.default_model),
            fallback_model: lookup("SAFENEST_FALLBACK_MODEL").unwrap_or(defaults.fallback_model),
            max_tokens: parse_or(&lookup, "SAFENEST_MAX_TOKENS", defaults.max_tokens),
            temperature: parse_or(&lookup, "SAFENEST_TEMPERATURE", defaults.temperature),
            top_p: parse_or(&lookup, "SAFENEST_TOP_P", defaults.top_p),
            timeout_seconds: parse_or(
                &lookup,
                "SAFENEST_TIMEOUT_SECONDS",
                defaults.timeout_seconds,
            ),
            max_history_messages: parse_or(
                &lookup,
                "SAFENEST_MAX_HISTORY_MESSAGES",
                defaults.max_history_messages,
            ),
        }
    }

    /// Usable API key, if any. Blank keys count as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(var = name, value = %raw, "Ignoring unparseable setting");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AssistantConfig::from_lookup(|_| None);
        assert_eq!(config, AssistantConfig::default());
        assert_eq!(config.default_model, "z-ai/glm-4.5-air:free");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.max_history_messages, 10);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_overrides() {
        let config = AssistantConfig::from_lookup(lookup_from(&[
            ("OPENROUTER_API_KEY", "sk-or-abc"),
            ("SAFENEST_DEFAULT_MODEL", "openai/gpt-4o-mini"),
            ("SAFENEST_MAX_TOKENS", "256"),
            ("SAFENEST_TEMPERATURE", "0.2"),
            ("SAFENEST_TIMEOUT_SECONDS", "5"),
            ("SAFENEST_MAX_HISTORY_MESSAGES", "4"),
        ]));
        assert_eq!(config.api_key(), Some("sk-or-abc"));
        assert_eq!(config.default_model, "openai/gpt-4o-mini");
        assert_eq!(config.max_tokens, 256);
        assert!((config.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.max_history_messages, 4);
    }

    #[test]
    fn test_bad_numbers_keep_defaults() {
        let config = AssistantConfig::from_lookup(lookup_from(&[
            ("SAFENEST_MAX_TOKENS", "lots"),
            ("SAFENEST_TIMEOUT_SECONDS", "-3"),
        ]));
        assert_eq!(config.max_tokens, 500);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_blank_key_is_absent() {
        let config = AssistantConfig::from_lookup(lookup_from(&[("OPENROUTER_API_KEY", "  ")]));
        assert!(config.api_key.is_none());

        let config = AssistantConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(config.api_key().is_none());
    }
}
