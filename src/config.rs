// config.rs

use thiserror::Error;

pub const MAX_LINE: usize = 255;
pub const MAX_ARGS: usize = 10;
pub const HISTORY_CAP: usize = 15;
pub const DEFAULT_PROMPT: &str = "msh> ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MSH_HISTORY_SIZE must be a positive integer, got {0:?}")]
    InvalidHistorySize(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub prompt: String,
    pub history_capacity: usize,
    pub max_args: usize,
    pub max_line: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            history_capacity: HISTORY_CAP,
            max_args: MAX_ARGS,
            max_line: MAX_LINE,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(prompt) = lookup("MSH_PROMPT") {
            config.prompt = prompt;
        }
        if let Some(raw) = lookup("MSH_HISTORY_SIZE") {
            config.history_capacity = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidHistorySize(raw)),
            };
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ShellConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.prompt, "msh> ");
        assert_eq!(config.history_capacity, 15);
        assert_eq!(config.max_args, 10);
        assert_eq!(config.max_line, 255);
    }

    #[test]
    fn prompt_and_history_size_are_overridable() {
        let config = ShellConfig::from_lookup(lookup_from(&[
            ("MSH_PROMPT", "$ "),
            ("MSH_HISTORY_SIZE", " 4 "),
        ]))
        .unwrap();
        assert_eq!(config.prompt, "$ ");
        assert_eq!(config.history_capacity, 4);
    }

    #[test]
    fn rejects_zero_or_garbage_history_size() {
        for bad in ["0", "-3", "lots"] {
            let err = ShellConfig::from_lookup(lookup_from(&[("MSH_HISTORY_SIZE", bad)])).unwrap_err();
            assert_eq!(err, ConfigError::InvalidHistorySize(bad.to_string()));
        }
    }
}
