//! Application configuration

use std::env;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Scenario id to start immediately, skipping the selection screen
    pub preselect_scenario: Option<String>,
    /// Print the result view as JSON once the profile is revealed
    pub result_json: bool,
    /// ANSI color output (turn off when piping into other tools)
    pub color: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            preselect_scenario: env::var("QUIZ_SCENARIO").ok().filter(|v| !v.trim().is_empty()),
            result_json: bool_var("QUIZ_RESULT_JSON", false)?,
            color: bool_var("QUIZ_COLOR", true)?,
        })
    }
}

fn bool_var(name: &str, default: bool) -> Result<bool> {
    match env::var(name) {
        Ok(value) => parse_bool(&value)
            .with_context(|| format!("{} must be a boolean flag (1/0/true/false)", name)),
        Err(_) => Ok(default),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool(" TRUE "), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
    }

    #[test]
    fn test_parse_bool_rejects_garbage() {
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
    }
}
