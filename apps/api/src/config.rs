use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Clone)]
pub struct Config {
    /// Base URL of the generateContent endpoint, ending in `?key=` or similar.
    /// The API key is appended to it verbatim.
    pub gemini_api_url: String,
    pub gemini_api_key: String,
    pub llm_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

// Hand-written so the API key never lands in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_url", &self.gemini_api_url)
            .field("gemini_api_key", &"<redacted>")
            .field("llm_timeout", &self.llm_timeout)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match lookup("LLM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_LLM_TIMEOUT_SECS,
        };

        Ok(Config {
            gemini_api_url: require("GEMINI_API_URL")?,
            gemini_api_key: require("GEMINI_API_KEY")?,
            llm_timeout: Duration::from_secs(timeout_secs),
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
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
    fn test_defaults_applied_when_optional_vars_missing() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_URL", "https://example.test/v1:generate?key="),
            ("GEMINI_API_KEY", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.llm_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[(
            "GEMINI_API_URL",
            "https://example.test/v1:generate?key=",
        )]))
        .unwrap_err();

        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_URL", "u"),
            ("GEMINI_API_KEY", "k"),
            ("PORT", "not-a-port"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_timeout() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_URL", "u"),
            ("GEMINI_API_KEY", "k"),
            ("LLM_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();
        assert_eq!(config.llm_timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_debug_output_redacts_key() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_URL", "u"),
            ("GEMINI_API_KEY", "super-secret-key"),
        ]))
        .unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret-key"));
    }
}
