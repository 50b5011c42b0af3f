//! Runtime settings for the client

use log::warn;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

pub const BASE_URL_VAR: &str = "ACTIVITIES_BASE_URL";
pub const MESSAGE_TIMEOUT_VAR: &str = "ACTIVITIES_MESSAGE_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server the `/activities` endpoints live under.
    pub base_url: String,
    /// How long a status message stays visible.
    pub message_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            message_timeout: DEFAULT_MESSAGE_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_owned();
        }

        if let Some(raw) = lookup(MESSAGE_TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.message_timeout = Duration::from_millis(ms),
                Err(e) => warn!("Ignoring {}={:?}: {}", MESSAGE_TIMEOUT_VAR, raw, e),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        assert_eq!(ClientConfig::from_lookup(lookup_in(&[])), ClientConfig::default());
    }

    #[test]
    fn env_overrides() {
        let config = ClientConfig::from_lookup(lookup_in(&[
            (BASE_URL_VAR, " http://school.example:9000 "),
            (MESSAGE_TIMEOUT_VAR, "1500"),
        ]));
        assert_eq!(config.base_url, "http://school.example:9000");
        assert_eq!(config.message_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn bad_timeout_keeps_default() {
        let config = ClientConfig::from_lookup(lookup_in(&[(MESSAGE_TIMEOUT_VAR, "soon")]));
        assert_eq!(config.message_timeout, DEFAULT_MESSAGE_TIMEOUT);
    }
}
