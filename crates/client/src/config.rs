use std::{path::PathBuf, time::Duration};

use urbanroof_core::errors::{Error, Result};

/// Default base URL of the Urban Roof API.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Default timeout for API requests, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default location of the persisted session file.
pub const DEFAULT_SESSION_FILE: &str = "./.urbanroof/session.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub request_timeout: Duration,
    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl ClientConfig {
    /// Reads `.env` (when present) and then the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("URBANROOF_API_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(Error::InvalidConfigValue(format!(
                "URBANROOF_API_URL must be an http(s) URL, got '{}'",
                api_url
            )));
        }

        let timeout_ms = match lookup("URBANROOF_REQUEST_TIMEOUT_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                Error::InvalidConfigValue(format!(
                    "URBANROOF_REQUEST_TIMEOUT_MS must be a whole number of milliseconds, got '{}'",
                    raw
                ))
            })?,
            None => DEFAULT_TIMEOUT_MS,
        };

        let session_file = lookup("URBANROOF_SESSION_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

        Ok(Self {
            api_url,
            request_timeout: Duration::from_millis(timeout_ms),
            session_file,
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
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_reads_values() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("URBANROOF_API_URL", "https://api.urbanroof.co.ke/api"),
            ("URBANROOF_REQUEST_TIMEOUT_MS", "5000"),
            ("URBANROOF_SESSION_FILE", "/tmp/ur/session.json"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://api.urbanroof.co.ke/api");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.session_file, PathBuf::from("/tmp/ur/session.json"));
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = ClientConfig::from_lookup(lookup_from(&[("URBANROOF_REQUEST_TIMEOUT_MS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));

        let err = ClientConfig::from_lookup(lookup_from(&[("URBANROOF_API_URL", "ftp://x")]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }
}
