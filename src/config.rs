//! Runtime configuration from environment variables (plus `.env` via
//! dotenvy, loaded by the binary before this runs).

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_WEIGHTS_PATH: &str = "LEAD_WEIGHTS_PATH";
pub const ENV_REQUEST_PACE_MS: &str = "LEAD_REQUEST_PACE_MS";

pub const DEFAULT_WEIGHTS_PATH: &str = "config/weights.json";
pub const DEFAULT_REQUEST_PACE_MS: u64 = 1500;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub weights_path: PathBuf,
    pub pace: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .with_context(|| format!("{ENV_API_KEY} must be set (see .env.example)"))?;

        let weights_path = std::env::var(ENV_WEIGHTS_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_WEIGHTS_PATH));

        let pace_ms = std::env::var(ENV_REQUEST_PACE_MS)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_PACE_MS);

        Ok(Self {
            api_key,
            weights_path,
            pace: Duration::from_millis(pace_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[serial]
    #[test]
    fn missing_api_key_is_an_error() {
        std::env::remove_var(ENV_API_KEY);
        assert!(AppConfig::from_env().is_err());
    }

    #[serial]
    #[test]
    fn env_overrides_apply() {
        std::env::set_var(ENV_API_KEY, "k-123");
        std::env::set_var(ENV_WEIGHTS_PATH, "/tmp/w.json");
        std::env::set_var(ENV_REQUEST_PACE_MS, "250");

        let cfg = AppConfig::from_env().unwrap();
        assert_eq!(cfg.api_key, "k-123");
        assert_eq!(cfg.weights_path, PathBuf::from("/tmp/w.json"));
        assert_eq!(cfg.pace, Duration::from_millis(250));

        std::env::remove_var(ENV_API_KEY);
        std::env::remove_var(ENV_WEIGHTS_PATH);
        std::env::remove_var(ENV_REQUEST_PACE_MS);
    }
}
