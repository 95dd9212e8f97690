//! Bot configuration loaded from environment variables.
//!
//! The two secrets are required; everything else has a default. A missing
//! secret is a startup fatal error, surfaced before any network activity.

use std::env;
use std::path::PathBuf;
use yerbul_core::error::{Result, YerbulError};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PROVINCES_PATH: &str = "data/iller.json";

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Telegram bot API token (`BOT_TOKEN`).
    pub bot_token: String,
    /// Geoapify API key (`GEOAPIFY_KEY`).
    pub geoapify_key: String,
    /// Liveness listener port (`PORT`, default 3000).
    pub port: u16,
    /// Path to the region/district reference document (`YERBUL_PROVINCES`).
    pub provinces_path: PathBuf,
    /// Geoapify base URL override (`GEOAPIFY_BASE_URL`), for test servers.
    pub geoapify_base_url: String,
}

impl BotConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let bot_token = require("BOT_TOKEN")?;
        let geoapify_key = require("GEOAPIFY_KEY")?;

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| YerbulError::ConfigInvalid {
                key: "PORT".to_string(),
                reason: format!("expected a port number, got '{raw}'"),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let provinces_path = env::var("YERBUL_PROVINCES")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_PROVINCES_PATH));

        let geoapify_base_url = env::var("GEOAPIFY_BASE_URL")
            .unwrap_or_else(|_| yerbul_geoapify::DEFAULT_BASE_URL.to_string());

        Ok(Self {
            bot_token,
            geoapify_key,
            port,
            provinces_path,
            geoapify_base_url,
        })
    }
}

fn require(key: &str) -> Result<String> {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| YerbulError::ConfigMissing {
            key: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_secrets() {
        env::set_var("BOT_TOKEN", "123:abc");
        env::set_var("GEOAPIFY_KEY", "k");
    }

    fn clear_all() {
        for key in [
            "BOT_TOKEN",
            "GEOAPIFY_KEY",
            "PORT",
            "YERBUL_PROVINCES",
            "GEOAPIFY_BASE_URL",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_apply_when_only_secrets_are_set() {
        clear_all();
        set_secrets();

        let config = BotConfig::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.provinces_path, PathBuf::from(DEFAULT_PROVINCES_PATH));
        assert_eq!(config.geoapify_base_url, yerbul_geoapify::DEFAULT_BASE_URL);
    }

    #[test]
    #[serial]
    fn test_missing_bot_token_is_fatal() {
        clear_all();
        env::set_var("GEOAPIFY_KEY", "k");

        let err = BotConfig::from_env().unwrap_err();
        assert!(matches!(err, YerbulError::ConfigMissing { key } if key == "BOT_TOKEN"));
    }

    #[test]
    #[serial]
    fn test_empty_geoapify_key_is_fatal() {
        clear_all();
        env::set_var("BOT_TOKEN", "123:abc");
        env::set_var("GEOAPIFY_KEY", "");

        let err = BotConfig::from_env().unwrap_err();
        assert!(matches!(err, YerbulError::ConfigMissing { key } if key == "GEOAPIFY_KEY"));
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_rejected() {
        clear_all();
        set_secrets();
        env::set_var("PORT", "not-a-port");

        let err = BotConfig::from_env().unwrap_err();
        assert!(matches!(err, YerbulError::ConfigInvalid { key, .. } if key == "PORT"));
    }

    #[test]
    #[serial]
    fn test_overrides_are_honored() {
        clear_all();
        set_secrets();
        env::set_var("PORT", "8080");
        env::set_var("YERBUL_PROVINCES", "/srv/iller.json");
        env::set_var("GEOAPIFY_BASE_URL", "http://localhost:9000");

        let config = BotConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.provinces_path, PathBuf::from("/srv/iller.json"));
        assert_eq!(config.geoapify_base_url, "http://localhost:9000");
    }
}
