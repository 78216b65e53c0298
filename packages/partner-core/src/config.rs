use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};

/// Interval between autoplay ticks of the hero carousel.
pub const AUTOPLAY_PERIOD: Duration = Duration::from_millis(5000);

/// Cosmetic delay between confirming logout and clearing the session.
pub const LOGOUT_DELAY: Duration = Duration::from_millis(1500);

const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
const DEFAULT_SESSION_KEY: &str = "admin_creds";

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

/// Frontend configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Base URL of the backend API, without a trailing slash
    pub backend_url: String,
    /// Session storage key holding the serialized credential
    pub session_key: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }
}

impl PortalConfig {
    /// Build a config from raw values, validating the backend URL.
    pub fn new(backend_url: Option<String>, session_key: Option<String>) -> Result<Self> {
        let backend_url = backend_url.unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        url::Url::parse(&backend_url)
            .with_context(|| format!("BACKEND_URL is not a valid URL: {backend_url}"))?;

        let session_key = session_key
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SESSION_KEY.to_string());

        Ok(Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            session_key,
        })
    }

    /// Load configuration from environment variables
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Self::new(
            std::env::var("BACKEND_URL").ok(),
            std::env::var("ADMIN_SESSION_KEY").ok(),
        )
    }

    /// Load configuration baked in at compile time
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self> {
        Self::new(
            option_env!("BACKEND_URL").map(str::to_string),
            option_env!("ADMIN_SESSION_KEY").map(str::to_string),
        )
    }

    /// URL of the hero config endpoint
    pub fn hero_url(&self) -> String {
        format!("{}/api/hero", self.backend_url)
    }
}

/// Install the process-wide configuration. Call this at startup.
///
/// Later calls are ignored.
pub fn init(config: PortalConfig) {
    CONFIG.set(config).ok();
}

/// Get the installed configuration, or the defaults if none was installed
pub fn current() -> PortalConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = PortalConfig::new(None, None).unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.hero_url(), "http://localhost:8080/api/hero");
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = PortalConfig::new(Some("https://api.example.org/".to_string()), None).unwrap();
        assert_eq!(config.hero_url(), "https://api.example.org/api/hero");
    }

    #[test]
    fn test_invalid_backend_url_rejected() {
        let result = PortalConfig::new(Some("not a url".to_string()), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_session_key_falls_back() {
        let config = PortalConfig::new(None, Some("   ".to_string())).unwrap();
        assert_eq!(config.session_key, "admin_creds");
    }
}
