//! HTTP client for the hero config endpoint

use serde_json::Value;
use tracing::debug;

use crate::config::PortalConfig;
use crate::error::Result;
use crate::hero::HeroConfig;

/// Client for `GET {backend}/api/hero`
#[derive(Clone)]
pub struct HeroClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HeroClient {
    /// Create a client for a full endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(config.hero_url())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the remote hero config.
    ///
    /// Network errors, non-success statuses and non-JSON bodies are errors;
    /// shape problems inside a JSON body are not (see [`HeroConfig::from_value`]).
    pub async fn fetch(&self) -> Result<HeroConfig> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        debug!(endpoint = %self.endpoint, "Fetched hero config");

        Ok(HeroConfig::from_value(&body))
    }

    /// Fetch the config, logging and discarding any failure
    pub async fn fetch_or_default(&self) -> Option<HeroConfig> {
        match self.fetch().await {
            Ok(config) => Some(config),
            Err(e) => {
                debug!(endpoint = %self.endpoint, error = %e, "Hero config unavailable, keeping defaults");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_config() {
        let config = PortalConfig::new(Some("https://api.example.org/".to_string()), None).unwrap();
        let client = HeroClient::from_config(&config);
        assert_eq!(client.endpoint(), "https://api.example.org/api/hero");
    }

    #[tokio::test]
    async fn test_unreachable_backend_yields_none() {
        // Bind then drop so the port is known to refuse connections.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HeroClient::new(format!("http://{addr}/api/hero"));
        assert!(matches!(client.fetch().await, Err(crate::PortalError::Network(_))));
        assert!(client.fetch_or_default().await.is_none());
    }
}
