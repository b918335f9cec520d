//! The HTTP gateway: one network call per request, faults translated.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};

use brain_core::config::BackendConfig;
use brain_core::error::{BrainError, Result as BrainResult};

use crate::error::GatewayError;

/// Logical backend endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Free-form question answering.
    Chat,
    /// Structured door-schedule extraction.
    DoorSchedule,
    /// Backend liveness probe.
    Health,
}

impl Endpoint {
    /// URL path of the endpoint on the backend.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Chat => "/chat",
            Endpoint::DoorSchedule => "/door-schedule",
            Endpoint::Health => "/health",
        }
    }

    /// HTTP method the endpoint expects.
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Chat | Endpoint::DoorSchedule => Method::POST,
            Endpoint::Health => Method::GET,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Chat => write!(f, "chat"),
            Endpoint::DoorSchedule => write!(f, "door-schedule"),
            Endpoint::Health => write!(f, "health"),
        }
    }
}

/// The seam between the orchestrator and the network.
///
/// Implementations issue exactly one request per `send` call and perform no
/// retries; the orchestrator decides what a fault means for UI state.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Serialize `payload`, call `endpoint`, and return the decoded JSON
    /// response body. The payload is ignored for GET endpoints.
    async fn send(&self, endpoint: Endpoint, payload: Value) -> Result<Value, GatewayError>;
}

/// Gateway backed by a real HTTP client.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Build a gateway from backend configuration.
    pub fn from_config(config: &BackendConfig) -> BrainResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BrainError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            // Trailing slashes would double up when joined with endpoint paths.
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Probe the backend's `/health` endpoint.
    pub async fn health(&self) -> Result<Value, GatewayError> {
        self.send(Endpoint::Health, Value::Null).await
    }

    /// The configured backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn send(&self, endpoint: Endpoint, payload: Value) -> Result<Value, GatewayError> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let started = Instant::now();

        let request = if endpoint.method() == Method::GET {
            self.client.get(&url)
        } else {
            self.client.post(&url).json(&payload)
        };

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %endpoint, status = status.as_u16(), "Backend returned failure status");
            return Err(GatewayError::BadStatus(status.as_u16()));
        }

        // Read the body as text first so a dropped connection mid-body is
        // reported as a transport fault, not a decode fault.
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Unreachable(e.to_string()))?;
        let value = serde_json::from_str(&body)
            .map_err(|e| GatewayError::DecodeFailed(e.to_string()))?;

        debug!(
            endpoint = %endpoint,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Backend call completed"
        );
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Chat.path(), "/chat");
        assert_eq!(Endpoint::DoorSchedule.path(), "/door-schedule");
        assert_eq!(Endpoint::Health.path(), "/health");
    }

    #[test]
    fn test_endpoint_methods() {
        assert_eq!(Endpoint::Chat.method(), Method::POST);
        assert_eq!(Endpoint::DoorSchedule.method(), Method::POST);
        assert_eq!(Endpoint::Health.method(), Method::GET);
    }

    #[test]
    fn test_endpoint_display() {
        assert_eq!(Endpoint::Chat.to_string(), "chat");
        assert_eq!(Endpoint::DoorSchedule.to_string(), "door-schedule");
        assert_eq!(Endpoint::Health.to_string(), "health");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = BackendConfig {
            base_url: "http://127.0.0.1:8000/".to_string(),
            timeout_secs: 5,
        };
        let gateway = HttpGateway::from_config(&config).unwrap();
        assert_eq!(gateway.base_url(), "http://127.0.0.1:8000");
    }
}
