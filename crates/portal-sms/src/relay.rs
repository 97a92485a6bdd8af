//! SMS relay implementations

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use portal_core::error::DomainError;
use portal_core::{SmsDelivery, SmsRelay};

/// Request body the relay expects
#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    phone: &'a str,
    message: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
}

/// Response body the relay returns
#[derive(Debug, Deserialize)]
struct RelayResponse {
    success: bool,
    #[serde(default)]
    sms_id: Option<Uuid>,
}

/// SMS relay speaking JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpSmsRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSmsRelay {
    /// Create a relay client for the given endpoint URL
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SmsRelay for HttpSmsRelay {
    #[instrument(skip(self, message), fields(kind))]
    async fn send(
        &self,
        phone: &str,
        message: &str,
        kind: &str,
    ) -> Result<SmsDelivery, DomainError> {
        let request = RelayRequest {
            phone,
            message,
            kind,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::SmsRelayError(e.to_string()))?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "SMS relay returned error status");
            return Err(DomainError::SmsRelayError(format!(
                "relay responded with status {}",
                response.status()
            )));
        }

        let body: RelayResponse = response
            .json()
            .await
            .map_err(|e| DomainError::SmsRelayError(e.to_string()))?;

        debug!(success = body.success, "SMS relay responded");

        Ok(SmsDelivery {
            success: body.success,
            sms_id: body.sms_id,
        })
    }
}

/// Relay used when no endpoint is configured: reports every message as
/// delivered without sending anything.
#[derive(Debug, Clone, Default)]
pub struct NoopSmsRelay;

impl NoopSmsRelay {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SmsRelay for NoopSmsRelay {
    async fn send(
        &self,
        phone: &str,
        _message: &str,
        kind: &str,
    ) -> Result<SmsDelivery, DomainError> {
        debug!(phone, kind, "SMS relay disabled; dropping message");
        Ok(SmsDelivery {
            success: true,
            sms_id: Some(Uuid::new_v4()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_type_field() {
        let request = RelayRequest {
            phone: "+244923000111",
            message: "Olá",
            kind: "notification",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["phone"], "+244923000111");
        assert_eq!(json["type"], "notification");
    }

    #[test]
    fn test_response_tolerates_missing_sms_id() {
        let body: RelayResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!body.success);
        assert!(body.sms_id.is_none());
    }

    #[tokio::test]
    async fn test_noop_relay_always_succeeds() {
        let relay = NoopSmsRelay::new();
        let delivery = relay.send("+244923000111", "Olá", "message").await.unwrap();
        assert!(delivery.success);
        assert!(delivery.sms_id.is_some());
    }
}
