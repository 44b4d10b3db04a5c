use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::config::{ConfigError, EmailConfig};

/// Email delivery errors
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Provider error: {message}")]
    ProviderError {
        message: String,
        details: Option<Value>,
    },
}

impl From<ConfigError> for EmailError {
    fn from(err: ConfigError) -> Self {
        EmailError::ConfigError(err.to_string())
    }
}

/// One outgoing message, shaped as the provider's send request body.
///
/// `reply_to` and `subject` carry raw submitter input: they are
/// provider-interpreted header fields, not rendered HTML. Only the two
/// bodies are built from escaped values.
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// What the provider acknowledged for a dispatched message.
#[derive(Debug, Clone)]
pub struct SendReceipt {
    pub id: Option<String>,
}

/// Capability seam for email dispatch, injected into the quote service so
/// tests can substitute a recording or failing implementation.
#[async_trait]
pub trait EmailDelivery: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<SendReceipt, EmailError>;
}

#[derive(Debug, Deserialize)]
struct ProviderSendResponse {
    id: Option<String>,
}

/// Resend-compatible HTTPS email service
pub struct ResendEmailService {
    pub config: EmailConfig,
    client: Client,
}

impl ResendEmailService {
    /// Create a new provider client with the configured request timeout
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        config.validate().map_err(EmailError::from)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| EmailError::TransportError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn send_url(&self) -> String {
        format!("{}/emails", self.config.api_base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl EmailDelivery for ResendEmailService {
    #[instrument(skip(self, email), fields(to = %email.to, subject = %email.subject))]
    async fn send(&self, email: OutgoingEmail) -> Result<SendReceipt, EmailError> {
        info!("Dispatching email through provider");

        let response = self
            .client
            .post(self.send_url())
            .bearer_auth(&self.config.api_key)
            .json(&email)
            .send()
            .await
            .map_err(|e| {
                error!("Provider request failed: {}", e);
                EmailError::TransportError(format!("Provider request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Provider rejected the send request")
                .to_string();
            error!("Provider returned {}: {}", status, message);
            return Err(EmailError::ProviderError {
                message,
                details: Some(body),
            });
        }

        let receipt: ProviderSendResponse = response.json().await.map_err(|e| {
            error!("Provider response could not be decoded: {}", e);
            EmailError::TransportError(format!("Provider response could not be decoded: {}", e))
        })?;

        info!("Email dispatched successfully");
        Ok(SendReceipt { id: receipt.id })
    }
}
