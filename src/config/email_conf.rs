use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// Default inbox for quote requests when no override is configured.
pub const DEFAULT_RECIPIENT: &str = "david@tegins.net";

/// Sender identity shown to the recipient's mail client.
pub const DEFAULT_FROM_ADDRESS: &str = "Atlanta Insurance Agency <onboarding@resend.dev>";

const DEFAULT_API_BASE_URL: &str = "https://api.resend.com";

/// Email configuration for the delivery provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Provider API credential
    pub api_key: String,
    /// Base URL of the provider API
    pub api_base_url: String,
    /// Sender address, must use a domain verified with the provider
    pub from_address: String,
    /// Inbox that receives quote requests
    pub recipient: String,
    /// Request timeout in seconds for provider calls
    pub request_timeout_secs: u64,
}

impl EmailConfig {
    /// Create EmailConfig from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading email configuration from environment variables");

        // A missing credential is left for the provider to reject at
        // dispatch time rather than failing the boot.
        let api_key = env::var("RESEND_API_KEY").unwrap_or_else(|_| {
            warn!("RESEND_API_KEY not set, provider dispatch will fail");
            String::new()
        });

        let api_base_url = env::var("RESEND_API_URL").unwrap_or_else(|_| {
            debug!("RESEND_API_URL not set, using {}", DEFAULT_API_BASE_URL);
            DEFAULT_API_BASE_URL.to_string()
        });
        debug!("Provider API base URL: {}", api_base_url);

        let from_address = env::var("QUOTE_FROM_ADDRESS").unwrap_or_else(|_| {
            debug!("QUOTE_FROM_ADDRESS not set, using default sender");
            DEFAULT_FROM_ADDRESS.to_string()
        });
        debug!("From address: {}", from_address);

        let recipient = env::var("RECIPIENT_EMAIL").unwrap_or_else(|_| {
            warn!("RECIPIENT_EMAIL not set, defaulting to {}", DEFAULT_RECIPIENT);
            DEFAULT_RECIPIENT.to_string()
        });
        debug!("Recipient: {}", recipient);

        let request_timeout_secs = env::var("EMAIL_REQUEST_TIMEOUT")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .map_err(|_| {
                error!("Invalid EMAIL_REQUEST_TIMEOUT value");
                ConfigError::InvalidValue("Invalid EMAIL_REQUEST_TIMEOUT value".to_string())
            })?;
        debug!("Request timeout: {} seconds", request_timeout_secs);

        let config = EmailConfig {
            api_key,
            api_base_url,
            from_address,
            recipient,
            request_timeout_secs,
        };

        config.validate()?;
        info!("Email configuration loaded successfully");
        Ok(config)
    }

    /// Create EmailConfig for testing
    pub fn from_test_env() -> Self {
        EmailConfig {
            api_key: "re_test_key".to_string(),
            api_base_url: "http://localhost:8787".to_string(),
            from_address: "Test Agency <test@example.com>".to_string(),
            recipient: "quotes@example.com".to_string(),
            request_timeout_secs: 5,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            error!("Provider API base URL is not an HTTP(S) URL");
            return Err(ConfigError::ValidationError(
                "Provider API base URL must start with http:// or https://".to_string(),
            ));
        }

        if self.from_address.is_empty() {
            error!("From address is empty");
            return Err(ConfigError::ValidationError("From address cannot be empty".to_string()));
        }

        if !self.recipient.contains('@') {
            error!("Invalid recipient email format");
            return Err(ConfigError::ValidationError("Invalid recipient email format".to_string()));
        }

        if self.request_timeout_secs == 0 {
            error!("Request timeout is 0");
            return Err(ConfigError::ValidationError("Request timeout cannot be 0".to_string()));
        }

        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        EmailConfig {
            api_key: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            from_address: DEFAULT_FROM_ADDRESS.to_string(),
            recipient: DEFAULT_RECIPIENT.to_string(),
            request_timeout_secs: 10,
        }
    }
}
