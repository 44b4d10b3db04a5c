use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::config::EmailConfig;
use crate::model::quote::QuoteRequest;
use crate::util::email::{EmailDelivery, EmailError, OutgoingEmail, SendReceipt};
use crate::util::error::ServiceError;
use crate::util::sanitize::escape_html;

#[async_trait]
pub trait QuoteService: Send + Sync {
    /// Relay one quote request to the agency inbox through the email
    /// provider. The request is not stored anywhere; the receipt is the
    /// only artifact of a successful relay.
    async fn relay_quote(&self, quote: QuoteRequest) -> Result<SendReceipt, ServiceError>;
}

pub struct QuoteServiceImpl {
    pub mailer: Arc<dyn EmailDelivery>,
    pub config: EmailConfig,
}

impl QuoteServiceImpl {
    pub fn new(mailer: Arc<dyn EmailDelivery>, config: EmailConfig) -> Self {
        QuoteServiceImpl { mailer, config }
    }

    /// Build the provider send request for one quote.
    ///
    /// Subject and reply-to are header fields interpreted by the provider
    /// and carry the raw values; both bodies are rendered from escaped
    /// values only.
    fn compose_email(&self, quote: &QuoteRequest) -> OutgoingEmail {
        OutgoingEmail {
            from: self.config.from_address.clone(),
            to: self.config.recipient.clone(),
            reply_to: quote.email.clone(),
            subject: format!("Quote Request: {}", quote.insurance_type),
            html: render_html_body(quote),
            text: render_text_body(quote),
        }
    }
}

#[async_trait]
impl QuoteService for QuoteServiceImpl {
    async fn relay_quote(&self, quote: QuoteRequest) -> Result<SendReceipt, ServiceError> {
        info!("Relaying quote request for insurance type: {}", quote.insurance_type);

        let email = self.compose_email(&quote);

        match self.mailer.send(email).await {
            Ok(receipt) => {
                info!(id = ?receipt.id, "Quote request relayed");
                Ok(receipt)
            }
            Err(EmailError::ProviderError { message, details }) => {
                error!("Provider refused quote email: {}", message);
                Err(ServiceError::ProviderFailure { message, details })
            }
            Err(e) => {
                error!("Quote email dispatch failed: {}", e);
                Err(ServiceError::InternalError(e.to_string()))
            }
        }
    }
}

/// HTML body: heading, field summary block, optional "Additional
/// Information" block, footer. All interpolated values are escaped.
fn render_html_body(quote: &QuoteRequest) -> String {
    let name = escape_html(&quote.name);
    let email = escape_html(&quote.email);
    let phone = escape_html(&quote.phone);
    let insurance_type = escape_html(&quote.insurance_type);

    let message_block = match quote.message_text() {
        Some(message) => format!(
            r#"
    <div style="background-color: #ffffff; padding: 20px; border-left: 4px solid #1e3a8a; margin: 20px 0;">
      <h3 style="color: #1e3a8a; margin-top: 0;">Additional Information:</h3>
      <p style="white-space: pre-wrap;">{}</p>
    </div>"#,
            escape_html(message)
        ),
        None => String::new(),
    };

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
    <h2 style="color: #1e3a8a;">New Quote Request</h2>
    <div style="background-color: #f3f4f6; padding: 20px; border-radius: 8px; margin: 20px 0;">
      <p><strong>Name:</strong> {name}</p>
      <p><strong>Email:</strong> {email}</p>
      <p><strong>Phone:</strong> {phone}</p>
      <p><strong>Insurance Type:</strong> {insurance_type}</p>
    </div>{message_block}
    <hr style="border: none; border-top: 1px solid #e5e7eb; margin: 30px 0;">
    <p style="color: #6b7280; font-size: 12px;">
      This email was sent from the Atlanta Insurance Agency contact form.
    </p>
  </div>"#
    )
}

/// Plain-text equivalent of the HTML body, same escaped values.
fn render_text_body(quote: &QuoteRequest) -> String {
    let mut body = format!(
        "New Quote Request\n\nName: {}\nEmail: {}\nPhone: {}\nInsurance Type: {}",
        escape_html(&quote.name),
        escape_html(&quote.email),
        escape_html(&quote.phone),
        escape_html(&quote.insurance_type),
    );

    if let Some(message) = quote.message_text() {
        body.push_str("\n\nAdditional Information:\n");
        body.push_str(&escape_html(message));
    }

    body
}
