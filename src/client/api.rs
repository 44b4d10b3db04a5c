use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::error;

use crate::client::form::{QuoteForm, SubmissionOutcome};
use crate::dto::quote_dto::QuoteRequestDto;

/// Confirmation shown after a delivered submission.
pub const CONFIRMATION_MESSAGE: &str = "Thank you! Your quote request has been sent.";

/// Shown when the server gave no usable error message, or the request
/// never completed.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// HTTP gateway the form controller submits through.
pub struct QuoteApi {
    client: Client,
    endpoint: String,
}

impl QuoteApi {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(QuoteApi {
            client,
            endpoint: format!("{}/api/send-email", base_url.trim_end_matches('/')),
        })
    }

    /// Post one quote request and map the exchange onto an outcome.
    ///
    /// A 2xx answer whose body has no `error` field is a delivery; any
    /// other answer is a rejection carrying the server message when one
    /// is present. A request that never completes is a rejection with the
    /// generic fallback.
    pub async fn send_quote(&self, payload: &QuoteRequestDto) -> SubmissionOutcome {
        let response = match self.client.post(&self.endpoint).json(payload).send().await {
            Ok(r) => r,
            Err(e) => {
                error!("Quote submission request failed: {}", e);
                return SubmissionOutcome::Rejected(FALLBACK_ERROR_MESSAGE.to_string());
            }
        };

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);
        let server_error = body.get("error").and_then(Value::as_str).map(str::to_string);

        if status.is_success() && server_error.is_none() {
            SubmissionOutcome::Delivered(CONFIRMATION_MESSAGE.to_string())
        } else {
            SubmissionOutcome::Rejected(
                server_error.unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
            )
        }
    }

    /// Drive one full submission round trip: Pending, request, resolution.
    /// Returns false when the form was not submittable (already pending or
    /// required fields missing) and no request was issued.
    pub async fn submit(&self, form: &mut QuoteForm) -> bool {
        let Some(payload) = form.begin_submit() else {
            return false;
        };
        let outcome = self.send_quote(&payload).await;
        form.resolve(outcome);
        true
    }
}
