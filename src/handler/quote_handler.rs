use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::{error, info};

use crate::dto::quote_dto::{QuoteRequestDto, SendEmailResponseDto};
use crate::model::quote::QuoteRequest;
use crate::service::quote_service::{QuoteService, QuoteServiceImpl};
use crate::util::error::{HandlerError, HandlerErrorKind};

/// POST /api/send-email
///
/// Validates the quote request, then hands it to the service for
/// sanitization, composition and provider dispatch. Every outcome is
/// answered as JSON; nothing is persisted between requests.
pub async fn send_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    payload: Result<Json<QuoteRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    info!("[send_quote_handler] Handler called");

    let Json(dto) = payload.map_err(|e| {
        error!("[send_quote_handler] Invalid JSON: {}", e);
        HandlerError {
            kind: HandlerErrorKind::BadRequest,
            message: format!("Invalid JSON: {}", e),
            details: None,
        }
    })?;

    let missing = dto.missing_required_fields();
    if !missing.is_empty() {
        error!("[send_quote_handler] Missing required fields: {}", missing.join(", "));
        return Err(HandlerError {
            kind: HandlerErrorKind::BadRequest,
            message: format!("Missing required fields: {}", missing.join(", ")),
            details: None,
        });
    }

    let receipt = service.relay_quote(QuoteRequest::from(dto)).await?;

    Ok(Json(SendEmailResponseDto {
        success: true,
        message: "Email sent successfully".to_string(),
        id: receipt.id,
    }))
}

/// Answers any non-POST method on the send-email route.
pub async fn method_not_allowed_handler() -> HandlerError {
    HandlerError {
        kind: HandlerErrorKind::MethodNotAllowed,
        message: "Method not allowed".to_string(),
        details: None,
    }
}
