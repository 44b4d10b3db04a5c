use axum::{routing::post, Router};
use std::sync::Arc;

use crate::handler::quote_handler::{method_not_allowed_handler, send_quote_handler};
use crate::service::quote_service::QuoteServiceImpl;

pub fn quote_router(service: Arc<QuoteServiceImpl>) -> Router {
    // The method fallback keeps non-POST requests inside the JSON error
    // contract instead of axum's bare 405.
    Router::new()
        .route(
            "/api/send-email",
            post(send_quote_handler).fallback(method_not_allowed_handler),
        )
        .with_state(service)
}
