use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;

use tegins_backend::config::EmailConfig;
use tegins_backend::util::email::{EmailDelivery, EmailError, OutgoingEmail, ResendEmailService};

/// What the fake provider observed for one send request.
#[derive(Default)]
struct ObservedRequest {
    authorization: Option<String>,
    payload: Option<Value>,
}

/// Bind a fake provider on an ephemeral port answering every send with the
/// given status and body, recording what it saw.
async fn spawn_provider(
    status: StatusCode,
    body: Value,
    observed: Arc<Mutex<ObservedRequest>>,
) -> String {
    let app = Router::new().route(
        "/emails",
        post(move |headers: HeaderMap, Json(payload): Json<Value>| {
            let body = body.clone();
            let observed = observed.clone();
            async move {
                let mut seen = observed.lock().await;
                seen.authorization = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                seen.payload = Some(payload);
                (status, Json(body))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn sample_email() -> OutgoingEmail {
    OutgoingEmail {
        from: "Test Agency <test@example.com>".to_string(),
        to: "quotes@example.com".to_string(),
        reply_to: "visitor@example.com".to_string(),
        subject: "Quote Request: Auto Insurance".to_string(),
        html: "<p>New Quote Request</p>".to_string(),
        text: "New Quote Request".to_string(),
    }
}

fn service_for(base_url: String) -> ResendEmailService {
    let mut config = EmailConfig::from_test_env();
    config.api_base_url = base_url;
    ResendEmailService::new(config).expect("Failed to create email service")
}

#[tokio::test]
async fn test_send_returns_provider_message_id() {
    let observed = Arc::new(Mutex::new(ObservedRequest::default()));
    let base_url = spawn_provider(
        StatusCode::OK,
        json!({"id": "re_live_1"}),
        observed.clone(),
    )
    .await;

    let receipt = service_for(base_url).send(sample_email()).await.unwrap();
    assert_eq!(receipt.id.as_deref(), Some("re_live_1"));

    let seen = observed.lock().await;
    assert_eq!(seen.authorization.as_deref(), Some("Bearer re_test_key"));
    let payload = seen.payload.as_ref().unwrap();
    assert_eq!(payload["reply_to"], "visitor@example.com");
    assert_eq!(payload["subject"], "Quote Request: Auto Insurance");
    assert_eq!(payload["to"], "quotes@example.com");
}

#[tokio::test]
async fn test_provider_rejection_surfaces_message_and_details() {
    let observed = Arc::new(Mutex::new(ObservedRequest::default()));
    let base_url = spawn_provider(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({"statusCode": 422, "name": "validation_error", "message": "The from domain is not verified"}),
        observed,
    )
    .await;

    let err = service_for(base_url).send(sample_email()).await.unwrap_err();
    match err {
        EmailError::ProviderError { message, details } => {
            assert_eq!(message, "The from domain is not verified");
            assert_eq!(details.unwrap()["name"], "validation_error");
        }
        other => panic!("expected provider error, got: {}", other),
    }
}

#[tokio::test]
async fn test_provider_rejection_without_message_uses_generic_text() {
    let observed = Arc::new(Mutex::new(ObservedRequest::default()));
    let base_url = spawn_provider(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"name": "application_error"}),
        observed,
    )
    .await;

    let err = service_for(base_url).send(sample_email()).await.unwrap_err();
    match err {
        EmailError::ProviderError { message, .. } => {
            assert_eq!(message, "Provider rejected the send request");
        }
        other => panic!("expected provider error, got: {}", other),
    }
}

#[tokio::test]
async fn test_unreachable_provider_is_a_transport_error() {
    // Bind then drop a listener so the port is closed when dialed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = service_for(format!("http://{}", addr))
        .send(sample_email())
        .await
        .unwrap_err();
    assert!(matches!(err, EmailError::TransportError(_)));
}
