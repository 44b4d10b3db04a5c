use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::config::app_conf::AppConfig;
use crate::config::EmailConfig;
use crate::router::quote_router::quote_router;
use crate::service::quote_service::QuoteServiceImpl;
use crate::util::email::{EmailDelivery, ResendEmailService};

pub struct App {
    config: AppConfig,
    router: Router,
    pub quote_service: Arc<QuoteServiceImpl>,
}

impl App {
    pub fn new() -> Self {
        let config = AppConfig::from_env();

        let email_config = EmailConfig::from_env().expect("Email config error");
        let mailer = Arc::new(
            ResendEmailService::new(email_config.clone()).expect("Email service error"),
        ) as Arc<dyn EmailDelivery>;
        let quote_service = Arc::new(QuoteServiceImpl::new(mailer, email_config));

        let mut app = App { config, router: Router::new(), quote_service };
        app.router = app.create_router();
        app
    }

    fn create_router(&self) -> Router {
        Router::new()
            .merge(quote_router(self.quote_service.clone()))
            .route("/health", get(|| async { "OK" }))
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(self.config.host.parse().expect("Invalid host"), self.config.port);
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind address");
        axum::serve(listener, self.router).await.expect("Failed to start server");
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
