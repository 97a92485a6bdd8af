//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use portal_common::{AppConfig, AppError, JwtService};
use portal_core::traits::SmsRelay;
use portal_db::{
    create_pool, PgAnnouncementRepository, PgAuditLogRepository, PgDocumentRepository,
    PgDocumentTypeRepository, PgMessageRepository, PgNotificationRepository,
    PgSupportTicketRepository, PgUserRepository,
};
use portal_service::ServiceContextBuilder;
use portal_sms::{HttpSmsRelay, NoopSmsRelay};
use portal_storage::LocalObjectStore;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let api = apply_middleware_with_config(
        create_router(),
        &state.config().rate_limit,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    // Health bypasses rate limiting so probes never get throttled
    let health = apply_middleware(health_routes());

    health.merge(api).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let object_store = LocalObjectStore::new(
        &config.storage.upload_dir,
        &config.storage.public_base_url,
    )
    .await
    .map_err(AppError::Domain)?;
    info!(dir = %config.storage.upload_dir, "Document storage ready");

    let sms_relay: Arc<dyn SmsRelay> = match config.sms.relay_url.as_deref() {
        Some(url) => {
            info!(url = %url, "Using HTTP SMS relay");
            Arc::new(HttpSmsRelay::new(url))
        }
        None => {
            info!("SMS_RELAY_URL not set, SMS sends are recorded locally only");
            Arc::new(NoopSmsRelay::new())
        }
    };

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .message_repo(Arc::new(PgMessageRepository::new(pool.clone())))
        .document_repo(Arc::new(PgDocumentRepository::new(pool.clone())))
        .document_type_repo(Arc::new(PgDocumentTypeRepository::new(pool.clone())))
        .notification_repo(Arc::new(PgNotificationRepository::new(pool.clone())))
        .announcement_repo(Arc::new(PgAnnouncementRepository::new(pool.clone())))
        .ticket_repo(Arc::new(PgSupportTicketRepository::new(pool.clone())))
        .audit_repo(Arc::new(PgAuditLogRepository::new(pool.clone())))
        .object_store(Arc::new(object_store))
        .sms_relay(sms_relay)
        .jwt_service(jwt_service)
        .max_upload_bytes(config.storage.max_file_size_bytes())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, pool))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
