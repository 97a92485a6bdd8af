//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{
    announcements, audit, auth, conversations, documents, health, notifications, sms, tickets,
    users,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for
/// separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(messaging_routes())
        .merge(document_routes())
        .merge(announcement_routes())
        .merge(ticket_routes())
        .merge(notification_routes())
        .merge(audit_routes())
        .merge(sms_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/me", get(auth::me))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_all))
        .route("/users/directory", get(users::directory))
        .route("/users/@me", patch(users::update_profile))
        .route(
            "/users/:user_id",
            patch(users::admin_update).delete(users::remove),
        )
}

/// Conversation and message routes
fn messaging_routes() -> Router<AppState> {
    Router::new()
        .route("/conversations", get(conversations::list))
        .route("/conversations/:counterpart_id", get(conversations::open_thread))
        .route("/messages", post(conversations::send))
        .route("/messages/:message_id", delete(conversations::delete))
}

/// Document routes
fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/documents", get(documents::my_documents))
        .route("/documents", post(documents::submit))
        .route("/documents/types", get(documents::list_types))
        .route("/documents/all", get(documents::all_documents))
        .route("/documents/compliance", get(documents::compliance))
        .route("/documents/:document_id/review", post(documents::review))
}

/// Announcement routes
fn announcement_routes() -> Router<AppState> {
    Router::new()
        .route("/announcements", get(announcements::list))
        .route("/announcements", post(announcements::create))
        .route("/announcements/all", get(announcements::list_all))
        .route(
            "/announcements/:announcement_id/view",
            post(announcements::mark_viewed),
        )
}

/// Support ticket routes
fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route("/tickets", get(tickets::my_tickets))
        .route("/tickets", post(tickets::create))
        .route("/tickets/all", get(tickets::list_all))
        .route("/tickets/:ticket_id", patch(tickets::update))
}

/// Notification routes
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(notifications::list))
        .route("/notifications/unread-count", get(notifications::unread_count))
        .route("/notifications/read-all", post(notifications::mark_all_read))
        .route(
            "/notifications/:notification_id/read",
            post(notifications::mark_read),
        )
}

/// Audit log routes
fn audit_routes() -> Router<AppState> {
    Router::new().route("/audit-logs", get(audit::list))
}

/// SMS relay stub routes
fn sms_routes() -> Router<AppState> {
    Router::new().route("/sms/send", post(sms::send))
}
