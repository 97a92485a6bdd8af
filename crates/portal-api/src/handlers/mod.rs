//! HTTP handlers, one module per resource

pub mod announcements;
pub mod audit;
pub mod auth;
pub mod conversations;
pub mod documents;
pub mod health;
pub mod notifications;
pub mod sms;
pub mod tickets;
pub mod users;
