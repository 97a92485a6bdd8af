//! # portal-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `portal-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use portal_common::AppConfig;
//! use portal_db::pool::create_pool;
//! use portal_db::repositories::PgUserRepository;
//! use portal_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, PgPool};
pub use repositories::{
    PgAnnouncementRepository, PgAuditLogRepository, PgDocumentRepository,
    PgDocumentTypeRepository, PgMessageRepository, PgNotificationRepository,
    PgSupportTicketRepository, PgUserRepository,
};
