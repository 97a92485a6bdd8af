//! Value objects - roles, statuses, and domain constants

pub mod role;
pub mod status;

use uuid::Uuid;

pub use role::Role;
pub use status::{AnnouncementPriority, DocumentStatus, NotificationKind, SmsStatus, TicketStatus};

/// Sentinel sender used for system-generated broadcast rows (SMS bookkeeping).
pub const SYSTEM_SENDER_ID: Uuid = Uuid::from_u128(1);
