//! Notification entity <-> model mapper

use portal_core::entities::Notification;
use portal_core::NotificationKind;

use crate::models::NotificationModel;

impl From<NotificationModel> for Notification {
    fn from(model: NotificationModel) -> Self {
        Notification {
            id: model.id,
            user_id: model.user_id,
            sender_id: model.sender_id,
            title: model.title,
            message: model.message,
            kind: NotificationKind::from_str_lossy(&model.kind),
            read: model.read,
            metadata: model.metadata,
            created_at: model.created_at,
        }
    }
}
