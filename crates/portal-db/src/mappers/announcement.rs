//! Announcement entity <-> model mappers

use portal_core::entities::{Announcement, AnnouncementRecipient};
use portal_core::AnnouncementPriority;

use crate::models::{AnnouncementModel, AnnouncementRecipientModel, AnnouncementWithStateModel};

impl From<AnnouncementModel> for Announcement {
    fn from(model: AnnouncementModel) -> Self {
        Announcement {
            id: model.id,
            author_id: model.author_id,
            title: model.title,
            content: model.content,
            priority: AnnouncementPriority::from_str_lossy(&model.priority),
            send_as_sms: model.send_as_sms,
            expires_at: model.expires_at,
            created_at: model.created_at,
        }
    }
}

impl From<AnnouncementRecipientModel> for AnnouncementRecipient {
    fn from(model: AnnouncementRecipientModel) -> Self {
        AnnouncementRecipient {
            announcement_id: model.announcement_id,
            user_id: model.user_id,
            viewed: model.viewed,
            sms_delivered: model.sms_delivered,
        }
    }
}

impl From<AnnouncementWithStateModel> for (Announcement, AnnouncementRecipient) {
    fn from(model: AnnouncementWithStateModel) -> Self {
        let announcement = Announcement {
            id: model.id,
            author_id: model.author_id,
            title: model.title,
            content: model.content,
            priority: AnnouncementPriority::from_str_lossy(&model.priority),
            send_as_sms: model.send_as_sms,
            expires_at: model.expires_at,
            created_at: model.created_at,
        };
        let recipient = AnnouncementRecipient {
            announcement_id: model.id,
            user_id: model.user_id,
            viewed: model.viewed,
            sms_delivered: model.sms_delivered,
        };
        (announcement, recipient)
    }
}
