//! Message entity <-> model mappers

use portal_core::entities::Message;
use portal_core::{Role, SmsStatus, ThreadMessage};

use crate::models::{MessageModel, ThreadMessageModel};

impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: model.id,
            sender_id: model.sender_id,
            receiver_id: model.receiver_id,
            content: model.content,
            created_at: model.created_at,
            read: model.read,
            is_sms: model.is_sms,
            sms_status: model.sms_status.as_deref().map(SmsStatus::from_str_lossy),
            group_id: model.group_id,
        }
    }
}

impl From<ThreadMessageModel> for ThreadMessage {
    fn from(model: ThreadMessageModel) -> Self {
        ThreadMessage {
            message: Message {
                id: model.id,
                sender_id: model.sender_id,
                receiver_id: model.receiver_id,
                content: model.content,
                created_at: model.created_at,
                read: model.read,
                is_sms: model.is_sms,
                sms_status: model.sms_status.as_deref().map(SmsStatus::from_str_lossy),
                group_id: model.group_id,
            },
            sender_name: model.sender_name,
            sender_role: model.sender_role.as_deref().map(Role::from_str_lossy),
            receiver_name: model.receiver_name,
            receiver_role: model.receiver_role.as_deref().map(Role::from_str_lossy),
        }
    }
}
