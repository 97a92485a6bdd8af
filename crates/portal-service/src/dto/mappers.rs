//! Entity → response DTO conversions

use chrono::Utc;

use portal_core::conversation::Conversation;
use portal_core::entities::{
    Announcement, AnnouncementRecipient, AuditLog, Document, DocumentType, Message, Notification,
    SupportTicket, User,
};

use super::responses::{
    AnnouncementResponse, AuditLogResponse, ConversationResponse, DocumentResponse,
    DocumentTypeResponse, MessageResponse, NotificationResponse, TicketResponse, UserResponse,
};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role.as_str().to_string(),
            phone: user.phone.clone(),
            created_at: user.created_at,
            last_login: user.last_login,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            sender_id: message.sender_id,
            receiver_id: message.receiver_id,
            content: message.content.clone(),
            created_at: message.created_at,
            read: message.read,
            is_sms: message.is_sms,
        }
    }
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self::from(&message)
    }
}

impl From<Conversation> for ConversationResponse {
    fn from(conversation: Conversation) -> Self {
        Self {
            counterpart_id: conversation.counterpart_id,
            counterpart_name: conversation.counterpart_name,
            counterpart_role: conversation.counterpart_role.as_str().to_string(),
            last_message: conversation.last_message.map(MessageResponse::from),
            unread_count: conversation.unread_count,
        }
    }
}

impl From<&DocumentType> for DocumentTypeResponse {
    fn from(document_type: &DocumentType) -> Self {
        Self {
            id: document_type.id,
            name: document_type.name.clone(),
            description: document_type.description.clone(),
            required: document_type.required,
        }
    }
}

impl From<&Document> for DocumentResponse {
    fn from(document: &Document) -> Self {
        Self {
            id: document.id,
            user_id: document.user_id,
            document_type_id: document.document_type_id,
            status: document.status.as_str().to_string(),
            file_url: document.file_url.clone(),
            file_hash: document.file_hash.clone(),
            expires_at: document.expires_at,
            expiring_soon: document.is_expiring_soon_at(Utc::now()),
            verification_notes: document.verification_notes.clone(),
            verified_by: document.verified_by,
            created_at: document.created_at,
            updated_at: document.updated_at,
            metadata: document.metadata.clone(),
        }
    }
}

impl From<Document> for DocumentResponse {
    fn from(document: Document) -> Self {
        Self::from(&document)
    }
}

impl From<&Announcement> for AnnouncementResponse {
    fn from(announcement: &Announcement) -> Self {
        Self {
            id: announcement.id,
            author_id: announcement.author_id,
            title: announcement.title.clone(),
            content: announcement.content.clone(),
            priority: announcement.priority.as_str().to_string(),
            send_as_sms: announcement.send_as_sms,
            expires_at: announcement.expires_at,
            created_at: announcement.created_at,
            viewed: None,
            sms_delivered: None,
        }
    }
}

impl From<(Announcement, AnnouncementRecipient)> for AnnouncementResponse {
    fn from((announcement, recipient): (Announcement, AnnouncementRecipient)) -> Self {
        let mut response = Self::from(&announcement);
        response.viewed = Some(recipient.viewed);
        response.sms_delivered = Some(recipient.sms_delivered);
        response
    }
}

impl From<&SupportTicket> for TicketResponse {
    fn from(ticket: &SupportTicket) -> Self {
        Self {
            id: ticket.id,
            user_id: ticket.user_id,
            subject: ticket.subject.clone(),
            description: ticket.description.clone(),
            category: ticket.category.clone(),
            priority: ticket.priority.clone(),
            status: ticket.status.as_str().to_string(),
            assigned_to: ticket.assigned_to,
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
        }
    }
}

impl From<SupportTicket> for TicketResponse {
    fn from(ticket: SupportTicket) -> Self {
        Self::from(&ticket)
    }
}

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id,
            user_id: notification.user_id,
            sender_id: notification.sender_id,
            title: notification.title.clone(),
            message: notification.message.clone(),
            kind: notification.kind.as_str().to_string(),
            read: notification.read,
            created_at: notification.created_at,
        }
    }
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self::from(&notification)
    }
}

impl From<&AuditLog> for AuditLogResponse {
    fn from(log: &AuditLog) -> Self {
        Self {
            id: log.id,
            user_id: log.user_id,
            action_type: log.action_type.clone(),
            table_name: log.table_name.clone(),
            record_id: log.record_id.clone(),
            metadata: log.metadata.clone(),
            ip_address: log.ip_address.clone(),
            created_at: log.created_at,
        }
    }
}

impl From<AuditLog> for AuditLogResponse {
    fn from(log: AuditLog) -> Self {
        Self::from(&log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::value_objects::Role;
    use uuid::Uuid;

    #[test]
    fn test_user_response_hides_password_material() {
        let mut user = User::new(
            Uuid::new_v4(),
            "ana@example.com".to_string(),
            "Ana Silva".to_string(),
        );
        user.role = Role::Officer;

        let response = UserResponse::from(&user);
        assert_eq!(response.role, "officer");

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("phone").is_none());
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_announcement_response_with_recipient_state() {
        let announcement = Announcement::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Aviso".to_string(),
            "Conteúdo".to_string(),
        );
        let mut recipient = AnnouncementRecipient::new(announcement.id, Uuid::new_v4());
        recipient.viewed = true;

        let response = AnnouncementResponse::from((announcement, recipient));
        assert_eq!(response.viewed, Some(true));
        assert_eq!(response.sms_delivered, Some(false));
    }
}
