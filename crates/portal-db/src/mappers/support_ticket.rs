//! Support ticket entity <-> model mapper

use portal_core::entities::SupportTicket;
use portal_core::TicketStatus;

use crate::models::SupportTicketModel;

impl From<SupportTicketModel> for SupportTicket {
    fn from(model: SupportTicketModel) -> Self {
        SupportTicket {
            id: model.id,
            user_id: model.user_id,
            subject: model.subject,
            description: model.description,
            category: model.category,
            priority: model.priority,
            status: TicketStatus::from_str_lossy(&model.status),
            assigned_to: model.assigned_to,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
