//! Support ticket service
//!
//! Students open tickets; staff triage, assign, and settle them. The
//! owner is notified when their ticket is resolved.

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use portal_core::entities::{Notification, SupportTicket};
use portal_core::error::DomainError;
use portal_core::value_objects::{NotificationKind, Role, TicketStatus};

use crate::dto::requests::{CreateTicketRequest, UpdateTicketRequest};
use crate::dto::responses::TicketResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Notification title sent to the owner on resolution
const TITLE_RESOLVED: &str = "Chamado Resolvido";

/// Support ticket service
pub struct SupportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SupportService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Open a new ticket
    #[instrument(skip(self, request), fields(user_id = %user_id))]
    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateTicketRequest,
    ) -> ServiceResult<TicketResponse> {
        request.validate()?;

        let ticket = SupportTicket::new(
            Uuid::new_v4(),
            user_id,
            request.subject.trim().to_string(),
            request.description.trim().to_string(),
            request.category,
            request.priority,
        );
        self.ctx.ticket_repo().create(&ticket).await?;

        info!(ticket_id = %ticket.id, "ticket opened");
        Ok(TicketResponse::from(ticket))
    }

    /// The caller's own tickets, newest first
    #[instrument(skip(self))]
    pub async fn my_tickets(&self, user_id: Uuid) -> ServiceResult<Vec<TicketResponse>> {
        let tickets = self.ctx.ticket_repo().find_by_user(user_id).await?;
        Ok(tickets.iter().map(TicketResponse::from).collect())
    }

    /// The full triage queue, staff only
    #[instrument(skip(self))]
    pub async fn list_all(&self, caller_role: Role) -> ServiceResult<Vec<TicketResponse>> {
        if !caller_role.is_staff() {
            return Err(DomainError::StaffRequired.into());
        }
        let tickets = self.ctx.ticket_repo().list_all().await?;
        Ok(tickets.iter().map(TicketResponse::from).collect())
    }

    /// Update status and/or assignee, staff only.
    ///
    /// Closed tickets are immutable; moving a ticket to `resolved`
    /// notifies its owner.
    #[instrument(skip(self, request), fields(ticket_id = %ticket_id))]
    pub async fn update(
        &self,
        caller_role: Role,
        ticket_id: Uuid,
        request: UpdateTicketRequest,
    ) -> ServiceResult<TicketResponse> {
        if !caller_role.is_staff() {
            return Err(DomainError::StaffRequired.into());
        }

        let status = parse_status(&request.status)?;

        let ticket = self
            .ctx
            .ticket_repo()
            .find_by_id(ticket_id)
            .await?
            .ok_or(DomainError::TicketNotFound(ticket_id))?;

        if ticket.status.is_final() {
            return Err(DomainError::TicketClosed.into());
        }

        let assigned_to = request.assigned_to.or(ticket.assigned_to);
        if let Some(assignee) = request.assigned_to {
            self.ctx
                .user_repo()
                .find_by_id(assignee)
                .await?
                .ok_or(DomainError::UserNotFound(assignee))?;
        }

        self.ctx
            .ticket_repo()
            .update_status(ticket_id, status, assigned_to)
            .await?;

        if status == TicketStatus::Resolved && ticket.status != TicketStatus::Resolved {
            let notification = Notification::new(
                Uuid::new_v4(),
                ticket.user_id,
                TITLE_RESOLVED.to_string(),
                ticket.subject.clone(),
                NotificationKind::Ticket,
            );
            self.ctx.notification_repo().create(&notification).await?;
        }

        let updated = self
            .ctx
            .ticket_repo()
            .find_by_id(ticket_id)
            .await?
            .ok_or(DomainError::TicketNotFound(ticket_id))?;

        info!(ticket_id = %ticket_id, status = %status.as_str(), "ticket updated");
        Ok(TicketResponse::from(updated))
    }
}

fn parse_status(s: &str) -> ServiceResult<TicketStatus> {
    let parsed = TicketStatus::from_str_lossy(s);
    if parsed.as_str() != s {
        return Err(ServiceError::validation(format!(
            "Unknown ticket status: {s}"
        )));
    }
    Ok(parsed)
}
