//! Message dispatch service
//!
//! Sending writes the durable message row first, then the in-app
//! notification, and only then touches the SMS relay. Relay failures are
//! logged and swallowed: the recipient already has the message in-app.

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use portal_core::entities::{Message, Notification, User};
use portal_core::error::DomainError;
use portal_core::value_objects::{NotificationKind, SYSTEM_SENDER_ID};

use crate::dto::requests::{DispatchChannel, SendMessageRequest, SmsStubRequest};
use crate::dto::responses::{MessageResponse, SmsSendResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Notification title for an in-app message
const TITLE_MESSAGE: &str = "Nova Mensagem";
/// Notification title for an SMS-channel message
const TITLE_SMS: &str = "Novo SMS";
/// Preview length used for notification bodies
const PREVIEW_LEN: usize = 100;

/// Message dispatch service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a message to one recipient, addressed by id or by email.
    ///
    /// Always produces exactly one message row and one notification row.
    /// On the SMS channel the relay is additionally invoked when the
    /// recipient has a phone number on file.
    #[instrument(skip(self, request), fields(sender_id = %sender_id))]
    pub async fn dispatch(
        &self,
        sender_id: Uuid,
        request: SendMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        request.validate()?;

        let content = request.content.trim();
        if content.is_empty() {
            return Err(DomainError::EmptyMessage.into());
        }

        let receiver = self.resolve_receiver(&request).await?;
        if receiver.id == sender_id {
            return Err(ServiceError::validation("Cannot send a message to yourself"));
        }

        let sender = self
            .ctx
            .user_repo()
            .find_by_id(sender_id)
            .await?
            .ok_or(DomainError::UserNotFound(sender_id))?;

        let mut message = Message::new(Uuid::new_v4(), sender.id, receiver.id, content.to_string());
        message.is_sms = request.channel == DispatchChannel::Sms;

        self.ctx.message_repo().create(&message).await?;

        let (title, kind) = match request.channel {
            DispatchChannel::Message => (TITLE_MESSAGE, NotificationKind::Message),
            DispatchChannel::Sms => (TITLE_SMS, NotificationKind::Sms),
        };
        let notification = Notification::new(
            Uuid::new_v4(),
            receiver.id,
            title.to_string(),
            format!("{}: {}", sender.full_name, message.preview(PREVIEW_LEN)),
            kind,
        )
        .from_sender(sender.id);
        self.ctx.notification_repo().create(&notification).await?;

        if request.channel == DispatchChannel::Sms {
            self.relay_to(&receiver, content).await;
        }

        info!(
            message_id = %message.id,
            receiver_id = %receiver.id,
            is_sms = message.is_sms,
            "message dispatched"
        );

        Ok(MessageResponse::from(message))
    }

    /// Hard-delete one of the caller's own sent messages
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Uuid, message_id: Uuid) -> ServiceResult<()> {
        let message = self
            .ctx
            .message_repo()
            .find_by_id(message_id)
            .await?
            .ok_or(DomainError::MessageNotFound(message_id))?;

        if message.sender_id != user_id {
            return Err(DomainError::NotMessageSender.into());
        }

        self.ctx.message_repo().delete(message_id).await?;
        info!(message_id = %message_id, "message deleted");
        Ok(())
    }

    /// Relay-stub endpoint: record an outbound SMS as a broadcast row.
    ///
    /// The stub always reports success once the input is well-formed; a
    /// failed insert is logged but never surfaced, matching the relay
    /// contract the portal itself depends on.
    #[instrument(skip(self, request))]
    pub async fn record_relay_send(
        &self,
        request: SmsStubRequest,
    ) -> ServiceResult<SmsSendResponse> {
        let phone = request
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ServiceError::validation("phone is required"))?;
        let body = request
            .message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or_else(|| ServiceError::validation("message is required"))?;
        let kind = request.kind.as_deref().unwrap_or("general");

        let group_id = format!("sms_{}_{}", kind, Utc::now().timestamp_millis());
        let row = Message::new_sms_record(
            Uuid::new_v4(),
            SYSTEM_SENDER_ID,
            body.to_string(),
            group_id,
        );

        info!(phone = %phone, kind = %kind, sms_id = %row.id, "relay stub send");

        if let Err(e) = self.ctx.message_repo().create(&row).await {
            warn!(error = %e, sms_id = %row.id, "failed to record relay stub row");
        }

        Ok(SmsSendResponse {
            success: true,
            sms_id: row.id,
        })
    }

    async fn resolve_receiver(&self, request: &SendMessageRequest) -> ServiceResult<User> {
        if let Some(id) = request.receiver_id {
            return self
                .ctx
                .user_repo()
                .find_by_id(id)
                .await?
                .ok_or_else(|| DomainError::UserNotFound(id).into());
        }
        if let Some(email) = request.receiver_email.as_deref() {
            let email = email.trim();
            return self
                .ctx
                .user_repo()
                .find_by_email(email)
                .await?
                .ok_or_else(|| DomainError::RecipientNotFound(email.to_string()).into());
        }
        Err(ServiceError::validation(
            "receiver_id or receiver_email is required",
        ))
    }

    /// Best-effort SMS leg; never fails the dispatch
    async fn relay_to(&self, receiver: &User, content: &str) {
        let Some(phone) = receiver.phone.as_deref() else {
            info!(receiver_id = %receiver.id, "receiver has no phone, skipping SMS relay");
            return;
        };
        match self.ctx.sms_relay().send(phone, content, "message").await {
            Ok(delivery) if delivery.success => {
                info!(receiver_id = %receiver.id, sms_id = ?delivery.sms_id, "SMS relayed");
            }
            Ok(_) => {
                warn!(receiver_id = %receiver.id, "SMS relay reported failure");
            }
            Err(e) => {
                warn!(receiver_id = %receiver.id, error = %e, "SMS relay unreachable");
            }
        }
    }
}
