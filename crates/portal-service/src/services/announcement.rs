//! Announcement service
//!
//! Staff broadcasts: one announcement row plus a tracking row and a
//! notification per recipient, with an optional best-effort SMS fan-out.

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use portal_core::entities::{Announcement, AnnouncementRecipient, Notification};
use portal_core::error::DomainError;
use portal_core::value_objects::{AnnouncementPriority, NotificationKind, Role};

use crate::dto::requests::CreateAnnouncementRequest;
use crate::dto::responses::AnnouncementResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Notification title for a new announcement
const TITLE_ANNOUNCEMENT: &str = "Novo Comunicado";

/// Announcement service
pub struct AnnouncementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AnnouncementService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Publish an announcement to every other user, staff only.
    ///
    /// The announcement and recipient rows are durable before any
    /// notification or SMS side effect runs; a relay failure leaves the
    /// recipient's `sms_delivered` flag false and nothing else.
    #[instrument(skip(self, request), fields(author_id = %author_id))]
    pub async fn create(
        &self,
        author_id: Uuid,
        caller_role: Role,
        request: CreateAnnouncementRequest,
    ) -> ServiceResult<AnnouncementResponse> {
        if !caller_role.is_staff() {
            return Err(DomainError::StaffRequired.into());
        }
        request.validate()?;

        let mut announcement = Announcement::new(
            Uuid::new_v4(),
            author_id,
            request.title.trim().to_string(),
            request.content.trim().to_string(),
        );
        announcement.priority = request
            .priority
            .as_deref()
            .map(AnnouncementPriority::from_str_lossy)
            .unwrap_or_default();
        announcement.send_as_sms = request.send_as_sms;
        announcement.expires_at = request.expires_at;

        self.ctx.announcement_repo().create(&announcement).await?;

        let recipients = self.ctx.user_repo().list_except(author_id).await?;
        let tracking: Vec<AnnouncementRecipient> = recipients
            .iter()
            .map(|u| AnnouncementRecipient::new(announcement.id, u.id))
            .collect();
        self.ctx.announcement_repo().add_recipients(&tracking).await?;

        for recipient in &recipients {
            let notification = Notification::new(
                Uuid::new_v4(),
                recipient.id,
                TITLE_ANNOUNCEMENT.to_string(),
                announcement.title.clone(),
                NotificationKind::Announcement,
            )
            .from_sender(author_id);
            self.ctx.notification_repo().create(&notification).await?;
        }

        if announcement.send_as_sms {
            for recipient in recipients.iter().filter(|u| u.has_phone()) {
                let phone = recipient.phone.as_deref().unwrap_or_default();
                match self
                    .ctx
                    .sms_relay()
                    .send(phone, &announcement.content, "announcement")
                    .await
                {
                    Ok(delivery) if delivery.success => {
                        self.ctx
                            .announcement_repo()
                            .set_sms_delivered(announcement.id, recipient.id)
                            .await?;
                    }
                    Ok(_) => {
                        warn!(recipient_id = %recipient.id, "announcement SMS reported failure");
                    }
                    Err(e) => {
                        warn!(recipient_id = %recipient.id, error = %e, "announcement SMS relay unreachable");
                    }
                }
            }
        }

        info!(
            announcement_id = %announcement.id,
            recipients = tracking.len(),
            sms = announcement.send_as_sms,
            "announcement published"
        );

        Ok(AnnouncementResponse::from(&announcement))
    }

    /// Unexpired announcements addressed to the caller, with viewed state
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: Uuid) -> ServiceResult<Vec<AnnouncementResponse>> {
        let rows = self
            .ctx
            .announcement_repo()
            .list_for_user(user_id, Utc::now())
            .await?;
        Ok(rows.into_iter().map(AnnouncementResponse::from).collect())
    }

    /// Every announcement ever published, staff only
    #[instrument(skip(self))]
    pub async fn list_all(&self, caller_role: Role) -> ServiceResult<Vec<AnnouncementResponse>> {
        if !caller_role.is_staff() {
            return Err(DomainError::StaffRequired.into());
        }
        let rows = self.ctx.announcement_repo().list_all().await?;
        Ok(rows.iter().map(AnnouncementResponse::from).collect())
    }

    /// Mark one announcement as viewed by the caller
    #[instrument(skip(self))]
    pub async fn mark_viewed(&self, announcement_id: Uuid, user_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .announcement_repo()
            .mark_viewed(announcement_id, user_id)
            .await?;
        Ok(())
    }
}
