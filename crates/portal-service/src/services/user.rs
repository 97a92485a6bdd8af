//! User service
//!
//! Profile reads, the conversation picker directory, and staff account
//! listings.

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use portal_core::error::DomainError;
use portal_core::value_objects::Role;

use crate::dto::requests::{AdminUpdateUserRequest, UpdateProfileRequest};
use crate::dto::responses::UserResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One user's profile
    pub async fn get(&self, user_id: Uuid) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;
        Ok(UserResponse::from(user))
    }

    /// Everyone except the caller; feeds the new-conversation picker and
    /// announcement recipient lists
    #[instrument(skip(self))]
    pub async fn directory(&self, current_user: Uuid) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list_except(current_user).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Every account, staff only
    #[instrument(skip(self))]
    pub async fn list_all(&self, caller_role: Role) -> ServiceResult<Vec<UserResponse>> {
        if !caller_role.is_staff() {
            return Err(DomainError::StaffRequired.into());
        }
        let users = self.ctx.user_repo().list_all().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Update the caller's own name and/or phone
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        request.validate()?;

        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if let Some(full_name) = request.full_name {
            user.full_name = full_name.trim().to_string();
        }
        user.phone = request.phone.filter(|p| !p.trim().is_empty());

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user.id, "profile updated");
        Ok(UserResponse::from(user))
    }

    /// Staff edit of another account's name, phone, or role. Role changes
    /// are reserved for admins so an officer cannot promote anyone
    /// (themselves included).
    #[instrument(skip(self, request))]
    pub async fn admin_update(
        &self,
        caller_role: Role,
        target_id: Uuid,
        request: AdminUpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        if !caller_role.is_staff() {
            return Err(DomainError::StaffRequired.into());
        }
        request.validate()?;

        let new_role = request.role.as_deref().map(parse_role).transpose()?;
        if new_role.is_some() && !caller_role.is_admin() {
            return Err(DomainError::AdminRequired.into());
        }

        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", target_id.to_string()))?;

        if let Some(full_name) = request.full_name {
            user.full_name = full_name.trim().to_string();
        }
        user.phone = request.phone.filter(|p| !p.trim().is_empty());
        if let Some(role) = new_role {
            user.role = role;
        }

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user.id, role = %user.role, "account updated by staff");
        Ok(UserResponse::from(user))
    }

    /// Delete an account, admin only. Admins cannot delete themselves.
    #[instrument(skip(self))]
    pub async fn remove(
        &self,
        caller_id: Uuid,
        caller_role: Role,
        target_id: Uuid,
    ) -> ServiceResult<()> {
        if !caller_role.is_admin() {
            return Err(DomainError::AdminRequired.into());
        }
        if caller_id == target_id {
            return Err(ServiceError::validation("Cannot delete your own account"));
        }

        self.ctx.user_repo().delete(target_id).await?;

        info!(user_id = %target_id, "account deleted");
        Ok(())
    }
}

/// Strict role parse: unknown strings are rejected rather than defaulted
fn parse_role(s: &str) -> ServiceResult<Role> {
    let role = Role::from_str_lossy(s);
    if role.as_str() != s {
        return Err(ServiceError::validation(format!("Unknown role: {s}")));
    }
    Ok(role)
}
