//! Authentication service
//!
//! Registration, login, and token refresh. Passwords are hashed with
//! Argon2id; tokens are stateless JWTs carrying the user's role.

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use portal_common::auth::{hash_password, validate_password_strength, verify_password};
use portal_common::AppError;

use crate::dto::requests::{LoginRequest, RefreshTokenRequest, RegisterRequest};
use crate::dto::responses::{AuthResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new student account
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        request.validate()?;
        validate_password_strength(&request.password)?;

        let email = request.email.trim().to_lowercase();
        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash = hash_password(&request.password)?;

        let mut user = portal_core::entities::User::new(
            Uuid::new_v4(),
            email,
            request.full_name.trim().to_string(),
        );
        user.phone = request.phone.filter(|p| !p.trim().is_empty());

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "user registered");

        self.issue_tokens(user)
    }

    /// Authenticate with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        request.validate()?;

        // Emails are stored lowercased at registration; match that here
        let email = request.email.trim().to_lowercase();
        let mut user = self
            .ctx
            .user_repo()
            .find_by_email(&email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(&request.password, &hash)? {
            return Err(AppError::InvalidCredentials.into());
        }

        self.ctx.user_repo().record_login(user.id).await?;
        user.last_login = Some(chrono::Utc::now());

        info!(user_id = %user.id, "user logged in");

        self.issue_tokens(user)
    }

    /// Exchange a refresh token for a new token pair.
    ///
    /// The role claim is re-read from the store so a role change takes
    /// effect on the next refresh rather than surviving until expiry.
    #[instrument(skip_all)]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;
        let user_id = claims.user_id()?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        self.issue_tokens(user)
    }

    /// The authenticated user's own profile
    pub async fn me(&self, user_id: Uuid) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;
        Ok(UserResponse::from(user))
    }

    fn issue_tokens(&self, user: portal_core::entities::User) -> ServiceResult<AuthResponse> {
        let pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id, user.role)?;
        Ok(AuthResponse::new(
            pair.access_token,
            pair.refresh_token,
            pair.expires_in,
            UserResponse::from(user),
        ))
    }
}
