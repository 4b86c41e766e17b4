use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::Role;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AuthenticationServicePort;
use crate::user::ports::CredentialAuthenticator;
use crate::user::ports::UserRepository;

/// Domain service implementation for login and signup.
///
/// Concrete implementation of AuthenticationServicePort with dependency injection.
pub struct AuthenticationService<UR, CA>
where
    UR: UserRepository,
    CA: CredentialAuthenticator,
{
    repository: Arc<UR>,
    authenticator: Arc<CA>,
}

impl<UR, CA> AuthenticationService<UR, CA>
where
    UR: UserRepository,
    CA: CredentialAuthenticator,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance implementation
    pub fn new(repository: Arc<UR>, authenticator: Arc<CA>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR, CA> AuthenticationServicePort for AuthenticationService<UR, CA>
where
    UR: UserRepository,
    CA: CredentialAuthenticator,
{
    async fn login(&self, credentials: Credentials) -> Result<AccessToken, UserError> {
        let user = self
            .repository
            .find_by_email(&credentials.email)
            .await?
            .ok_or_else(|| UserError::NotFoundByEmail(credentials.email.clone()))?;

        let token = self
            .authenticator
            .authenticate(&credentials.password, &user)
            .await?;

        tracing::info!(user_id = %user.id, role = %user.role, "Access token issued");

        Ok(token)
    }

    async fn signup(&self, command: SignupCommand) -> Result<User, UserError> {
        let password_hash = self.authenticator.hash_password(&command.password).await?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            role: Role::customer(),
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(user_id = %created_user.id, "User created");

        Ok(created_user)
    }
}
