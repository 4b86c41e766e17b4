use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::User;
use crate::user::errors::PasswordError;
use crate::user::errors::UserError;
use crate::user::ports::CredentialAuthenticator;

/// Adapter running the auth library's Argon2 and RS256 work on the blocking pool.
pub struct TokenAuthenticator {
    authenticator: Arc<Authenticator>,
}

impl TokenAuthenticator {
    pub fn new(authenticator: Arc<Authenticator>) -> Self {
        Self { authenticator }
    }
}

#[async_trait]
impl CredentialAuthenticator for TokenAuthenticator {
    async fn hash_password(&self, password: &str) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))?
            .map_err(|e| PasswordError::HashingFailed(e.to_string()).into())
    }

    async fn authenticate(&self, password: &str, user: &User) -> Result<AccessToken, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = password.to_owned();
        let stored_hash = user.password_hash.clone();
        let user_id = user.id.to_string();
        let role = user.role.as_str().to_owned();

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &user_id, &role)
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Authentication task failed: {}", e)))?;

        result
            .map(|result| AccessToken::new(result.access_token))
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                AuthenticationError::PasswordError(err) => {
                    PasswordError::VerificationFailed(err.to_string()).into()
                }
                AuthenticationError::JwtError(err) => UserError::TokenIssuance(err.to_string()),
            })
    }
}
