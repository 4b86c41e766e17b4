use async_trait::async_trait;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

/// Port for authentication domain service operations.
#[async_trait]
pub trait AuthenticationServicePort: Send + Sync + 'static {
    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `credentials` - Email and plaintext password
    ///
    /// # Returns
    /// Signed access token
    ///
    /// # Errors
    /// * `NotFoundByEmail` - No user with this email
    /// * `InvalidCredentials` - Password does not match
    /// * `TokenIssuance` - Token could not be signed
    /// * `DatabaseError` - Lookup failed
    async fn login(&self, credentials: Credentials) -> Result<AccessToken, UserError>;

    /// Register a new user with the default role.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn signup(&self, command: SignupCommand) -> Result<User, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
}

/// Password hashing and token issuance.
#[async_trait]
pub trait CredentialAuthenticator: Send + Sync + 'static {
    /// Hash a plaintext password for storage.
    ///
    /// # Errors
    /// * `Password` - Hashing failed
    async fn hash_password(&self, password: &str) -> Result<String, UserError>;

    /// Check the password against the user's stored hash, then issue a token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Stored hash is unreadable
    /// * `TokenIssuance` - Token could not be signed
    async fn authenticate(&self, password: &str, user: &User) -> Result<AccessToken, UserError>;
}
