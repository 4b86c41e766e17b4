use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

/// User aggregate entity.
///
/// Represents a registered user
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    ///
    /// # Returns
    /// UserId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Role granted to a user.
///
/// Stored as free text; signup only ever assigns [`Role::CUSTOMER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role(String);

impl Role {
    pub const CUSTOMER: &'static str = "customer";

    /// Role assigned to every self-registered user.
    pub fn customer() -> Self {
        Self(Self::CUSTOMER.to_string())
    }

    /// Wrap a role read back from storage.
    pub fn from_stored(role: String) -> Self {
        Self(role)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email and plaintext password presented at login.
///
/// Never persisted; dropped once the password has been checked.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

/// Command to register a new user.
///
/// Has no role field: the role is decided by the service, never the caller.
#[derive(Debug)]
pub struct SignupCommand {
    pub email: String,
    pub password: String,
}

impl SignupCommand {
    /// Construct a new signup command.
    ///
    /// # Arguments
    /// * `email` - Email address as submitted
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

/// Signed access token handed back on successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
