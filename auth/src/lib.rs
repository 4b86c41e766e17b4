//! Authentication utilities library
//!
//! Provides the credential and token primitives behind the login flow:
//! - Password hashing (Argon2id, configurable work factor)
//! - Private key loading from PEM files
//! - Signed access token issuance (RS256)
//! - Authentication coordination (verify, then issue)
//!
//! Token verification is left to the services that consume the tokens.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Complete Authentication Flow
//! ```no_run
//! use std::sync::Arc;
//!
//! use auth::{Authenticator, KeyLoader, PasswordHasher, TokenIssuer};
//!
//! let signing_key = Arc::new(KeyLoader::load_private_key("/srv/app/key.pem").unwrap());
//! let auth = Authenticator::new(PasswordHasher::new(), TokenIssuer::new(signing_key));
//!
//! // Signup: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth.authenticate("password123", &hash, "user123", "customer").unwrap();
//! println!("Token: {}", result.access_token);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod keys;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenIssuer;
pub use keys::KeyFormat;
pub use keys::KeyLoadError;
pub use keys::KeyLoader;
pub use keys::SigningKey;
pub use password::PasswordError;
pub use password::PasswordHasher;
