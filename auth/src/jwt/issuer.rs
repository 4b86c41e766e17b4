use std::sync::Arc;

use jsonwebtoken::encode;
use jsonwebtoken::Header;
use serde::Serialize;

use super::claims::Claims;
use super::errors::JwtError;
use crate::keys::SigningKey;

/// Longest accepted token lifetime (one year).
pub const MAX_EXPIRATION_HOURS: u32 = 24 * 366;

/// Issues signed access tokens.
///
/// Holds a shared reference to the process-wide signing key; the token
/// algorithm follows the key (RS256).
#[derive(Clone)]
pub struct TokenIssuer {
    signing_key: Arc<SigningKey>,
    expiration_hours: Option<u32>,
}

impl TokenIssuer {
    /// Create an issuer whose tokens never expire.
    pub fn new(signing_key: Arc<SigningKey>) -> Self {
        Self {
            signing_key,
            expiration_hours: None,
        }
    }

    /// Stamp an `exp` claim this many hours after issuance.
    ///
    /// # Errors
    /// * `InvalidExpiration` - Zero, or longer than [`MAX_EXPIRATION_HOURS`]
    pub fn with_expiration_hours(mut self, hours: u32) -> Result<Self, JwtError> {
        if hours == 0 || hours > MAX_EXPIRATION_HOURS {
            return Err(JwtError::InvalidExpiration {
                hours,
                max: MAX_EXPIRATION_HOURS,
            });
        }
        self.expiration_hours = Some(hours);
        Ok(self)
    }

    /// Issue a token for a user.
    ///
    /// # Arguments
    /// * `user_id` - User identifier embedded as `user_id`
    /// * `role` - User role embedded as `role`
    ///
    /// # Returns
    /// Compact JWS string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, user_id: &str, role: &str) -> Result<String, JwtError> {
        let claims = Claims::for_user(user_id, role);
        let claims = match self.expiration_hours {
            Some(hours) => claims.expiring_in_hours(hours),
            None => claims,
        };

        self.encode(&claims)
    }

    /// Sign arbitrary claims with the issuer's key.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.signing_key.algorithm());

        encode(&header, claims, self.signing_key.encoding_key())
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }
}
