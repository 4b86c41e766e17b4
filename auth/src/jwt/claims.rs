use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Access token claims.
///
/// Carries the user's identity and role plus the registered `jti` and `iat`
/// claims. `exp` is only present when an expiration was requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// User role (e.g. "customer")
    pub role: String,

    /// User identifier
    pub user_id: String,

    /// JWT ID (unique token identifier)
    pub jti: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Create claims for a user, stamped with a fresh token ID and the current time.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `role` - Role granted to the user
    pub fn for_user(user_id: impl ToString, role: impl ToString) -> Self {
        Self {
            role: role.to_string(),
            user_id: user_id.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: Utc::now().timestamp(),
            exp: None,
        }
    }

    /// Set expiration relative to the issued-at time.
    pub fn expiring_in_hours(mut self, hours: u32) -> Self {
        self.exp = Some(self.iat + Duration::hours(i64::from(hours)).num_seconds());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let claims = Claims::for_user("user123", "customer");

        assert_eq!(claims.user_id, "user123");
        assert_eq!(claims.role, "customer");
        assert!(Uuid::parse_str(&claims.jti).is_ok());
        assert!(claims.exp.is_none());
    }

    #[test]
    fn test_token_ids_are_unique() {
        let first = Claims::for_user("user123", "customer");
        let second = Claims::for_user("user123", "customer");

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_expiring_in_hours() {
        let claims = Claims::for_user("user123", "customer").expiring_in_hours(24);

        assert_eq!(claims.exp, Some(claims.iat + 24 * 60 * 60));
    }

    #[test]
    fn test_exp_omitted_from_json_when_absent() {
        let claims = Claims::for_user("user123", "customer");
        let json = serde_json::to_value(&claims).unwrap();

        assert!(json.get("exp").is_none());
        assert_eq!(json["user_id"], "user123");
        assert_eq!(json["role"], "customer");
    }
}
