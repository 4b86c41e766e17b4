use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::User;
use crate::domain::user::ports::AuthenticationServicePort;
use crate::inbound::http::parameters::Parameters;
use crate::inbound::http::router::AppState;

const CREATE_FAILED: &str = "Something went wrong. We could not create a user for you.";

pub async fn signup<AS: AuthenticationServicePort>(
    State(state): State<AppState<AS>>,
    Parameters(body): Parameters<SignupRequestBody>,
) -> Result<ApiSuccess<SignupResponseData>, ApiError> {
    state
        .auth_service
        .signup(SignupCommand::new(body.email, body.password))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to create user");
            ApiError::InternalServerError(CREATE_FAILED.to_string())
        })
        .map(|user| ApiSuccess::new(StatusCode::CREATED, (&user).into()))
}

/// Parameters of a signup request. Any other field, `role` included, is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequestBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupResponseData {
    pub id: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for SignupResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}
