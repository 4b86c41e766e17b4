use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Credentials;
use crate::domain::user::ports::AuthenticationServicePort;
use crate::inbound::http::parameters::Parameters;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

const WRONG_CREDENTIALS: &str = "Wrong credentials.";
const LOOKUP_FAILED: &str = "Something went wrong. Please try again later.";
const ISSUANCE_FAILED: &str = "Something went wrong. We could not authenticate you.";

pub async fn login<AS: AuthenticationServicePort>(
    State(state): State<AppState<AS>>,
    Parameters(body): Parameters<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    state
        .auth_service
        .login(Credentials::new(body.email, body.password))
        .await
        .map_err(login_error)
        .map(|token| {
            ApiSuccess::new(
                StatusCode::OK,
                LoginResponseData {
                    token: token.into_string(),
                },
            )
        })
}

fn login_error(err: UserError) -> ApiError {
    match err {
        UserError::NotFoundByEmail(_) => {
            tracing::debug!(error = %err, "Login rejected");
            ApiError::NotFound(WRONG_CREDENTIALS.to_string())
        }
        UserError::InvalidCredentials => {
            tracing::debug!(error = %err, "Login rejected");
            ApiError::Forbidden(WRONG_CREDENTIALS.to_string())
        }
        UserError::TokenIssuance(_) => {
            tracing::error!(error = %err, "Failed to issue access token");
            ApiError::InternalServerError(ISSUANCE_FAILED.to_string())
        }
        _ => {
            tracing::error!(error = %err, "Login failed");
            ApiError::InternalServerError(LOOKUP_FAILED.to_string())
        }
    }
}

/// Parameters of a login request; absent fields are treated as empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
