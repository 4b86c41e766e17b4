use std::collections::HashMap;

use axum::async_trait;
use axum::extract::FromRequest;
use axum::extract::Query;
use axum::extract::Request;
use axum::Form;
use serde::de::value::Error as ValueError;
use serde::de::value::MapDeserializer;
use serde::de::DeserializeOwned;

use super::handlers::ApiError;

/// Request parameters read from the query string and the form body.
///
/// Query values take precedence over body values. A missing body, a body
/// that is not form-encoded, or an unparseable query string contribute no
/// fields, so handlers see absent parameters through the target type's
/// `#[serde(default)]` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Parameters<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<HashMap<String, String>>::try_from_uri(req.uri())
            .map(|Query(query)| query)
            .unwrap_or_default();

        let mut fields = match Form::<HashMap<String, String>>::from_request(req, state).await {
            Ok(Form(fields)) => fields,
            Err(rejection) => {
                tracing::debug!(rejection = %rejection, "Request carries no form body");
                HashMap::new()
            }
        };
        fields.extend(query);

        T::deserialize(MapDeserializer::<_, ValueError>::new(fields.into_iter()))
            .map(Parameters)
            .map_err(|e| {
                tracing::warn!(error = %e, "Failed to read request parameters");
                ApiError::InternalServerError(
                    "Something went wrong. Please try again later.".to_string(),
                )
            })
    }
}
