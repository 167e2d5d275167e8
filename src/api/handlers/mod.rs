//! API handlers and the pieces they share.
//!
//! Handlers answer with short plain-text messages on failure. Storage errors
//! are logged here and reach the client only as a generic message.

pub mod catalog;
pub mod characters;
pub mod health;
pub mod login;

use crate::{accounts::AccountError, catalog::CatalogError};
use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, error};

#[derive(Debug)]
pub enum ApiError {
    BadRequest(&'static str),
    Internal(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message).into_response(),
        }
    }
}

impl ApiError {
    /// Map an account failure, using `failure` as the client-facing text for
    /// storage errors.
    pub(crate) fn from_account(err: AccountError, failure: &'static str) -> Self {
        match err {
            AccountError::InvalidInput(message) => Self::BadRequest(message),
            AccountError::InvalidCredentials => Self::BadRequest("incorrect password or username"),
            AccountError::NotFound => Self::BadRequest("User not found"),
            AccountError::Storage(err) => {
                error!("Account storage failure: {:?}", err);
                Self::Internal(failure)
            }
            AccountError::Hash(err) => {
                error!("Password hashing failure: {:?}", err);
                Self::Internal(failure)
            }
        }
    }

    pub(crate) fn from_catalog(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound => Self::BadRequest("not a valid Sanrio character"),
            CatalogError::Storage(err) => {
                error!("Catalog storage failure: {:?}", err);
                Self::Internal("Something went wrong while parsing file")
            }
        }
    }
}

/// Request body decoded from JSON, a urlencoded form or multipart form data,
/// depending on `Content-Type`.
///
/// Multipart fields are read as text, so payload types must accept strings
/// for every field.
#[derive(Debug)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(payload) = Json::<T>::from_request(req, state)
                .await
                .map_err(|err| invalid_payload(&err))?;
            Ok(Self(payload))
        } else if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|err| invalid_payload(&err))?;
            let fields = multipart_fields(multipart).await?;
            serde_json::from_value(Value::Object(fields))
                .map(Self)
                .map_err(|err| invalid_payload(&err))
        } else {
            let Form(payload) = Form::<T>::from_request(req, state)
                .await
                .map_err(|err| invalid_payload(&err))?;
            Ok(Self(payload))
        }
    }
}

async fn multipart_fields(mut multipart: Multipart) -> Result<Map<String, Value>, ApiError> {
    let mut fields = Map::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| invalid_payload(&err))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field.text().await.map_err(|err| invalid_payload(&err))?;
        fields.insert(name, Value::String(value));
    }
    Ok(fields)
}

fn invalid_payload(err: &dyn std::fmt::Display) -> ApiError {
    debug!("Invalid payload: {}", err);
    ApiError::BadRequest("Invalid payload")
}
