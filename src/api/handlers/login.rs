use super::{ApiError, Payload};
use crate::accounts::{AccountService, Identity};
use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::instrument;
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize, Debug)]
pub struct LoginRequest {
    username: Option<String>,
    #[schema(value_type = Option<String>)]
    password: Option<SecretString>,
}

#[utoipa::path(
    post,
    path= "/login",
    request_body(content = LoginRequest, content_type = "application/json"),
    responses (
        (status = 200, description = "Logged in, or account created for an unseen username", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing field or incorrect password", body = String, content_type = "text/plain"),
        (status = 500, description = "Account document could not be read or written", body = String, content_type = "text/plain"),
    ),
    tag= "accounts"
)]
// axum handler for login/registration
#[instrument(skip(accounts, payload))]
pub async fn login(
    accounts: Extension<AccountService>,
    Payload(payload): Payload<LoginRequest>,
) -> Response {
    let username = payload.username.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    match accounts.identify(&username, password.expose_secret()).await {
        Ok(Identity::Authenticated) => (StatusCode::OK, "successfully logged in").into_response(),
        Ok(Identity::Registered) => {
            (StatusCode::OK, "account created successfully").into_response()
        }
        Err(err) => ApiError::from_account(err, "some server side error").into_response(),
    }
}
