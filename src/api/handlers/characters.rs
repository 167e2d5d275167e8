use super::{ApiError, Payload};
use crate::accounts::{AccountService, Character, Level};
use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::instrument;
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize, Debug)]
pub struct SetCharacterRequest {
    username: Option<String>,
    /// Character name.
    character: Option<String>,
    #[schema(value_type = Option<u32>, minimum = 1)]
    level: Option<Level>,
    img: Option<String>,
}

#[derive(ToSchema, Deserialize, Debug)]
pub struct GetCharacterRequest {
    username: Option<String>,
}

#[utoipa::path(
    post,
    path= "/setcharacter",
    request_body(content = SetCharacterRequest, content_type = "application/json"),
    responses (
        (status = 200, description = "Character saved", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing field or unknown user", body = String, content_type = "text/plain"),
        (status = 500, description = "Account document could not be read or written", body = String, content_type = "text/plain"),
    ),
    tag= "characters"
)]
#[instrument(skip(accounts, payload))]
pub async fn set_character(
    accounts: Extension<AccountService>,
    Payload(payload): Payload<SetCharacterRequest>,
) -> Response {
    let username = payload.username.unwrap_or_default();
    let name = payload.character.unwrap_or_default();
    let img = payload.img.unwrap_or_default();
    let level = payload.level.as_ref().and_then(Level::value);

    match accounts.set_character(&username, &name, level, &img).await {
        Ok(_) => (StatusCode::OK, "character saved").into_response(),
        Err(err) => ApiError::from_account(err, "Server-side error").into_response(),
    }
}

#[utoipa::path(
    post,
    path= "/getcharacter",
    request_body(content = GetCharacterRequest, content_type = "application/json"),
    responses (
        (status = 200, description = "The selected character, or null if none yet", body = Character),
        (status = 400, description = "Missing username or unknown user", body = String, content_type = "text/plain"),
        (status = 500, description = "Account document could not be read", body = String, content_type = "text/plain"),
    ),
    tag= "characters"
)]
#[instrument(skip(accounts, payload))]
pub async fn get_character(
    accounts: Extension<AccountService>,
    Payload(payload): Payload<GetCharacterRequest>,
) -> Response {
    let username = payload.username.unwrap_or_default();

    match accounts.get_character(&username).await {
        Ok(character) => (StatusCode::OK, Json(character)).into_response(),
        Err(err) => ApiError::from_account(err, "Server-side error").into_response(),
    }
}
