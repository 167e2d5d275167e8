use super::ApiError;
use crate::catalog::{CatalogEntry, CharacterCatalog};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::collections::BTreeMap;
use tracing::instrument;

#[utoipa::path(
    get,
    path= "/getSanrio",
    responses (
        (status = 200, description = "Every selectable character keyed by id", body = BTreeMap<String, CatalogEntry>),
        (status = 500, description = "Catalog could not be read or parsed", body = String, content_type = "text/plain"),
    ),
    tag= "catalog"
)]
#[instrument(skip(catalog))]
pub async fn list_all(catalog: Extension<CharacterCatalog>) -> Response {
    match catalog.list_all().await {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(err) => ApiError::from_catalog(err).into_response(),
    }
}

#[utoipa::path(
    get,
    path= "/getSanrio/{name}",
    params (
        ("name" = String, Path, description = "Character id"),
    ),
    responses (
        (status = 200, description = "Catalog entry", body = CatalogEntry),
        (status = 400, description = "Unknown character id", body = String, content_type = "text/plain"),
        (status = 500, description = "Catalog could not be read or parsed", body = String, content_type = "text/plain"),
    ),
    tag= "catalog"
)]
#[instrument(skip(catalog))]
pub async fn get_entry(catalog: Extension<CharacterCatalog>, Path(name): Path<String>) -> Response {
    match catalog.get(&name).await {
        Ok(entry) => (StatusCode::OK, Json(entry)).into_response(),
        Err(err) => ApiError::from_catalog(err).into_response(),
    }
}
