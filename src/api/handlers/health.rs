use crate::{accounts::AccountService, catalog::CharacterCatalog, GIT_COMMIT_HASH};
use axum::{
    body::Body,
    extract::Extension,
    http::{HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Health {
    commit: String,
    name: String,
    version: String,
    accounts: String,
    catalog: String,
}

const fn status(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "error"
    }
}

#[utoipa::path(
    get,
    path= "/health",
    responses (
        (status = 200, description = "Account and catalog documents are readable", body = [Health]),
        (status = 503, description = "Account or catalog document is unreadable", body = [Health])
    ),
    tag= "health"
)]
// axum handler for health
pub async fn health(
    method: Method,
    accounts: Extension<AccountService>,
    catalog: Extension<CharacterCatalog>,
) -> impl IntoResponse {
    let accounts_ok = match accounts.check().await {
        Ok(()) => true,
        Err(err) => {
            error!("Account document is unhealthy: {:?}", err);
            false
        }
    };

    let catalog_ok = match catalog.list_all().await {
        Ok(_) => true,
        Err(err) => {
            error!("Catalog document is unhealthy: {:?}", err);
            false
        }
    };

    let health = Health {
        commit: GIT_COMMIT_HASH.to_string(),
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        accounts: status(accounts_ok).to_string(),
        catalog: status(catalog_ok).to_string(),
    };

    let body = if method == Method::GET {
        Json(&health).into_response()
    } else {
        Body::empty().into_response()
    };

    let short_hash = if health.commit.len() > 7 {
        &health.commit[0..7]
    } else {
        ""
    };

    let headers = format!("{}:{}:{}", health.name, health.version, short_hash)
        .parse::<HeaderValue>()
        .map(|x_app_header_value| {
            debug!("X-App header: {:?}", x_app_header_value);

            let mut headers = HeaderMap::new();

            headers.insert("X-App", x_app_header_value);

            headers
        })
        .map_err(|err| {
            error!("Failed to parse X-App header: {}", err);
        });

    let headers = headers.unwrap_or_else(|()| HeaderMap::new());

    if accounts_ok && catalog_ok {
        (StatusCode::OK, headers, body)
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, headers, body)
    }
}
