use super::handlers::{catalog, characters, health, login};
use utoipa::{
    openapi::{InfoBuilder, OpenApi as OpenApiDoc, Tag},
    OpenApi,
};

#[derive(OpenApi)]
#[openapi(paths(
    health::health,
    login::login,
    characters::set_character,
    characters::get_character,
    catalog::list_all,
    catalog::get_entry,
))]
struct ApiDoc;

/// `OpenAPI` document for every documented route, with Cargo metadata as info.
#[must_use]
pub fn openapi() -> OpenApiDoc {
    let mut doc = ApiDoc::openapi();

    doc.info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description(optional_str(env!("CARGO_PKG_DESCRIPTION")))
        .build();

    doc.tags = Some(
        [
            ("accounts", "Login and registration"),
            ("characters", "Per-account character selection"),
            ("catalog", "Selectable characters"),
            ("health", "Service health"),
        ]
        .into_iter()
        .map(|(name, description)| {
            let mut tag = Tag::new(name);
            tag.description = Some(description.to_string());
            tag
        })
        .collect(),
    );

    doc
}

fn optional_str(value: &'static str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
