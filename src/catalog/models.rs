use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Character id to display metadata, in document order.
///
/// Entries are kept as read so they are served unchanged, including fields
/// beyond `name` and `img`.
pub type Catalog = Map<String, Value>;

/// Documented shape of a catalog entry. The id is the catalog key.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub img: String,
}
