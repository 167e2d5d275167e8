use crate::credentials::SaltedHash;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Username-keyed account document.
pub type Accounts = BTreeMap<String, Account>;

/// Level as it arrives from clients and older documents: a JSON number or
/// numeric text (form fields are always text).
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Level {
    Number(i64),
    Text(String),
}

impl Level {
    /// `None` when the value is not a non-negative integer that fits `u32`.
    #[must_use]
    pub fn value(&self) -> Option<u32> {
        match self {
            Self::Number(n) => u32::try_from(*n).ok(),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Reads `"level": 3` and `"level": "3"` alike; writes are always numbers.
fn lenient_level<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Level::deserialize(deserializer)?
        .value()
        .ok_or_else(|| de::Error::custom("level must be a non-negative integer"))
}

/// The character an account has picked.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    #[serde(deserialize_with = "lenient_level")]
    pub level: u32,
    pub img: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub salt: String,
    pub hash: String,
    pub character: Option<Character>,
}

impl Account {
    /// A freshly registered account has no character yet.
    #[must_use]
    pub fn new(username: String, credential: SaltedHash) -> Self {
        Self {
            username,
            salt: credential.salt,
            hash: credential.hash,
            character: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn account_without_character_serializes_null() {
        let account = Account::new(
            "alice".to_string(),
            SaltedHash {
                salt: "00".to_string(),
                hash: "11".to_string(),
            },
        );
        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(
            value,
            json!({"username": "alice", "salt": "00", "hash": "11", "character": null})
        );
    }

    #[test]
    fn reads_existing_document_layout() {
        let document = json!({
            "alice": {
                "username": "alice",
                "salt": "ab",
                "hash": "cd",
                "character": {"name": "Kuromi", "level": 3, "img": "https://example.com/kuromi.png"}
            }
        });
        let accounts: Accounts = serde_json::from_value(document).unwrap();
        let character = accounts["alice"].character.as_ref().unwrap();
        assert_eq!(character.name, "Kuromi");
        assert_eq!(character.level, 3);
    }

    #[test]
    fn reads_text_level_written_by_form_posts() {
        let document = json!({
            "alice": {
                "username": "alice",
                "salt": "ab",
                "hash": "cd",
                "character": {"name": "Kuromi", "level": "1", "img": "https://example.com/kuromi.png"}
            }
        });
        let accounts: Accounts = serde_json::from_value(document).unwrap();
        let character = accounts["alice"].character.as_ref().unwrap();
        assert_eq!(character.level, 1);

        let written = serde_json::to_value(character).unwrap();
        assert_eq!(written["level"], json!(1));
    }

    #[test]
    fn rejects_non_numeric_level() {
        let character = json!({"name": "Kuromi", "level": "high", "img": "k.png"});
        assert!(serde_json::from_value::<Character>(character).is_err());
    }

    #[test]
    fn level_from_number_or_text() {
        let number: Level = serde_json::from_str("3").unwrap();
        assert_eq!(number.value(), Some(3));

        let text: Level = serde_json::from_str("\" 7 \"").unwrap();
        assert_eq!(text.value(), Some(7));
    }

    #[test]
    fn unusable_levels() {
        for raw in ["-1", "\"abc\"", "\"\"", "4294967296"] {
            let level: Level = serde_json::from_str(raw).unwrap();
            assert_eq!(level.value(), None, "{raw}");
        }
    }

    #[test]
    fn zero_level_is_passed_through_for_validation() {
        let level: Level = serde_json::from_str("0").unwrap();
        assert_eq!(level.value(), Some(0));
    }
}
