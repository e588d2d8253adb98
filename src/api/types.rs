//! Wire types for the catalog API.
//!
//! The `Book` entity is shared between the HTTP layer, the catalog store,
//! and the views. Field names are camelCase on the wire to match the
//! server's JSON contract.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single book record.
///
/// `id` is assigned client-side at creation time (a provisional identifier
/// derived from the current time in milliseconds). After any successful
/// write the server-returned record is canonical and replaces the local
/// one, so a server that reassigns ids is handled transparently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    /// Present only on servers with soft-delete semantics. Never set here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Generates a provisional id for a draft book: current Unix time in
/// milliseconds. Only a local placeholder until the server confirms the
/// create and its returned id is adopted.
pub fn provisional_id() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current time as ISO-8601 text, the format the server uses for
/// `createdAt` / `updatedAt`.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Normalizes optional form input: trimmed-empty input means "not provided".
/// Keeps `Some("")` out of the entity model entirely.
pub fn normalize_optional(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_serializes_camel_case_and_skips_absent_fields() {
        let book = Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            year: 1965,
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            updated_at: "2024-01-01T00:00:00.000Z".to_string(),
            deleted_at: None,
            genre: Some("Science Fiction".to_string()),
            isbn: None,
            publisher: None,
            description: None,
        };

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00.000Z");
        assert_eq!(json["genre"], "Science Fiction");
        assert!(json.get("isbn").is_none());
        assert!(json.get("deletedAt").is_none());
    }

    #[test]
    fn test_book_deserializes_without_timestamps() {
        // A minimal server payload still parses; timestamps default to empty.
        let book: Book = serde_json::from_str(
            r#"{"id":1,"title":"Dune","author":"Herbert","year":1965}"#,
        )
        .unwrap();
        assert_eq!(book.id, 1);
        assert_eq!(book.title, "Dune");
        assert!(book.created_at.is_empty());
        assert!(book.genre.is_none());
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(""), None);
        assert_eq!(normalize_optional("   "), None);
        assert_eq!(
            normalize_optional(" 978-0441172719 "),
            Some("978-0441172719".to_string())
        );
    }

    #[test]
    fn test_provisional_id_is_positive_millis() {
        // Any timestamp from this century is comfortably past this bound.
        assert!(provisional_id() > 1_600_000_000_000);
    }

    #[test]
    fn test_now_timestamp_is_rfc3339() {
        let ts = now_timestamp();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
