use super::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Strong typing for IDs with phantom types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatabaseMarker;

/// A database row, i.e. one post. Also the parent of the post's blocks.
pub type PageId = Id<PageMarker>;
pub type DatabaseId = Id<DatabaseMarker>;

impl<T> Id<T> {
    /// Parse a raw, dashed, or URL-embedded Notion ID into a normalized ID
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = normalize_notion_id(input)?;
        Ok(Self::from_normalized(normalized))
    }

    /// Create an ID from an already normalized string (internal use)
    pub(crate) fn from_normalized(value: String) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// An ID that was never configured.
    ///
    /// Requests made with it reach Notion with an empty path segment and fail
    /// there, which is the behavior operators see when the database variable
    /// is missing.
    pub fn unset() -> Self {
        Self::from_normalized(String::new())
    }

    /// Get the ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_unset(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the ID with dashes for API calls
    pub fn to_dashed(&self) -> String {
        if self.value.len() == 32 && !self.value.contains('-') {
            format!(
                "{}-{}-{}-{}-{}",
                &self.value[0..8],
                &self.value[8..12],
                &self.value[12..16],
                &self.value[16..20],
                &self.value[20..32]
            )
        } else {
            self.value.clone()
        }
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    /// IDs coming back from the API are normalized when they look like Notion
    /// IDs and kept verbatim otherwise; they are opaque to the generator.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        let value = normalize_notion_id(&value).unwrap_or(value);
        Ok(Self::from_normalized(value))
    }
}

/// Normalize various Notion ID formats into a consistent format
fn normalize_notion_id(input: &str) -> Result<String, ValidationError> {
    let input = input.trim().trim_end_matches('/');

    if input.starts_with("http://") || input.starts_with("https://") {
        return extract_id_from_url(input);
    }

    if let Ok(uuid) = Uuid::parse_str(input) {
        return Ok(uuid.as_simple().to_string());
    }

    if input.len() != 32 {
        return Err(ValidationError::InvalidId(format!(
            "Invalid ID length: expected 32 characters, got {}",
            input.len()
        )));
    }

    if !input.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidId(
            "ID must contain only hexadecimal characters".to_string(),
        ));
    }

    Ok(input.to_lowercase())
}

/// Extract ID from Notion URL
fn extract_id_from_url(url: &str) -> Result<String, ValidationError> {
    lazy_static::lazy_static! {
        static ref ID_REGEX: Regex = Regex::new(concat!(
            r"(?:[/-])([a-fA-F0-9]{32}|",
            r"[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{12})",
            r"(?:[/?#]|$)"
        )).expect("Failed to compile Notion ID regex - this is a bug in the code");
    }

    ID_REGEX
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().replace('-', "").to_lowercase())
        .ok_or_else(|| ValidationError::InvalidId(format!("No valid ID found in URL: {}", url)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parsing() {
        let id = PageId::parse("550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");

        let id = PageId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");

        let id = DatabaseId::parse(
            "https://www.notion.so/acme/Blog-550e8400e29b41d4a716446655440000?v=abc",
        )
        .unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");
    }

    #[test]
    fn test_invalid_ids() {
        assert!(PageId::parse("too-short").is_err());
        assert!(PageId::parse("not-hex-chars-00000000000000000").is_err());
        assert!(PageId::parse("").is_err());
        assert!(DatabaseId::parse("https://www.notion.so/no-id-here").is_err());
    }

    #[test]
    fn test_to_dashed() {
        let id = PageId::parse("550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(id.to_dashed(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn unset_id_renders_as_empty_segment() {
        let id = DatabaseId::unset();
        assert!(id.is_unset());
        assert_eq!(id.to_dashed(), "");
    }

    #[test]
    fn deserialized_ids_are_normalized_or_kept_opaque() {
        let id: PageId = serde_json::from_str("\"550e8400-e29b-41d4-a716-446655440000\"").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");

        let id: PageId = serde_json::from_str("\"post-1\"").unwrap();
        assert_eq!(id.as_str(), "post-1");
    }
}
