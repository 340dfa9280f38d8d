// src/api/responses.rs
//! Envelope types for Notion API responses.

use serde::Deserialize;

/// Notion's error body, parsed by the notion-client crate's serde types.
pub use notion_client::objects::error::Error as NotionError;

/// Generic paginated response wrapper.
///
/// `results` stays untyped here so that every element can be parsed on its
/// own: one malformed row or block must not fail the whole list.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
}
