// src/api/mod.rs
//! Notion API interaction: the ability to read a posts database.
//!
//! This module keeps HTTP, parsing, and query construction apart from the
//! blog logic, which only sees the [`NotionRepository`] trait.

pub mod client;
pub mod parser;
pub mod query;
mod responses;

use crate::error::AppError;
use crate::model::{BlockRecord, RowRecord};
use crate::types::{DatabaseId, PageId};

pub use client::{ApiResponse, NotionHttpClient};
pub use query::{DatabaseQuery, SlugLookupPolicy};

/// The ability to read rows and block children from a Notion workspace.
///
/// Business logic depends on this trait, never on HTTP details. Both methods
/// return the first page of results only.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    async fn query_database(
        &self,
        database: &DatabaseId,
        query: &DatabaseQuery,
    ) -> Result<Vec<RowRecord>, AppError>;

    async fn list_block_children(&self, parent: &PageId) -> Result<Vec<BlockRecord>, AppError>;
}
