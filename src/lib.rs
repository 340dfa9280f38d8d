// src/lib.rs
//! notion-blog library: builds a static blog from a Notion database.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `SiteConfig`
//! - **Domain model**: `Post`, `Content`, and the Notion wire records
//! - **API client**: `NotionRepository`, `NotionHttpClient`, `DatabaseQuery`
//! - **Posts**: normalizer, assembler and `PostRepository`
//! - **Site**: page controllers, routes and `SiteGenerator`
//! - **Views**: `SiteRenderer`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod output;
pub mod posts;
pub mod site;
pub mod types;
pub mod views;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, SiteConfig};

// --- Domain Model ---
pub use crate::model::{BlockRecord, Content, Post, PropertyMap, PropertyValue, RowRecord};

// --- Domain Types ---
pub use crate::types::{ApiKey, DatabaseId, PageId, RenderedPage};

// --- API Client ---
pub use crate::api::{DatabaseQuery, NotionHttpClient, NotionRepository, SlugLookupPolicy};

// --- Posts ---
pub use crate::posts::{assemble_post, normalize_block, normalize_blocks, PostRepository};

// --- Site ---
pub use crate::site::{
    detail_page, list_page, post_paths, static_paths, PageOutcome, Route, RouteParams, RouteTable,
    SiteGenerator,
};

// --- Views ---
pub use crate::views::{SiteRenderer, ViewOptions};
