// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Reading these constants should tell you how the generator talks to
//! Notion and which database columns it expects a blog to have.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// The Notion API version every request is pinned to.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Base URL of the public Notion REST API.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// How many objects the Notion API returns per page of results.
///
/// Only the first page is ever read, so this is also the upper bound on
/// posts per query and blocks per post.
pub const NOTION_API_PAGE_SIZE: u32 = 100;

// ---------------------------------------------------------------------------
// Blog database schema
// ---------------------------------------------------------------------------

/// Title column of the posts database (kind `title`).
pub const TITLE_PROPERTY: &str = "name";

/// Routing key column (kind `multi_select`; the first option is the slug).
pub const SLUG_PROPERTY: &str = "slug";

/// Publication flag column (kind `checkbox`).
pub const PUBLISHED_PROPERTY: &str = "published";

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Environment variable holding the integration token.
pub const TOKEN_ENV_VAR: &str = "NOTION_TOKEN";

/// Environment variable holding the posts database ID.
pub const DATABASE_ID_ENV_VAR: &str = "NOTION_DATABASE_ID";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing malformed response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
