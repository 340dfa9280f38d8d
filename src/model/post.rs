use super::content::Content;
use crate::types::PageId;
use serde::{Deserialize, Serialize};

/// A blog post: one database row plus its normalized content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PageId,
    pub title: Option<String>,
    /// Routing key; posts without one get no detail page.
    pub slug: Option<String>,
    /// ISO-8601, verbatim from Notion.
    pub created_ts: Option<String>,
    pub last_edited_ts: Option<String>,
    pub contents: Vec<Content>,
}

impl Post {
    /// Returns this post with `contents` replaced.
    pub fn with_contents(self, contents: Vec<Content>) -> Self {
        Self { contents, ..self }
    }
}
