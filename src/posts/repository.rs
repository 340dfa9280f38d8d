//! The post repository: the only place that decides which Notion calls to make.

use super::assembler::assemble_post;
use super::normalizer::normalize_blocks;
use crate::api::{DatabaseQuery, NotionRepository, SlugLookupPolicy};
use crate::error::AppError;
use crate::model::{Content, Post};
use crate::types::DatabaseId;
use futures::future::try_join_all;
use std::sync::Arc;

/// Reads posts from one Notion database.
///
/// The client is injected so tests can substitute an in-memory workspace.
/// API failures propagate unchanged; nothing is retried.
#[derive(Clone)]
pub struct PostRepository {
    client: Arc<dyn NotionRepository>,
    database_id: DatabaseId,
    slug_policy: SlugLookupPolicy,
}

impl PostRepository {
    pub fn new(client: Arc<dyn NotionRepository>, database_id: DatabaseId) -> Self {
        Self {
            client,
            database_id,
            slug_policy: SlugLookupPolicy::default(),
        }
    }

    pub fn with_slug_policy(self, slug_policy: SlugLookupPolicy) -> Self {
        Self {
            slug_policy,
            ..self
        }
    }

    /// Lists posts with their first page of contents.
    ///
    /// Without a slug: published posts, newest first. With a slug: rows whose
    /// slug options contain it, in whatever order Notion returns them.
    /// Children of every row are fetched concurrently and joined back by
    /// position, so the result follows the query order. One failed fetch
    /// fails the whole listing.
    pub async fn list_posts(&self, slug: Option<&str>) -> Result<Vec<Post>, AppError> {
        let query = match slug {
            None => DatabaseQuery::published_newest_first(),
            Some(slug) => DatabaseQuery::by_slug(slug, self.slug_policy),
        };

        let rows = self
            .client
            .query_database(&self.database_id, &query)
            .await?;
        log::info!(
            "Query {} returned {} row(s)",
            slug.map_or_else(|| "published".to_string(), |s| format!("slug={}", s)),
            rows.len()
        );

        let children = try_join_all(
            rows.iter()
                .map(|row| self.client.list_block_children(&row.id)),
        )
        .await?;

        let row_count = rows.len();
        let posts: Vec<Post> = rows
            .into_iter()
            .zip(children)
            .filter_map(|(row, blocks)| assemble_post(row, normalize_blocks(&blocks)))
            .collect();

        if posts.len() < row_count {
            log::debug!(
                "Skipped {} row(s) that are not posts",
                row_count - posts.len()
            );
        }

        Ok(posts)
    }

    /// Fetches the content of one post. The post itself is left untouched.
    pub async fn fetch_post_contents(&self, post: &Post) -> Result<Vec<Content>, AppError> {
        let blocks = self.client.list_block_children(&post.id).await?;
        let contents = normalize_blocks(&blocks);
        log::debug!(
            "Post {}: {} block(s), {} renderable",
            post.id,
            blocks.len(),
            contents.len()
        );
        Ok(contents)
    }
}
