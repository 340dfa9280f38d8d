// tests/common/mod.rs
//! An in-memory Notion workspace for exercising the blog without the network.

#![allow(dead_code)]

use notion_blog::{
    AppError, BlockRecord, DatabaseId, DatabaseQuery, NotionErrorCode, NotionRepository, PageId,
    PostRepository, RowRecord,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Rows and block children held as raw API JSON, queried the way Notion would.
#[derive(Default)]
pub struct FakeWorkspace {
    rows: Vec<Value>,
    children: HashMap<String, Vec<Value>>,
    delays: HashMap<String, Duration>,
    failing_children: Option<String>,
    failing_queries: bool,
    pub queries: Mutex<Vec<DatabaseQuery>>,
    pub children_calls: AtomicUsize,
}

impl FakeWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row(mut self, row: Value) -> Self {
        self.rows.push(row);
        self
    }

    pub fn with_children(mut self, page_id: &str, blocks: Vec<Value>) -> Self {
        self.children.insert(page_id.to_string(), blocks);
        self
    }

    /// Makes the children request for `page_id` take `delay` to answer.
    pub fn with_delay(mut self, page_id: &str, delay: Duration) -> Self {
        self.delays.insert(page_id.to_string(), delay);
        self
    }

    pub fn failing_children_for(mut self, page_id: &str) -> Self {
        self.failing_children = Some(page_id.to_string());
        self
    }

    pub fn failing_queries(mut self) -> Self {
        self.failing_queries = true;
        self
    }

    pub fn into_repository(self) -> (Arc<FakeWorkspace>, PostRepository) {
        let workspace = Arc::new(self);
        let client: Arc<dyn NotionRepository> = workspace.clone();
        (workspace, PostRepository::new(client, DatabaseId::unset()))
    }

    pub fn children_calls(&self) -> usize {
        self.children_calls.load(Ordering::SeqCst)
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl NotionRepository for FakeWorkspace {
    async fn query_database(
        &self,
        _database: &DatabaseId,
        query: &DatabaseQuery,
    ) -> Result<Vec<RowRecord>, AppError> {
        self.queries.lock().unwrap().push(query.clone());
        if self.failing_queries {
            return Err(service_error(NotionErrorCode::RateLimited, 429));
        }

        let mut rows: Vec<&Value> = self
            .rows
            .iter()
            .filter(|row| match query.slug() {
                Some(slug) => row_slugs(row).iter().any(|s| s == slug),
                None => true,
            })
            .filter(|row| !query.requires_published() || row_published(row))
            .collect();

        if !query.sorts.is_empty() {
            // ISO-8601 strings sort chronologically
            rows.sort_by(|a, b| created(b).cmp(created(a)));
        }

        Ok(rows
            .into_iter()
            .filter_map(|row| RowRecord::from_value(row.clone()))
            .collect())
    }

    async fn list_block_children(&self, parent: &PageId) -> Result<Vec<BlockRecord>, AppError> {
        self.children_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(parent.as_str()) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_children.as_deref() == Some(parent.as_str()) {
            return Err(service_error(NotionErrorCode::ObjectNotFound, 404));
        }

        Ok(self
            .children
            .get(parent.as_str())
            .map(|blocks| blocks.iter().cloned().map(BlockRecord::from_value).collect())
            .unwrap_or_default())
    }
}

fn service_error(code: NotionErrorCode, status: u16) -> AppError {
    AppError::NotionService {
        message: format!("fake {}", code),
        code,
        status: reqwest::StatusCode::from_u16(status).unwrap(),
    }
}

fn row_slugs(row: &Value) -> Vec<String> {
    row.pointer("/properties/slug/multi_select")
        .and_then(Value::as_array)
        .map(|options| {
            options
                .iter()
                .filter_map(|o| o.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Rows that do not declare the checkbox pass, so shape-broken rows still
/// reach the client the way a lenient upstream would hand them over.
fn row_published(row: &Value) -> bool {
    row.pointer("/properties/published/checkbox")
        .and_then(Value::as_bool)
        .unwrap_or(true)
}

fn created(row: &Value) -> &str {
    row.get("created_time").and_then(Value::as_str).unwrap_or("")
}

// --- Fixture builders ---

/// A published post row in Notion's query-result shape.
pub fn post_row(id: &str, title: &str, slug: &str, created_time: &str) -> Value {
    json!({
        "object": "page",
        "id": id,
        "created_time": created_time,
        "last_edited_time": created_time,
        "properties": {
            "name": {"id": "title", "type": "title", "title": [{"plain_text": title}]},
            "slug": {"id": "s", "type": "multi_select", "multi_select": [{"name": slug}]},
            "published": {"id": "p", "type": "checkbox", "checkbox": true}
        }
    })
}

pub fn unpublished(mut row: Value) -> Value {
    row["properties"]["published"]["checkbox"] = json!(false);
    row
}

pub fn without_slug(mut row: Value) -> Value {
    row["properties"]["slug"]["multi_select"] = json!([]);
    row
}

pub fn text_block(kind: &str, text: &str) -> Value {
    let mut block = json!({"object": "block", "type": kind});
    block[kind] = json!({"rich_text": [{"type": "text", "plain_text": text}]});
    block
}

pub fn code_block(text: &str, language: &str) -> Value {
    json!({
        "object": "block",
        "type": "code",
        "code": {"rich_text": [{"plain_text": text}], "language": language}
    })
}

pub fn unsupported_block(kind: &str) -> Value {
    let mut block = json!({"object": "block", "type": kind});
    block[kind] = json!({});
    block
}
