// src/api/client.rs
//! HTTP client wrapper for the Notion API.
//!
//! A thin wrapper around reqwest that handles authentication and the two
//! endpoints the blog reads from. Parsing lives in `parser`.

use super::parser;
use super::query::DatabaseQuery;
use crate::constants::{NOTION_API_BASE_URL, NOTION_API_PAGE_SIZE, NOTION_VERSION};
use crate::error::AppError;
use crate::model::{BlockRecord, RowRecord};
use crate::types::{ApiKey, DatabaseId, PageId};
use reqwest::{header, Client, Response};
use serde::Serialize;

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: String,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey) -> Result<Self, AppError> {
        Self::with_base_url(api_key, NOTION_API_BASE_URL)
    }

    /// Creates a client against a different API root, e.g. a recording proxy.
    pub fn with_base_url(api_key: &ApiKey, base_url: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Makes a GET request to the specified endpoint (path without base URL).
    pub async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = self.url(endpoint);
        log::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    /// Makes a POST request with JSON body to the specified endpoint.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = self.url(endpoint);
        log::debug!("POST {}", url);
        if log::log_enabled!(log::Level::Trace) {
            if let Ok(pretty) = serde_json::to_string_pretty(body) {
                log::trace!("Request body: {}", pretty);
            }
        }
        Ok(self.client.post(url).json(body).send().await?)
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn query_database(
        &self,
        database: &DatabaseId,
        query: &DatabaseQuery,
    ) -> Result<Vec<RowRecord>, AppError> {
        let endpoint = format!("databases/{}/query", database.to_dashed());
        let response = self.post(&endpoint, query).await?;
        let result = extract_response_text(response).await?;
        log::debug!("Database query answered with {}", result.status);
        parser::parse_query_results(result)
    }

    async fn list_block_children(&self, parent: &PageId) -> Result<Vec<BlockRecord>, AppError> {
        let endpoint = format!(
            "blocks/{}/children?page_size={}",
            parent.to_dashed(),
            NOTION_API_PAGE_SIZE
        );
        let response = self.get(&endpoint).await?;
        let result = extract_response_text(response).await?;
        parser::parse_block_children(result)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
