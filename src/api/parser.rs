// src/api/parser.rs
//! Turns raw HTTP responses into wire records or typed API errors.

use super::client::ApiResponse;
use super::responses::{NotionError, PaginatedResponse};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::{BlockRecord, RowRecord};
use reqwest::StatusCode;
use serde_json::Value;

/// Parse any Notion API response, mapping non-2xx statuses to errors.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success_body(&result.data, &result.url)
    } else {
        Err(parse_error_body(&result.data, result.status, &result.url))
    }
}

fn parse_success_body<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse(format!("{} (body: {})", e, preview(body)))
    })
}

/// Maps an error body onto the typed error vocabulary.
fn parse_error_body(body: &str, status: StatusCode, url: &str) -> AppError {
    if let Ok(notion_error) = serde_json::from_str::<NotionError>(body) {
        return AppError::NotionService {
            code: NotionErrorCode::from_api_response(&notion_error.code),
            message: notion_error.message,
            status,
        };
    }

    AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        status,
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let head: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", head)
    } else {
        body.to_string()
    }
}

/// Parses the first page of a database query into rows.
///
/// Rows without a usable `id` are dropped here.
pub fn parse_query_results(result: ApiResponse<String>) -> Result<Vec<RowRecord>, AppError> {
    let response: PaginatedResponse<Value> = parse_api_response(result)?;
    if response.has_more {
        log::warn!(
            "Database query has more than {} rows; only the first page is used",
            response.results.len()
        );
    }

    let total = response.results.len();
    let rows: Vec<RowRecord> = response
        .results
        .into_iter()
        .filter_map(RowRecord::from_value)
        .collect();
    if rows.len() < total {
        log::debug!("Dropped {} malformed row(s)", total - rows.len());
    }
    Ok(rows)
}

/// Parses the first page of a block's children.
pub fn parse_block_children(result: ApiResponse<String>) -> Result<Vec<BlockRecord>, AppError> {
    let response: PaginatedResponse<Value> = parse_api_response(result)?;
    if response.has_more {
        log::warn!(
            "Block has more than {} children; only the first page is used",
            response.results.len()
        );
    }

    Ok(response
        .results
        .into_iter()
        .map(BlockRecord::from_value)
        .collect())
}
