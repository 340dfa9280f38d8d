// src/output/writer.rs
//! Writes a planned site to disk.
//!
//! This is the only place the generator touches the filesystem.

use super::paths::is_within;
use super::types::{FailedPage, OutputPlan, OutputReport, PlannedPage, WrittenPage};
use crate::error::AppError;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

/// Writes every page of `plan`.
///
/// An output root that cannot be created fails the delivery outright. After
/// that, each page is attempted and failures are collected in the report.
pub fn deliver(plan: OutputPlan) -> Result<OutputReport, AppError> {
    let start_time = Instant::now();
    log::info!(
        "Writing {} page(s) into {}",
        plan.pages.len(),
        plan.root.display()
    );

    prepare_root(&plan.root).map_err(|e| AppError::DeliveryFailed {
        failures: vec![format!("{}: {}", plan.root.display(), e)],
    })?;

    let mut report = OutputReport::default();
    for page in plan.pages {
        match write_page(&plan.root, &page) {
            Ok(bytes) => report.record_written(WrittenPage {
                route: page.route,
                path: page.path,
                bytes,
            }),
            Err(e) => {
                log::error!("Failed to write {}: {}", page.route, e);
                report.record_failed(FailedPage {
                    route: page.route,
                    path: page.path,
                    error: e.to_string(),
                });
            }
        }
    }

    report.duration_ms = start_time.elapsed().as_millis() as u64;
    log::info!(
        "Wrote {} page(s), {} failed, in {}ms",
        report.pages_written(),
        report.failed.len(),
        report.duration_ms
    );

    Ok(report)
}

fn prepare_root(root: &Path) -> io::Result<()> {
    if root.exists() && !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "path exists but is not a directory",
        ));
    }
    fs::create_dir_all(root)
}

fn write_page(root: &Path, page: &PlannedPage) -> Result<usize, AppError> {
    if !is_within(&page.path, root) {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is outside {}", page.path.display(), root.display()),
        )));
    }
    if page.html.is_empty() {
        log::warn!("Page {} rendered empty", page.route);
    }

    if let Some(parent) = page.path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&page.path, page.html.as_str())?;

    log::info!("Wrote {} to {}", page.route, page.path.display());
    Ok(page.html.len())
}
