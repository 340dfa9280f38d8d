// src/output/types.rs
//! The pages a build intends to write, and what came of writing them.

use crate::site::Route;
use crate::types::RenderedPage;
use std::path::{Path, PathBuf};

/// One rendered page and the file it lands in.
#[derive(Debug, Clone)]
pub struct PlannedPage {
    pub route: Route,
    pub path: PathBuf,
    pub html: RenderedPage,
}

/// Every page of one build, rooted at the output directory.
#[derive(Debug, Clone)]
pub struct OutputPlan {
    pub root: PathBuf,
    pub pages: Vec<PlannedPage>,
}

impl OutputPlan {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pages: Vec::new(),
        }
    }

    /// Adds the page for `route`; its file location follows from the route.
    pub fn with_page(mut self, route: Route, html: RenderedPage) -> Self {
        let path = route.output_path(&self.root);
        self.pages.push(PlannedPage { route, path, html });
        self
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.pages.iter().map(|page| &page.route)
    }

    pub fn file_paths(&self) -> Vec<&Path> {
        self.pages.iter().map(|page| page.path.as_path()).collect()
    }
}

#[derive(Debug, Clone)]
pub struct WrittenPage {
    pub route: Route,
    pub path: PathBuf,
    pub bytes: usize,
}

#[derive(Debug, Clone)]
pub struct FailedPage {
    pub route: Route,
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of delivering a plan. Pages fail independently.
#[derive(Debug, Clone, Default)]
pub struct OutputReport {
    pub written: Vec<WrittenPage>,
    pub failed: Vec<FailedPage>,
    pub bytes_written: usize,
    pub duration_ms: u64,
}

impl OutputReport {
    pub fn record_written(&mut self, page: WrittenPage) {
        self.bytes_written += page.bytes;
        self.written.push(page);
    }

    pub fn record_failed(&mut self, page: FailedPage) {
        self.failed.push(page);
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn pages_written(&self) -> usize {
        self.written.len()
    }

    /// One `route (path): error` line per failed page.
    pub fn failure_messages(&self) -> Vec<String> {
        self.failed
            .iter()
            .map(|f| format!("{} ({}): {}", f.route, f.path.display(), f.error))
            .collect()
    }
}
