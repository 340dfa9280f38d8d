// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! The site generator only builds an [`OutputPlan`]; [`deliver`] is the one
//! place that touches the filesystem.

mod paths;
mod types;
mod writer;

pub use paths::{is_within, page_path, sanitize_slug};
pub use types::{FailedPage, OutputPlan, OutputReport, PlannedPage, WrittenPage};
pub use writer::deliver;
