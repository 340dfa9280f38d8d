// src/output/paths.rs
//! Pure functions for output path calculations.
//!
//! Nothing here performs I/O.

use std::path::{Component, Path, PathBuf};

const MAX_SEGMENT_CHARS: usize = 100;

/// Turns a slug into a single safe path segment, or `None` if nothing is left.
///
/// Separators and characters that are invalid in file names become `_`,
/// whitespace becomes `-`, and leading/trailing dots are trimmed so that `.`
/// and `..` can never appear.
pub fn sanitize_slug(slug: &str) -> Option<String> {
    let mapped = slug
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '#' | '%' => '_',
            c if c.is_control() => '_',
            c if c.is_whitespace() => '-',
            c => c,
        })
        .collect::<String>();

    let trimmed: String = mapped
        .trim_matches('.')
        .chars()
        .take(MAX_SEGMENT_CHARS)
        .collect();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Location of a page's `index.html` for the given route segments.
///
/// `page_path(out, &[])` is `out/index.html`;
/// `page_path(out, &["post", "hello"])` is `out/post/hello/index.html`.
pub fn page_path(base_dir: &Path, segments: &[&str]) -> PathBuf {
    let mut path = base_dir.to_path_buf();
    for segment in segments {
        path.push(segment);
    }
    path.join("index.html")
}

/// Whether `path` stays inside `base_dir` once `.` and `..` are resolved.
pub fn is_within(path: &Path, base_dir: &Path) -> bool {
    normalize_path(path).starts_with(normalize_path(base_dir))
}

/// Normalizes a path by resolving .. and . components.
fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                components.pop();
            }
            Component::CurDir => {}
            c => components.push(c),
        }
    }

    components.into_iter().collect()
}
