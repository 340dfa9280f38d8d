//! Posts: turning database rows and their blocks into [`Post`](crate::model::Post)s.
//!
//! - [`normalizer`] maps one block record to zero or one `Content`.
//! - [`assembler`] combines a row's properties with normalized contents.
//! - [`repository`] drives the API calls and ties the two together.

pub mod assembler;
pub mod normalizer;
pub mod repository;

pub use assembler::{assemble_post, extract_slug, extract_title};
pub use normalizer::{normalize_block, normalize_blocks};
pub use repository::PostRepository;
