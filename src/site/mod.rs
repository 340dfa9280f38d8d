// src/site/mod.rs
//! The blog as a set of pages: controllers, routes, and the static generator.

pub mod controllers;
pub mod generator;
pub mod routes;

pub use controllers::{
    detail_page, list_page, post_paths, static_paths, PageOutcome, RouteParams,
};
pub use generator::SiteGenerator;
pub use routes::{Route, RouteTable};
