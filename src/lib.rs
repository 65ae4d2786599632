//! Link-preview relay for Dynasty Scans.
//!
//! Browsers are redirected to the original page. Link-preview crawlers get a
//! small HTML document with OpenGraph tags built from the upstream chapter JSON
//! or image page.

pub mod bot;
pub mod config;
pub mod description;
pub mod error;
pub mod fetchers;
pub mod handlers;
pub mod metadata;
pub mod parsers;
pub mod render;
pub mod server;
pub mod tags;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use metadata::{ContentMetadata, Tag};
pub use server::{AppState, build_router};
