//! # labpage
//!
//! Renders a research-project page from a single JSON document.
//!
//! The renderer fetches `project-data.json` once, then copies its fields into
//! page elements looked up by id. Missing elements and missing or malformed
//! fields are skipped; a failed load is logged and leaves the page as it was.
//!
//! ## Quick Start
//!
//! ```
//! use labpage::prelude::*;
//!
//! let doc = ProjectDocument::from_json(r#"{
//!     "lab": { "name": "Solar Lab" },
//!     "sections": { "objectives": ["Measure", "Model"] }
//! }"#).unwrap();
//!
//! let page = MemoryPage::with_ids(["lab-name", "objectives-list"]);
//! let mut renderer = PageRenderer::initialize(page, DirFetcher::new("."));
//! renderer.render(&doc);
//!
//! assert_eq!(renderer.page().text_content("lab-name").as_deref(), Some("Solar Lab"));
//! assert_eq!(
//!     renderer.page().inner_html("objectives-list").as_deref(),
//!     Some("<li>Measure</li><li>Model</li>")
//! );
//! ```
//!
//! ## Modules
//!
//! - [`document`]: lenient decoding of the project document
//! - [`binding`]: the declarative binding tables and the two write primitives
//! - [`items`]: per-entry renderers for list containers
//! - [`renderer`]: the fetch-then-populate flow
//! - [`page`] / [`memory`]: the page surface and an in-memory implementation
//! - [`fetch`]: the fetch collaborator

pub mod binding;
pub mod config;
pub mod document;
pub mod error;
pub mod fetch;
pub mod items;
pub mod memory;
pub mod node;
pub mod page;
pub mod renderer;

pub mod prelude {
    pub use crate::binding::{RenderReport, Stage};
    pub use crate::config::RendererConfig;
    pub use crate::document::ProjectDocument;
    pub use crate::error::LoadFailure;
    pub use crate::fetch::{DirFetcher, FetchResponse, Fetcher};
    pub use crate::memory::MemoryPage;
    pub use crate::node::{Element, Node};
    pub use crate::page::Page;
    pub use crate::renderer::PageRenderer;
}
