//! Browser host for the project page renderer.
//!
//! With `--features web` on `wasm32` this crate provides [`start`], which binds
//! `labpage`'s `PageRenderer` to the live document and `window.fetch`. On any
//! other build the crate compiles to nothing, so `cargo test` at the workspace
//! root needs no wasm toolchain.

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
