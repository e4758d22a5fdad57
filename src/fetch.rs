//! Retrieval of the project document.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::LoadFailure;

/// Raw HTTP-ish response: a status code and the body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Issues the single GET the renderer needs.
///
/// Implementations report transport problems as [`LoadFailure::Network`] and
/// return every completed response as `Ok`, whatever its status. The returned
/// future is not required to be `Send`; browser fetches are not.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, LoadFailure>;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, LoadFailure> {
        (**self).fetch(url).await
    }
}

/// Serves URLs as paths relative to a local directory.
///
/// A missing file answers 404 so native previews behave like a static server.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Fetcher for DirFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, LoadFailure> {
        let relative = url.trim_start_matches("./").trim_start_matches('/');
        if relative.split('/').any(|part| part == "..") {
            return Ok(FetchResponse {
                status: 403,
                body: String::new(),
            });
        }
        match std::fs::read_to_string(self.root.join(relative)) {
            Ok(body) => Ok(FetchResponse::ok(body)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(FetchResponse {
                status: 404,
                body: String::new(),
            }),
            Err(e) => Err(LoadFailure::Network(format!(
                "read {}: {e}",
                self.root.join(relative).display()
            ))),
        }
    }
}
