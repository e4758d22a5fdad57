//! Renderer settings: where the project document lives.

use serde::{Deserialize, Serialize};

/// Relative location of the project document next to the page.
pub const DEFAULT_DATA_URL: &str = "project-data.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RendererConfig {
    /// URL handed to the fetcher. Relative URLs resolve against the page.
    pub data_url: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
        }
    }
}

impl RendererConfig {
    pub fn with_data_url(mut self, url: impl Into<String>) -> Self {
        self.data_url = url.into();
        self
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.data_url.trim().is_empty() {
            return Err("data_url must not be empty");
        }
        Ok(())
    }
}
