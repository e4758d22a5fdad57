//! The page renderer: one fetch, then three independent populate passes.

use tracing::{error, info};

use crate::binding::{RenderReport, Stage};
use crate::config::RendererConfig;
use crate::document::ProjectDocument;
use crate::error::LoadFailure;
use crate::fetch::Fetcher;
use crate::page::Page;

pub struct PageRenderer<P, F> {
    page: P,
    fetcher: F,
    config: RendererConfig,
}

impl<P: Page, F: Fetcher> PageRenderer<P, F> {
    /// Called by the host once its page surface is ready.
    pub fn initialize(page: P, fetcher: F) -> Self {
        Self::with_config(page, fetcher, RendererConfig::default())
    }

    pub fn with_config(page: P, fetcher: F, config: RendererConfig) -> Self {
        Self {
            page,
            fetcher,
            config,
        }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn into_page(self) -> P {
        self.page
    }

    /// Fetch and render. Failures are logged once and swallowed; whatever was
    /// already on the page stays there.
    pub async fn load(&mut self) -> Option<RenderReport> {
        match self.try_load().await {
            Ok(report) => Some(report),
            Err(e) => {
                error!(url = %self.config.data_url, error = %e, "error loading project document");
                None
            }
        }
    }

    /// Same flow as [`load`](Self::load), handing the failure back instead of logging it.
    pub async fn try_load(&mut self) -> Result<RenderReport, LoadFailure> {
        self.config.validate().map_err(LoadFailure::Config)?;

        let response = self.fetcher.fetch(&self.config.data_url).await?;
        if !response.is_success() {
            return Err(LoadFailure::Status {
                status: response.status,
            });
        }
        let doc = ProjectDocument::from_json(&response.body)?;
        Ok(self.render(&doc))
    }

    /// Run header, hero and sections against an already-loaded document.
    pub fn render(&mut self, doc: &ProjectDocument) -> RenderReport {
        let mut report = RenderReport::default();
        for stage in Stage::all() {
            report += stage.apply(&mut self.page, doc);
        }
        info!(
            texts = report.texts_written,
            lists = report.lists_replaced,
            missing_elements = report.missing_elements,
            absent_values = report.absent_values,
            "rendered project page"
        );
        report
    }

    pub fn populate_header(&mut self, doc: &ProjectDocument) -> RenderReport {
        Stage::Header.apply(&mut self.page, doc)
    }

    pub fn populate_hero(&mut self, doc: &ProjectDocument) -> RenderReport {
        Stage::Hero.apply(&mut self.page, doc)
    }

    pub fn populate_sections(&mut self, doc: &ProjectDocument) -> RenderReport {
        Stage::Sections.apply(&mut self.page, doc)
    }
}
