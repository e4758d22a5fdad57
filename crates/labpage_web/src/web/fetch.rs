use labpage::error::LoadFailure;
use labpage::fetch::{FetchResponse, Fetcher};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// `window.fetch` with no options: a plain relative GET.
pub(super) struct BrowserFetcher;

impl Fetcher for BrowserFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, LoadFailure> {
        let window = web_sys::window().ok_or_else(|| network("no window"))?;

        let value = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| network(&js_error_text(&e)))?;
        let response = value
            .dyn_into::<web_sys::Response>()
            .map_err(|_| network("fetch: expected Response"))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| network(&js_error_text(&e)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| network(&js_error_text(&e)))?
            .as_string()
            .unwrap_or_default();

        Ok(FetchResponse { status, body })
    }
}

fn network(msg: &str) -> LoadFailure {
    LoadFailure::Network(msg.to_string())
}

fn js_error_text(v: &JsValue) -> String {
    if let Some(err) = v.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    v.as_string().unwrap_or_else(|| format!("{v:?}"))
}
