use labpage::renderer::PageRenderer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AddEventListenerOptions, Document};

mod console;
mod dom;
mod fetch;

use dom::DomPage;
use fetch::BrowserFetcher;

/// Install logging and render once the document has been parsed.
pub fn start() {
    console::init();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        tracing::error!("no document; project page not rendered");
        return;
    };

    if document.ready_state() != "loading" {
        render(document);
        return;
    }

    let target = document.clone();
    let on_ready = Closure::once(move || render(document));
    let opts = AddEventListenerOptions::new();
    opts.set_once(true);
    match target.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        on_ready.as_ref().unchecked_ref(),
        &opts,
    ) {
        // The listener owns the closure from here on.
        Ok(()) => on_ready.forget(),
        Err(_) => tracing::error!("failed to register DOMContentLoaded listener"),
    }
}

fn render(document: Document) {
    spawn_local(async move {
        let mut renderer = PageRenderer::initialize(DomPage::new(document), BrowserFetcher);
        renderer.load().await;
    });
}
