use std::cell::Cell;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use labpage::binding::all_targets;
use labpage::prelude::*;
use serde_json::json;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn doc(v: serde_json::Value) -> ProjectDocument {
    ProjectDocument::from_value(&v)
}

/// Replays a fixed outcome and counts calls.
struct Scripted {
    response: Result<FetchResponse, &'static str>,
    calls: Cell<usize>,
}

impl Scripted {
    fn ok(body: &str) -> Self {
        Self {
            response: Ok(FetchResponse::ok(body)),
            calls: Cell::new(0),
        }
    }

    fn status(status: u16) -> Self {
        Self {
            response: Ok(FetchResponse {
                status,
                body: String::new(),
            }),
            calls: Cell::new(0),
        }
    }

    fn network(msg: &'static str) -> Self {
        Self {
            response: Err(msg),
            calls: Cell::new(0),
        }
    }
}

impl Fetcher for Scripted {
    async fn fetch(&self, _url: &str) -> Result<FetchResponse, LoadFailure> {
        self.calls.set(self.calls.get() + 1);
        self.response
            .clone()
            .map_err(|e| LoadFailure::Network(e.to_string()))
    }
}

struct CountErrors(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for CountErrors {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run `load` under a subscriber that counts error records.
fn load_counting_errors<F: Fetcher>(
    renderer: &mut PageRenderer<MemoryPage, F>,
) -> (Option<RenderReport>, usize) {
    let errors = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(CountErrors(Arc::clone(&errors)));
    let report = tracing::subscriber::with_default(subscriber, || {
        pollster::block_on(renderer.load())
    });
    (report, errors.load(Ordering::SeqCst))
}

fn seeded_page() -> MemoryPage {
    let mut page = MemoryPage::new();
    for id in all_targets() {
        page = page.with_text(id, "placeholder");
    }
    page
}

#[test]
fn fixture_renders_every_target() {
    let mut r = PageRenderer::initialize(
        MemoryPage::with_all_targets(),
        DirFetcher::new(fixtures()),
    );
    let report = pollster::block_on(r.load()).expect("fixture loads");

    assert_eq!(report.texts_written, 14);
    assert_eq!(report.lists_replaced, 7);
    assert_eq!(report.skipped(), 0);

    let page = r.page();
    assert_eq!(page.text_content("lab-name").as_deref(), Some("Energy Systems Lab"));
    assert_eq!(page.text_content("footer-lab-name").as_deref(), Some("Energy Systems Lab"));
    assert_eq!(page.text_content("funding-amount").as_deref(), Some("£1.4M"));
    assert_eq!(page.text_content("project-id").as_deref(), Some("EP/X012345/1"));
    assert_eq!(page.children("highlights-list").map(<[Node]>::len), Some(3));
    assert_eq!(
        page.inner_html("timeline-list").as_deref(),
        Some("<li>Kickoff: 2024-01</li><li>Pilot feeder live: 2025-03</li>")
    );
}

#[test]
fn fixture_team_and_resources_markup() {
    let mut r = PageRenderer::initialize(
        MemoryPage::with_all_targets(),
        DirFetcher::new(fixtures()),
    );
    pollster::block_on(r.load()).expect("fixture loads");
    let page = r.page();

    assert_eq!(
        page.inner_html("team-grid").as_deref(),
        Some(concat!(
            "<div class=\"team-card\">",
            "<div class=\"team-role\">Principal Investigator</div>",
            "<div class=\"team-name\">Dr. R. Okafor</div>",
            "<div class=\"team-affiliation\">School of Engineering</div>",
            "<div class=\"team-email\"><a href=\"mailto:r.okafor@example.ac.uk\">r.okafor@example.ac.uk</a></div>",
            "</div>",
            "<div class=\"team-card\">",
            "<div class=\"team-role\">Research Fellow</div>",
            "<div class=\"team-name\">J. Lindqvist</div>",
            "</div>",
        ))
    );

    assert_eq!(
        page.inner_html("resources-list").as_deref(),
        Some(concat!(
            "<li><a href=\"https://example.org/solardt-paper.pdf\" target=\"_blank\">Project paper</a>",
            "<span class=\"muted\"> \u{2013} preprint</span></li>",
            "<li><a href=\"data.html\" target=\"_self\">Dataset</a></li>",
        ))
    );
}

#[test]
fn absent_fields_leave_targets_untouched() {
    let mut r = PageRenderer::initialize(seeded_page(), Scripted::ok("{}"));
    let report = pollster::block_on(r.load()).expect("empty document renders");

    assert_eq!(report.writes(), 0);
    assert_eq!(report.absent_values, 21);
    for id in all_targets() {
        assert_eq!(r.page().text_content(id).as_deref(), Some("placeholder"), "{id}");
    }
}

#[test]
fn falsy_footer_note_keeps_existing_text() {
    let page = MemoryPage::with_all_targets().with_text("footer-note", "Original footer");
    let mut r = PageRenderer::initialize(page, Scripted::ok("{}"));
    for note in [json!(""), json!(0), json!(false), json!(null)] {
        let report = r.populate_header(&doc(json!({ "footerNote": note.clone() })));
        assert_eq!(report.absent_values, 4, "{note}");
        assert_eq!(
            r.page().text_content("footer-note").as_deref(),
            Some("Original footer"),
            "{note}"
        );
    }

    r.populate_header(&doc(json!({ "footerNote": "Updated 2024" })));
    assert_eq!(r.page().text_content("footer-note").as_deref(), Some("Updated 2024"));
}

#[test]
fn timeline_entry_without_value_keeps_label_only() {
    let mut r = PageRenderer::initialize(MemoryPage::with_all_targets(), Scripted::ok("{}"));
    r.populate_sections(&doc(json!({
        "timeline": [{ "label": "Kickoff" }, { "value": "2025" }]
    })));
    assert_eq!(
        r.page().inner_html("timeline-list").as_deref(),
        Some("<li>Kickoff: </li><li>: 2025</li>")
    );
}

#[test]
fn funding_summary_and_notes_are_presence_guarded() {
    let mut r = PageRenderer::initialize(seeded_page(), Scripted::ok("{}"));
    r.populate_sections(&doc(json!({ "funding": { "agency": "NSF" } })));
    assert_eq!(r.page().text_content("funding-summary").as_deref(), Some("placeholder"));
    assert_eq!(r.page().text_content("funding-notes").as_deref(), Some("placeholder"));

    r.populate_sections(&doc(json!({ "funding": { "summary": "", "notes": "Two years" } })));
    assert_eq!(r.page().text_content("funding-summary").as_deref(), Some(""));
    assert_eq!(r.page().text_content("funding-notes").as_deref(), Some("Two years"));
}

#[test]
fn malformed_lists_are_skipped_not_cleared() {
    let mut r = PageRenderer::initialize(seeded_page(), Scripted::ok("{}"));
    let report = r.populate_sections(&doc(json!({
        "sections": { "objectives": "one, two", "impact": 3 },
        "team": { "role": "PI" },
        "timeline": null
    })));
    assert_eq!(report.lists_replaced, 0);
    for id in ["objectives-list", "impact-list", "team-grid", "timeline-list"] {
        assert_eq!(r.page().text_content(id).as_deref(), Some("placeholder"), "{id}");
    }
}

#[test]
fn missing_elements_are_skipped() {
    let page = MemoryPage::with_ids(["project-title"]);
    let mut r = PageRenderer::initialize(page, Scripted::ok("{}"));
    let report = r.populate_hero(&doc(json!({
        "project": { "title": "T", "tagline": "t", "highlights": ["a"] }
    })));
    assert_eq!(report.texts_written, 1);
    assert_eq!(report.missing_elements, 2);
    assert_eq!(r.page().len(), 1);
}

#[test]
fn rerender_replaces_lists_in_order() {
    let mut r = PageRenderer::initialize(MemoryPage::with_all_targets(), Scripted::ok("{}"));
    r.render(&doc(json!({ "sections": { "objectives": ["A", "B"] } })));
    assert_eq!(
        r.page().inner_html("objectives-list").as_deref(),
        Some("<li>A</li><li>B</li>")
    );

    r.render(&doc(json!({ "sections": { "objectives": ["B", "A"] } })));
    assert_eq!(
        r.page().inner_html("objectives-list").as_deref(),
        Some("<li>B</li><li>A</li>")
    );

    r.render(&doc(json!({ "sections": { "objectives": ["C"] } })));
    assert_eq!(r.page().inner_html("objectives-list").as_deref(), Some("<li>C</li>"));
}

#[test]
fn rendering_twice_is_idempotent() {
    let body = std::fs::read_to_string(fixtures().join("project-data.json")).unwrap();
    let document = ProjectDocument::from_json(&body).unwrap();

    let mut r = PageRenderer::initialize(MemoryPage::with_all_targets(), Scripted::ok(&body));
    r.render(&document);
    let first: Vec<_> = all_targets().map(|id| r.page().inner_html(id)).collect();
    r.render(&document);
    let second: Vec<_> = all_targets().map(|id| r.page().inner_html(id)).collect();
    assert_eq!(first, second);
}

#[test]
fn network_failure_logs_once_and_keeps_page() {
    let mut r = PageRenderer::initialize(seeded_page(), Scripted::network("connection refused"));
    let (report, errors) = load_counting_errors(&mut r);
    assert_eq!(report, None);
    assert_eq!(errors, 1);
    assert_eq!(r.page().text_content("lab-name").as_deref(), Some("placeholder"));
}

#[test]
fn http_error_status_logs_once_and_keeps_page() {
    let mut r = PageRenderer::initialize(seeded_page(), Scripted::status(500));
    let (report, errors) = load_counting_errors(&mut r);
    assert_eq!(report, None);
    assert_eq!(errors, 1);
    assert_eq!(r.page().text_content("objectives-list").as_deref(), Some("placeholder"));
}

#[test]
fn successful_load_logs_no_errors() {
    let mut r = PageRenderer::initialize(MemoryPage::with_all_targets(), Scripted::ok("{}"));
    let (report, errors) = load_counting_errors(&mut r);
    assert!(report.is_some());
    assert_eq!(errors, 0);
}

#[test]
fn load_fetches_exactly_once() {
    let fetcher = Scripted::ok(r#"{ "lab": { "name": "L" } }"#);
    let mut r = PageRenderer::initialize(MemoryPage::with_all_targets(), &fetcher);
    pollster::block_on(r.load());
    assert_eq!(fetcher.calls.get(), 1);
}

#[test]
fn custom_data_url_is_used() {
    let config = RendererConfig::default().with_data_url("missing.json");
    let mut r = PageRenderer::with_config(
        MemoryPage::with_all_targets(),
        DirFetcher::new(fixtures()),
        config,
    );
    let err = pollster::block_on(r.try_load()).unwrap_err();
    assert!(matches!(err, LoadFailure::Status { status: 404 }));
}
