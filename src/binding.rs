//! Declarative field → element bindings.
//!
//! Each page region is a static, ordered table of [`Binding`]s. A binding
//! names its JSON source path (used only for diagnostics), the target element
//! id and how to render it. Two primitives do all the writing:
//! [`bind_text`] for scalar targets and [`replace_list`] for list containers.
//!
//! Every scalar target is presence-guarded: an absent value leaves the element
//! exactly as it was, the funding summary and notes included.

use std::fmt;
use std::ops::AddAssign;

use tracing::debug;

use crate::document::ProjectDocument;
use crate::items;
use crate::node::Node;
use crate::page::Page;

/// Result of applying one binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Written,
    MissingElement,
    AbsentValue,
}

/// Counts accumulated over one or more bindings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub texts_written: usize,
    pub lists_replaced: usize,
    pub missing_elements: usize,
    pub absent_values: usize,
}

impl RenderReport {
    pub fn writes(&self) -> usize {
        self.texts_written + self.lists_replaced
    }

    pub fn skipped(&self) -> usize {
        self.missing_elements + self.absent_values
    }

    fn record(&mut self, kind: &RenderKind, outcome: Outcome) {
        match (kind, outcome) {
            (RenderKind::Text(_), Outcome::Written) => self.texts_written += 1,
            (RenderKind::List(_), Outcome::Written) => self.lists_replaced += 1,
            (_, Outcome::MissingElement) => self.missing_elements += 1,
            (_, Outcome::AbsentValue) => self.absent_values += 1,
        }
    }
}

impl AddAssign for RenderReport {
    fn add_assign(&mut self, rhs: Self) {
        self.texts_written += rhs.texts_written;
        self.lists_replaced += rhs.lists_replaced;
        self.missing_elements += rhs.missing_elements;
        self.absent_values += rhs.absent_values;
    }
}

/// Write `value` as the element's text if both exist.
pub fn bind_text<P: Page + ?Sized>(page: &mut P, target: &str, value: Option<&str>) -> Outcome {
    let Some(value) = value else {
        return Outcome::AbsentValue;
    };
    if page.set_text(target, value) {
        Outcome::Written
    } else {
        Outcome::MissingElement
    }
}

/// Replace the container's children with one rendered node per item, in order.
///
/// `None` (missing or non-array source) leaves the container untouched; an
/// empty slice clears it.
pub fn replace_list<P, T>(
    page: &mut P,
    target: &str,
    items: Option<&[T]>,
    render_one: impl Fn(&T) -> Node,
) -> Outcome
where
    P: Page + ?Sized,
{
    let Some(items) = items else {
        return Outcome::AbsentValue;
    };
    let nodes: Vec<Node> = items.iter().map(render_one).collect();
    if page.replace_children(target, &nodes) {
        Outcome::Written
    } else {
        Outcome::MissingElement
    }
}

pub type TextSource = for<'a> fn(&'a ProjectDocument) -> Option<&'a str>;
pub type ListWriter = fn(&mut dyn Page, &str, &ProjectDocument) -> Outcome;

#[derive(Clone, Copy)]
pub enum RenderKind {
    Text(TextSource),
    List(ListWriter),
}

impl fmt::Debug for RenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderKind::Text(_) => f.write_str("Text"),
            RenderKind::List(_) => f.write_str("List"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub source: &'static str,
    pub target: &'static str,
    pub kind: RenderKind,
}

impl Binding {
    pub fn apply(&self, page: &mut dyn Page, doc: &ProjectDocument) -> Outcome {
        let outcome = match self.kind {
            RenderKind::Text(source) => bind_text(page, self.target, source(doc)),
            RenderKind::List(write) => write(page, self.target, doc),
        };
        if outcome != Outcome::Written {
            debug!(source = self.source, element = self.target, ?outcome, "binding skipped");
        }
        outcome
    }
}

/// The three page regions, rendered in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Header,
    Hero,
    Sections,
}

impl Stage {
    pub fn all() -> &'static [Stage] {
        &[Stage::Header, Stage::Hero, Stage::Sections]
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Header => "header",
            Stage::Hero => "hero",
            Stage::Sections => "sections",
        }
    }

    pub fn bindings(self) -> &'static [Binding] {
        match self {
            Stage::Header => HEADER,
            Stage::Hero => HERO,
            Stage::Sections => SECTIONS,
        }
    }

    pub fn apply(self, page: &mut dyn Page, doc: &ProjectDocument) -> RenderReport {
        let mut report = RenderReport::default();
        for binding in self.bindings() {
            let outcome = binding.apply(page, doc);
            report.record(&binding.kind, outcome);
        }
        report
    }
}

/// Every element id referenced by any stage, in render order.
pub fn all_targets() -> impl Iterator<Item = &'static str> {
    Stage::all()
        .iter()
        .flat_map(|stage| stage.bindings())
        .map(|b| b.target)
}

const fn text(source: &'static str, target: &'static str, read: TextSource) -> Binding {
    Binding {
        source,
        target,
        kind: RenderKind::Text(read),
    }
}

const fn list(source: &'static str, target: &'static str, write: ListWriter) -> Binding {
    Binding {
        source,
        target,
        kind: RenderKind::List(write),
    }
}

static HEADER: &[Binding] = &[
    text("lab.name", "lab-name", |d| d.lab.name.as_deref()),
    text("lab.tagline", "lab-tagline", |d| d.lab.tagline.as_deref()),
    text("lab.name", "footer-lab-name", |d| d.lab.name.as_deref()),
    text("footerNote", "footer-note", |d| d.footer_note.as_deref()),
];

static HERO: &[Binding] = &[
    text("project.title", "project-title", |d| d.project.title.as_deref()),
    text("project.tagline", "project-tagline", |d| d.project.tagline.as_deref()),
    text("funding.agency", "funding-agency", |d| d.funding.agency.as_deref()),
    text("funding.amountDisplay", "funding-amount", |d| d.funding.amount_display.as_deref()),
    text("project.durationDisplay", "project-duration", |d| d.project.duration_display.as_deref()),
    text("project.id", "project-id", |d| d.project.id.as_deref()),
    list("project.highlights", "highlights-list", |page, target, d| {
        replace_list(page, target, d.project.highlights.as_deref(), items::list_item)
    }),
];

static SECTIONS: &[Binding] = &[
    text("sections.overview", "overview-text", |d| d.sections.overview.as_deref()),
    text("sections.motivation", "motivation-text", |d| d.sections.motivation.as_deref()),
    list("sections.objectives", "objectives-list", |page, target, d| {
        replace_list(page, target, d.sections.objectives.as_deref(), items::list_item)
    }),
    list("sections.methodology", "methodology-steps", |page, target, d| {
        replace_list(
            page,
            target,
            d.sections.methodology.as_deref(),
            items::methodology_step,
        )
    }),
    list("sections.impact", "impact-list", |page, target, d| {
        replace_list(page, target, d.sections.impact.as_deref(), items::list_item)
    }),
    list("team", "team-grid", |page, target, d| {
        replace_list(page, target, d.team.as_deref(), items::team_card)
    }),
    text("funding.summary", "funding-summary", |d| d.funding.summary.as_deref()),
    text("funding.notes", "funding-notes", |d| d.funding.notes.as_deref()),
    list("timeline", "timeline-list", |page, target, d| {
        replace_list(page, target, d.timeline.as_deref(), items::timeline_entry)
    }),
    list("resources", "resources-list", |page, target, d| {
        replace_list(page, target, d.resources.as_deref(), items::resource_entry)
    }),
];
