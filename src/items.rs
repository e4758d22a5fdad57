//! One function per list entry shape.

use crate::document::{MethodologyStep, Resource, TeamMember, TimelineEntry};
use crate::node::{Element, Node};

pub const MAILTO_SCHEME: &str = "mailto:";
pub const TARGET_NEW_TAB: &str = "_blank";
pub const TARGET_SAME_TAB: &str = "_self";

/// `<li>{text}</li>`
#[allow(clippy::ptr_arg)]
pub fn list_item(text: &String) -> Node {
    Element::new("li").with_text(text.as_str()).into()
}

pub fn methodology_step(step: &MethodologyStep) -> Node {
    Element::new("div")
        .with_class("step-item")
        .with_child(
            Element::new("div")
                .with_class("step-title")
                .with_text(step.title.as_str()),
        )
        .with_child(
            Element::new("div")
                .with_class("step-body")
                .with_text(step.description.as_str()),
        )
        .into()
}

/// Role and name always; affiliation and a `mailto:` link only when present.
pub fn team_card(member: &TeamMember) -> Node {
    let mut card = Element::new("div")
        .with_class("team-card")
        .with_child(
            Element::new("div")
                .with_class("team-role")
                .with_text(member.role.as_str()),
        )
        .with_child(
            Element::new("div")
                .with_class("team-name")
                .with_text(member.name.as_str()),
        );

    if let Some(affiliation) = &member.affiliation {
        card = card.with_child(
            Element::new("div")
                .with_class("team-affiliation")
                .with_text(affiliation.as_str()),
        );
    }

    if let Some(email) = &member.email {
        card = card.with_child(
            Element::new("div").with_class("team-email").with_child(
                Element::new("a")
                    .with_attr("href", format!("{MAILTO_SCHEME}{email}"))
                    .with_text(email.as_str()),
            ),
        );
    }

    card.into()
}

pub fn timeline_entry(entry: &TimelineEntry) -> Node {
    Element::new("li")
        .with_text(format!("{}: {}", entry.label, entry.value))
        .into()
}

pub fn resource_entry(resource: &Resource) -> Node {
    let target = if resource.external {
        TARGET_NEW_TAB
    } else {
        TARGET_SAME_TAB
    };
    let mut li = Element::new("li").with_child(
        Element::new("a")
            .with_attr("href", resource.href.as_str())
            .with_attr("target", target)
            .with_text(resource.label.as_str()),
    );
    if let Some(note) = &resource.note {
        li = li.with_child(
            Element::new("span")
                .with_class("muted")
                .with_text(format!(" \u{2013} {note}")),
        );
    }
    li.into()
}
