//! In-memory [`Page`] for native hosts and tests.

use hashbrown::HashMap;

use crate::node::Node;
use crate::page::Page;

/// A flat set of addressable elements, each holding its current children.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    elements: HashMap<String, Vec<Node>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page containing one empty element per id.
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut page = Self::new();
        for id in ids {
            page.insert(id);
        }
        page
    }

    /// A page with every element id the renderer knows about.
    pub fn with_all_targets() -> Self {
        Self::with_ids(crate::binding::all_targets())
    }

    /// Add an empty element. Existing content under the same id is kept.
    pub fn insert(&mut self, id: impl Into<String>) {
        self.elements.entry(id.into()).or_default();
    }

    /// Seed an element with placeholder text, creating it if needed.
    pub fn with_text(mut self, id: impl Into<String>, text: &str) -> Self {
        self.elements.insert(id.into(), text_children(text));
        self
    }

    /// Seed an element with placeholder children, creating it if needed.
    pub fn with_children(mut self, id: impl Into<String>, children: Vec<Node>) -> Self {
        self.elements.insert(id.into(), children);
        self
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn children(&self, id: &str) -> Option<&[Node]> {
        self.elements.get(id).map(Vec::as_slice)
    }

    pub fn text_content(&self, id: &str) -> Option<String> {
        self.elements
            .get(id)
            .map(|children| children.iter().map(Node::text_content).collect())
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.elements
            .get(id)
            .map(|children| children.iter().map(Node::to_html).collect())
    }
}

impl Page for MemoryPage {
    fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(children) => {
                *children = text_children(text);
                true
            }
            None => false,
        }
    }

    fn replace_children(&mut self, id: &str, children: &[Node]) -> bool {
        match self.elements.get_mut(id) {
            Some(existing) => {
                existing.clear();
                existing.extend_from_slice(children);
                true
            }
            None => false,
        }
    }
}

fn text_children(text: &str) -> Vec<Node> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![Node::text(text)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Element;

    #[test]
    fn writes_to_unknown_ids_are_rejected() {
        let mut page = MemoryPage::with_ids(["a"]);
        assert!(!page.set_text("b", "x"));
        assert!(!page.replace_children("b", &[]));
        assert!(!page.contains("b"));
    }

    #[test]
    fn set_text_replaces_children() {
        let mut page = MemoryPage::new().with_children(
            "a",
            vec![Element::new("li").with_text("old").into()],
        );
        assert!(page.set_text("a", "new"));
        assert_eq!(page.text_content("a").as_deref(), Some("new"));
        assert_eq!(page.children("a").map(<[Node]>::len), Some(1));
    }

    #[test]
    fn replace_children_does_not_accumulate() {
        let mut page = MemoryPage::with_ids(["list"]);
        let items: Vec<Node> = vec![Element::new("li").with_text("x").into()];
        page.replace_children("list", &items);
        page.replace_children("list", &items);
        assert_eq!(page.children("list").map(<[Node]>::len), Some(1));
        assert_eq!(page.inner_html("list").as_deref(), Some("<li>x</li>"));
    }

    #[test]
    fn all_targets_page_is_populated() {
        let page = MemoryPage::with_all_targets();
        assert!(page.contains("lab-name"));
        assert!(page.contains("resources-list"));
        assert!(!page.is_empty());
    }
}
