use labpage::node::Node;
use labpage::page::Page;
use tracing::warn;

/// [`Page`] over the live document.
pub(super) struct DomPage {
    document: web_sys::Document,
}

impl DomPage {
    pub(super) fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    fn build(&self, node: &Node) -> Result<web_sys::Node, String> {
        match node {
            Node::Text(text) => Ok(self.document.create_text_node(text).into()),
            Node::Element(e) => {
                let el = self
                    .document
                    .create_element(e.tag)
                    .map_err(|_| format!("document: create_element({}) failed", e.tag))?;
                if let Some(class) = e.class {
                    el.set_class_name(class);
                }
                for (name, value) in &e.attrs {
                    el.set_attribute(name, value)
                        .map_err(|_| format!("element: set_attribute({name}) failed"))?;
                }
                for child in &e.children {
                    let child = self.build(child)?;
                    el.append_child(&child)
                        .map_err(|_| "element: append_child failed".to_string())?;
                }
                Ok(el.into())
            }
        }
    }
}

impl Page for DomPage {
    fn set_text(&mut self, id: &str, text: &str) -> bool {
        let Some(el) = self.document.get_element_by_id(id) else {
            return false;
        };
        el.set_text_content(Some(text));
        true
    }

    fn replace_children(&mut self, id: &str, children: &[Node]) -> bool {
        let Some(el) = self.document.get_element_by_id(id) else {
            return false;
        };
        el.set_inner_html("");
        for child in children {
            match self.build(child) {
                Ok(node) => {
                    if el.append_child(&node).is_err() {
                        warn!(target_id = id, "append_child failed; entry dropped");
                    }
                }
                Err(e) => warn!(target_id = id, error = %e, "entry dropped"),
            }
        }
        true
    }
}
