//! The surface the renderer writes into.

use crate::node::Node;

/// Element lookup plus the two writes the renderer needs.
///
/// Both methods are no-ops returning `false` when no element carries `id`;
/// that return value is the whole existence guard.
pub trait Page {
    /// Replace the element's content with a single text run (`textContent`).
    fn set_text(&mut self, id: &str, text: &str) -> bool;

    /// Drop every existing child of the element, then append `children` in order.
    fn replace_children(&mut self, id: &str, children: &[Node]) -> bool;
}

impl<P: Page + ?Sized> Page for &mut P {
    fn set_text(&mut self, id: &str, text: &str) -> bool {
        (**self).set_text(id, text)
    }

    fn replace_children(&mut self, id: &str, children: &[Node]) -> bool {
        (**self).replace_children(id, children)
    }
}
