use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use yew::NodeRef;

static NEXT_ELEMENT_ID: AtomicU32 = AtomicU32::new(1);

/// Stable opaque handle of a renderable element.
///
/// Animation descriptors only ever refer to elements through these ids; the
/// DOM surface maps them back to live nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u32);

impl ElementId {
    pub fn fresh() -> Self {
        ElementId(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el#{}", self.0)
    }
}

/// An element id paired with the `NodeRef` rendered for it.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementHandle {
    pub id: ElementId,
    pub node: NodeRef,
}

impl ElementHandle {
    pub fn new() -> Self {
        Self {
            id: ElementId::fresh(),
            node: NodeRef::default(),
        }
    }
}

impl Default for ElementHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_unique() {
        let a = ElementId::fresh();
        let b = ElementId::fresh();
        assert_ne!(a, b);
        assert_ne!(ElementHandle::new().id, ElementHandle::new().id);
    }
}
