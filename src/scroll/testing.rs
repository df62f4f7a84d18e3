use std::collections::{BTreeMap, HashMap};

use super::surface::{Layout, Surface, Viewport};
use crate::element::ElementId;

/// In-memory page: fixed layouts, a scroll offset and a style sink.
pub struct FakeSurface {
    pub viewport: Viewport,
    pub offset: f64,
    pub layouts: HashMap<ElementId, Layout>,
    pub styles: HashMap<ElementId, BTreeMap<&'static str, String>>,
    pub scrolls: Vec<f64>,
}

impl FakeSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Viewport { width, height },
            offset: 0.0,
            layouts: HashMap::new(),
            styles: HashMap::new(),
            scrolls: Vec::new(),
        }
    }

    pub fn place(&mut self, element: ElementId, layout: Layout) {
        self.layouts.insert(element, layout);
    }

    pub fn block(&mut self, element: ElementId, top: f64, height: f64) {
        let width = self.viewport.width;
        self.place(element, Layout { top, left: 0.0, width, height });
    }

    pub fn style(&self, element: ElementId, property: &str) -> Option<&str> {
        self.styles
            .get(&element)
            .and_then(|s| s.get(property))
            .map(String::as_str)
    }
}

impl Surface for FakeSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn layout(&self, element: ElementId) -> Option<Layout> {
        self.layouts.get(&element).copied()
    }

    fn write(&mut self, element: ElementId, declarations: &[(&'static str, String)]) {
        let style = self.styles.entry(element).or_default();
        for (name, value) in declarations {
            style.insert(name, value.clone());
        }
    }

    fn clear(&mut self, element: ElementId, properties: &[&'static str]) {
        if let Some(style) = self.styles.get_mut(&element) {
            for name in properties {
                style.remove(name);
            }
        }
    }

    fn scroll_to(&mut self, offset: f64) {
        self.offset = offset;
        self.scrolls.push(offset);
    }
}
