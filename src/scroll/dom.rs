use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::NodeRef;

use super::surface::{Layout, Surface, Viewport};
use crate::element::{ElementHandle, ElementId};

/// The live page, reached through the `NodeRef`s sections render.
#[derive(Default)]
pub struct DomSurface {
    nodes: HashMap<ElementId, NodeRef>,
}

impl DomSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, handle: &ElementHandle) {
        self.nodes.insert(handle.id, handle.node.clone());
    }

    pub fn detach(&mut self, id: ElementId) {
        self.nodes.remove(&id);
    }

    pub fn attached(&self) -> usize {
        self.nodes.len()
    }

    fn element(&self, id: ElementId) -> Option<HtmlElement> {
        self.nodes.get(&id)?.cast::<HtmlElement>()
    }
}

/// Document-relative box from the offset chain, which ignores transforms
/// (pin offsets and strip translation included).
fn document_layout(element: &HtmlElement) -> Layout {
    let mut top = 0.0;
    let mut left = 0.0;
    let mut current = Some(element.clone());
    while let Some(el) = current {
        top += el.offset_top() as f64;
        left += el.offset_left() as f64;
        current = el.offset_parent().and_then(|p| p.dyn_into::<HtmlElement>().ok());
    }
    Layout {
        top,
        left,
        width: element.offset_width() as f64,
        height: element.offset_height() as f64,
    }
}

impl Surface for DomSurface {
    fn viewport(&self) -> Viewport {
        let window = web_sys::window();
        let measure = |v: Option<wasm_bindgen::JsValue>| v.and_then(|v| v.as_f64()).unwrap_or(0.0);
        Viewport {
            width: measure(window.as_ref().and_then(|w| w.inner_width().ok())),
            height: measure(window.as_ref().and_then(|w| w.inner_height().ok())),
        }
    }

    fn scroll_offset(&self) -> f64 {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn layout(&self, element: ElementId) -> Option<Layout> {
        self.element(element).map(|el| document_layout(&el))
    }

    fn write(&mut self, element: ElementId, declarations: &[(&'static str, String)]) {
        let Some(el) = self.element(element) else { return };
        let style = el.style();
        for (name, value) in declarations {
            let _ = style.set_property(name, value);
        }
    }

    fn clear(&mut self, element: ElementId, properties: &[&'static str]) {
        let Some(el) = self.element(element) else { return };
        let style = el.style();
        for name in properties {
            let _ = style.remove_property(name);
        }
    }

    fn scroll_to(&mut self, offset: f64) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, offset);
        }
    }
}
