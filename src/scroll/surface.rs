use crate::element::ElementId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }
}

/// Untransformed layout box of an element in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Layout {
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.top,
            Axis::Horizontal => self.left,
        }
    }

    pub fn size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }
}

/// What the scroll engine needs from the page it animates.
///
/// `layout` returns `None` for elements that are not mounted; every caller
/// treats that as "nothing to do".
pub trait Surface {
    fn viewport(&self) -> Viewport;
    fn scroll_offset(&self) -> f64;
    fn layout(&self, element: ElementId) -> Option<Layout>;
    fn write(&mut self, element: ElementId, declarations: &[(&'static str, String)]);
    fn clear(&mut self, element: ElementId, properties: &[&'static str]);
    fn scroll_to(&mut self, offset: f64);
}
