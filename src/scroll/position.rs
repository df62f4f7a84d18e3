//! Scroll position predicates such as `"top 40%"` or `"+=200%"`.
//!
//! A position names a point on the trigger element and a point on the
//! viewport; the scroll offset at which the two meet is the resolved value.

use std::str::FromStr;

use thiserror::Error;

use super::surface::{Axis, Layout, Surface, Viewport};
use crate::element::ElementId;

#[derive(Debug, Error, PartialEq)]
pub enum PositionParseError {
    #[error("scroll position \"{0}\" must name an element point and a viewport point")]
    Arity(String),
    #[error("unknown anchor \"{0}\"")]
    Anchor(String),
    #[error("invalid relative offset \"{0}\"")]
    Offset(String),
}

/// A point along one axis of a box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    Start,
    Center,
    End,
    Percent(f64),
    Px(f64),
}

impl Anchor {
    /// Distance of this point from the box's leading edge.
    pub fn resolve(self, size: f64) -> f64 {
        match self {
            Anchor::Start => 0.0,
            Anchor::Center => size / 2.0,
            Anchor::End => size,
            Anchor::Percent(p) => size * p / 100.0,
            Anchor::Px(px) => px,
        }
    }
}

impl FromStr for Anchor {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token {
            "top" | "left" => return Ok(Anchor::Start),
            "center" => return Ok(Anchor::Center),
            "bottom" | "right" => return Ok(Anchor::End),
            _ => {}
        }
        let parsed = if let Some(percent) = token.strip_suffix('%') {
            percent.parse::<f64>().map(Anchor::Percent)
        } else {
            token.strip_suffix("px").unwrap_or(token).parse::<f64>().map(Anchor::Px)
        };
        parsed.map_err(|_| PositionParseError::Anchor(token.to_string()))
    }
}

/// Element point meeting viewport point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollPosition {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl ScrollPosition {
    pub const fn new(element: Anchor, viewport: Anchor) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset at which the two points coincide.
    pub fn resolve(&self, layout: &Layout, axis: Axis, viewport: Viewport) -> f64 {
        layout.start(axis) + self.element.resolve(layout.size(axis))
            - self.viewport.resolve(viewport.size(axis))
    }
}

impl FromStr for ScrollPosition {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            [element, viewport] => Ok(Self::new(element.parse()?, viewport.parse()?)),
            _ => Err(PositionParseError::Arity(s.to_string())),
        }
    }
}

/// Where a scroll range ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollEnd {
    At(ScrollPosition),
    /// `+=N%`: N percent of the viewport past the start.
    ViewportFraction(f64),
    /// `+=N` or `+=Npx` past the start.
    Pixels(f64),
    /// The measured width of `element` times `factor` past the start,
    /// re-measured on every refresh.
    WidthOf { element: ElementId, factor: f64 },
}

impl Default for ScrollEnd {
    fn default() -> Self {
        ScrollEnd::At(ScrollPosition::new(Anchor::End, Anchor::Start))
    }
}

impl ScrollEnd {
    pub fn resolve<S: Surface + ?Sized>(
        &self,
        start: f64,
        layout: &Layout,
        axis: Axis,
        surface: &S,
    ) -> f64 {
        let viewport = surface.viewport();
        match *self {
            ScrollEnd::At(position) => position.resolve(layout, axis, viewport),
            ScrollEnd::ViewportFraction(fraction) => start + fraction * viewport.size(axis),
            ScrollEnd::Pixels(px) => start + px,
            ScrollEnd::WidthOf { element, factor } => {
                start + surface.layout(element).map_or(0.0, |l| l.width * factor)
            }
        }
    }
}

impl FromStr for ScrollEnd {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(relative) = s.trim().strip_prefix("+=") else {
            return s.parse().map(ScrollEnd::At);
        };
        let invalid = || PositionParseError::Offset(s.to_string());
        if let Some(percent) = relative.strip_suffix('%') {
            let percent: f64 = percent.parse().map_err(|_| invalid())?;
            Ok(ScrollEnd::ViewportFraction(percent / 100.0))
        } else {
            let px: f64 = relative
                .strip_suffix("px")
                .unwrap_or(relative)
                .parse()
                .map_err(|_| invalid())?;
            Ok(ScrollEnd::Pixels(px))
        }
    }
}
