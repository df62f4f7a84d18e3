//! Geometry of a horizontally scrolled strip of equal-width panels driven by
//! vertical page scroll.

use super::position::ScrollEnd;
use super::trigger::Snap;
use crate::animation::{Easing, StyleProps, Timeline, Tween};
use crate::element::ElementId;

/// Vertical scroll distance per pixel of strip width.
pub const SCROLL_PER_STRIP_WIDTH: f64 = 2.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HorizontalStrip {
    pub panels: usize,
}

impl HorizontalStrip {
    pub fn new(panels: usize) -> Self {
        Self { panels }
    }

    fn gaps(&self) -> f64 {
        self.panels.saturating_sub(1) as f64
    }

    /// Translation of every panel at full progress, in percent of one panel.
    pub fn travel_percent(&self) -> f64 {
        -100.0 * self.gaps()
    }

    pub fn x_percent_at(&self, progress: f64) -> f64 {
        self.travel_percent() * progress.clamp(0.0, 1.0)
    }

    /// Scroll range end: proportional to the strip's live width.
    pub fn end(&self, strip: ElementId) -> ScrollEnd {
        ScrollEnd::WidthOf {
            element: strip,
            factor: SCROLL_PER_STRIP_WIDTH,
        }
    }

    /// One snap point per panel. A single panel has nothing to snap between.
    pub fn snap(&self) -> Option<Snap> {
        (self.panels > 1).then(|| Snap::every(1.0 / self.gaps()).durations(0.3, 0.5).delay(0.2))
    }

    /// Linear timeline moving every panel the full travel over one second.
    pub fn timeline(&self, panels: &[ElementId]) -> Timeline {
        panels.iter().fold(Timeline::new(), |tl, panel| {
            tl.at(
                0.0,
                Tween::to(*panel, StyleProps::new().x_percent(self.travel_percent()))
                    .duration(1.0)
                    .ease(Easing::Linear),
            )
        })
    }

    /// Progress of panel `index` through its own `left right` → `right left`
    /// range while the strip sits at `progress`.
    pub fn panel_progress(&self, index: usize, panel_width: f64, viewport_width: f64, progress: f64) -> f64 {
        let travelled = -self.x_percent_at(progress) / 100.0 * panel_width;
        let left = index as f64 * panel_width - travelled;
        ((viewport_width - left) / (viewport_width + panel_width)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Prop;
    use crate::scroll::engine::{ScrollEngine, ScrollObserver};
    use crate::scroll::surface::Layout;
    use crate::scroll::testing::FakeSurface;
    use crate::scroll::trigger::ScrollTrigger;

    #[test]
    fn full_progress_moves_strip_by_all_but_one_panel() {
        for n in 2..8 {
            let strip = HorizontalStrip::new(n);
            assert_eq!(strip.x_percent_at(1.0), -100.0 * (n as f64 - 1.0));
            assert_eq!(strip.x_percent_at(0.0), 0.0);
        }
        assert_eq!(HorizontalStrip::new(1).travel_percent(), 0.0);
    }

    #[test]
    fn snap_points_are_panel_fractions() {
        let strip = HorizontalStrip::new(5);
        let snap = strip.snap().unwrap();
        assert_eq!(snap.increment, 0.25);
        assert_eq!(snap.snap(0.3), 0.25);
        assert_eq!(snap.snap(0.4), 0.5);
        assert_eq!(snap.snap(0.99), 1.0);
        assert!(snap.duration(0.25) <= 0.5 && snap.duration(0.0) >= 0.3);
        assert_eq!(snap.delay, 0.2);
        assert!(HorizontalStrip::new(1).snap().is_none());
    }

    #[test]
    fn panel_progress_spans_entry_to_exit() {
        let strip = HorizontalStrip::new(5);
        assert_eq!(strip.panel_progress(0, 1000.0, 1000.0, 0.0), 0.5);
        assert_eq!(strip.panel_progress(1, 1000.0, 1000.0, 0.0), 0.0);
        assert_eq!(strip.panel_progress(1, 1000.0, 1000.0, 0.25), 0.5);
        assert_eq!(strip.panel_progress(1, 1000.0, 1000.0, 1.0), 1.0);
    }

    #[test]
    fn nested_panel_triggers_follow_strip_offset() {
        let n = 5;
        let width = 1000.0;
        let mut surface = FakeSurface::new(width, 800.0);
        let section = ElementId::fresh();
        let holder = ElementId::fresh();
        let panels: Vec<ElementId> = (0..n).map(|_| ElementId::fresh()).collect();
        let image = ElementId::fresh();
        surface.place(section, Layout { top: 0.0, left: 0.0, width, height: 800.0 });
        surface.place(holder, Layout { top: 0.0, left: 0.0, width: width * n as f64, height: 800.0 });
        for (i, panel) in panels.iter().enumerate() {
            surface.place(*panel, Layout { top: 0.0, left: i as f64 * width, width, height: 800.0 });
        }

        let strip = HorizontalStrip::new(n);
        let mut engine = ScrollEngine::new();
        let container = engine.observe(
            ScrollTrigger::builder(section)
                .start("top top")
                .end_at(strip.end(holder))
                .scrub()
                .animate(strip.timeline(&panels))
                .build()
                .unwrap(),
        );
        let nested = engine.observe(
            ScrollTrigger::builder(panels[1])
                .within(container)
                .start("left right")
                .end("right left")
                .scrub()
                .animate(Timeline::single(
                    Tween::from_to(image, StyleProps::new().scale(0.0), StyleProps::new().scale(1.0))
                        .duration(1.0)
                        .ease(Easing::Linear),
                    0.0,
                ))
                .build()
                .unwrap(),
        );

        let distance = width * n as f64 * SCROLL_PER_STRIP_WIDTH;
        surface.offset = distance * 0.25;
        engine.update(&mut surface, 0.0);
        assert_eq!(engine.range(container).map(|r| r.end), Some(distance));
        assert_eq!(
            surface.style(panels[0], "transform"),
            Some("translate3d(0px, 0px, 0) translateX(-100%)")
        );
        let expected = strip.panel_progress(1, width, width, 0.25);
        let got = engine.progress(nested).unwrap();
        assert!((got - expected).abs() < 1e-9, "{} vs {}", got, expected);
        assert_eq!(surface.style(image, "transform"), Some("translate3d(0px, 0px, 0) scale(0.5)"));

        surface.offset = distance;
        engine.update(&mut surface, 16.0);
        let tl = strip.timeline(&panels);
        let last = tl.sample(1.0);
        assert_eq!(
            last.get(&panels[4]).and_then(|s| s.get(Prop::XPercent)),
            Some(crate::animation::Value::Number(-400.0))
        );
        assert_eq!(engine.progress(nested), Some(1.0));
    }
}
