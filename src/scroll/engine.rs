//! The scroll-trigger registry and the per-frame update that maps scroll
//! offsets onto timelines.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::debug;
use slotmap::SlotMap;

use super::surface::{Axis, Surface};
use super::trigger::{ProgressMode, Scope, ScrollTrigger, ToggleAction, TriggerId};
use crate::animation::{Easing, Prop, StyleProps, Value};
use crate::element::ElementId;

/// Registry of live scroll observations.
///
/// Sections talk to this trait rather than to the engine so lifecycle rules
/// can be checked without a browser.
pub trait ScrollObserver {
    /// Register `trigger`, replacing any live descriptor with the same owner
    /// and key.
    fn observe(&mut self, trigger: ScrollTrigger) -> TriggerId;
    /// Remove every descriptor registered by `owner`. Returns how many went.
    fn unobserve_owner(&mut self, owner: ElementId) -> usize;
    fn observed_by(&self, owner: ElementId) -> usize;
    fn unobserve_all(&mut self) -> usize;
    fn len(&self) -> usize;
}

/// Resolved scroll range in the trigger's scope.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub start: f64,
    pub end: f64,
}

impl Range {
    pub fn progress(&self, offset: f64) -> f64 {
        if self.end <= self.start {
            return if offset >= self.start { 1.0 } else { 0.0 };
        }
        ((offset - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    fn region(&self, offset: f64) -> Region {
        if offset < self.start {
            Region::Before
        } else if offset > self.end {
            Region::After
        } else {
            Region::Active
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Region {
    Before,
    Active,
    After,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Heading {
    Forward,
    Backward,
}

struct Playback {
    time: f64,
    heading: Heading,
    playing: bool,
}

impl Playback {
    fn apply(&mut self, action: ToggleAction, duration: f64) {
        match action {
            ToggleAction::None => {}
            ToggleAction::Play => {
                self.heading = Heading::Forward;
                self.playing = true;
            }
            ToggleAction::Reverse => {
                self.heading = Heading::Backward;
                self.playing = true;
            }
            ToggleAction::Pause => self.playing = false,
            ToggleAction::Resume => self.playing = true,
            ToggleAction::Restart => {
                self.time = 0.0;
                self.heading = Heading::Forward;
                self.playing = true;
            }
            ToggleAction::Reset => {
                self.time = 0.0;
                self.playing = false;
            }
            ToggleAction::Complete => {
                self.time = duration;
                self.playing = false;
            }
        }
    }

    fn advance(&mut self, dt: f64, duration: f64) {
        if !self.playing {
            return;
        }
        let step = match self.heading {
            Heading::Forward => dt,
            Heading::Backward => -dt,
        };
        self.time = (self.time + step).clamp(0.0, duration);
        let finished = match self.heading {
            Heading::Forward => self.time >= duration,
            Heading::Backward => self.time <= 0.0,
        };
        if finished {
            self.playing = false;
        }
    }
}

struct Active {
    descriptor: ScrollTrigger,
    key: ElementId,
    range: Option<Range>,
    region: Option<Region>,
    progress: f64,
    smoothed: Option<f64>,
    playback: Playback,
}

struct SnapMotion {
    from: f64,
    to: f64,
    duration: f64,
    elapsed: f64,
}

const PIN_SPACING: &str = "margin-bottom";
/// Lag factors divide into this many time constants.
const LAG_TIME_CONSTANTS: f64 = 4.0;
/// Longest frame step fed to playback, in seconds.
const MAX_FRAME: f64 = 0.1;

/// Registry plus runtime for scroll-triggered animations.
#[derive(Default)]
pub struct ScrollEngine {
    triggers: SlotMap<TriggerId, Active>,
    needs_refresh: bool,
    last_tick: Option<f64>,
    last_offset: Option<f64>,
    idle: f64,
    snap_motion: Option<SnapMotion>,
    snapped: bool,
    spaced: BTreeSet<ElementId>,
    stale_spacers: Vec<ElementId>,
    written: HashMap<ElementId, Vec<(&'static str, String)>>,
}

impl ScrollEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute every range on the next update.
    pub fn request_refresh(&mut self) {
        self.needs_refresh = true;
    }

    pub fn range(&self, id: TriggerId) -> Option<Range> {
        self.triggers.get(id).and_then(|t| t.range)
    }

    /// Raw (unsmoothed) progress of a trigger after the last update.
    pub fn progress(&self, id: TriggerId) -> Option<f64> {
        self.triggers.get(id).map(|t| t.progress)
    }

    pub fn contains(&self, id: TriggerId) -> bool {
        self.triggers.contains_key(id)
    }

    /// Resolve every range. Pinned page triggers go first, top to bottom, so
    /// the spacing they add is in place before anything below is measured.
    pub fn refresh<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.needs_refresh = false;
        for element in std::mem::take(&mut self.spaced) {
            surface.clear(element, &[PIN_SPACING]);
            self.written.remove(&element);
        }

        let viewport = surface.viewport();
        let mut pinned: Vec<(f64, TriggerId)> = self
            .triggers
            .iter()
            .filter(|(_, t)| t.descriptor.pin)
            .filter_map(|(id, t)| surface.layout(t.descriptor.trigger).map(|l| (l.top, id)))
            .collect();
        pinned.sort_by(|a, b| a.0.total_cmp(&b.0));
        let pinned_ids: BTreeSet<TriggerId> = pinned.iter().map(|(_, id)| *id).collect();
        let rest: Vec<TriggerId> = self
            .triggers
            .keys()
            .filter(|id| !pinned_ids.contains(id))
            .collect();

        for id in pinned.into_iter().map(|(_, id)| id).chain(rest) {
            let Some(active) = self.triggers.get_mut(id) else {
                continue;
            };
            let axis = match active.descriptor.scope {
                Scope::Page => Axis::Vertical,
                Scope::Container(_) => Axis::Horizontal,
            };
            active.range = surface.layout(active.descriptor.trigger).map(|layout| {
                let start = active.descriptor.start.resolve(&layout, axis, viewport);
                let end = active.descriptor.end.resolve(start, &layout, axis, &*surface);
                Range { start, end }
            });
            if active.descriptor.pin {
                if let Some(range) = active.range {
                    surface.write(
                        active.descriptor.trigger,
                        &[(PIN_SPACING, format!("{}px", range.length().round()))],
                    );
                    self.spaced.insert(active.descriptor.trigger);
                }
            }
        }
        debug!("scroll engine refreshed {} triggers", self.triggers.len());
    }

    /// Advance one frame at `now` milliseconds and write resulting styles.
    pub fn update<S: Surface + ?Sized>(&mut self, surface: &mut S, now: f64) {
        for element in self.stale_spacers.drain(..) {
            surface.clear(element, &[PIN_SPACING, "transform"]);
        }
        if self.needs_refresh {
            self.refresh(surface);
        }

        let dt = self
            .last_tick
            .map_or(0.0, |last| ((now - last) / 1000.0).clamp(0.0, MAX_FRAME));
        self.last_tick = Some(now);

        let offset = self.track_scroll(surface, dt);

        let mut styles: BTreeMap<ElementId, StyleProps> = BTreeMap::new();
        let mut pins: BTreeMap<ElementId, f64> = BTreeMap::new();
        let mut snap_request = None;

        let mut order: Vec<TriggerId> = self
            .triggers
            .iter()
            .filter(|(_, t)| t.descriptor.scope == Scope::Page)
            .map(|(id, _)| id)
            .collect();
        order.extend(
            self.triggers
                .iter()
                .filter(|(_, t)| t.descriptor.scope != Scope::Page)
                .map(|(id, _)| id),
        );

        for id in order {
            let position = match self.triggers[id].descriptor.scope {
                Scope::Page => Some(offset),
                Scope::Container(container) => self.container_offset(container, &styles, surface),
            };
            let Some(position) = position else { continue };
            let active = &mut self.triggers[id];
            let Some(range) = active.range else { continue };

            let progress = range.progress(position);
            let region = range.region(position);
            let duration = active.descriptor.timeline.duration();

            let time = match active.descriptor.mode {
                ProgressMode::Scrub { lag } => {
                    let smoothed = match (active.smoothed, lag) {
                        (Some(current), Some(lag)) if lag > 0.0 => {
                            let alpha = 1.0 - (-dt * LAG_TIME_CONSTANTS / lag).exp();
                            current + (progress - current) * alpha
                        }
                        _ => progress,
                    };
                    active.smoothed = Some(smoothed);
                    smoothed * duration
                }
                ProgressMode::Discrete(actions) => {
                    for crossing in crossings(active.region, region) {
                        let action = match crossing {
                            Crossing::Enter => actions.on_enter,
                            Crossing::Leave => actions.on_leave,
                            Crossing::EnterBack => actions.on_enter_back,
                            Crossing::LeaveBack => actions.on_leave_back,
                        };
                        active.playback.apply(action, duration);
                    }
                    active.playback.advance(dt, duration);
                    active.playback.time
                }
            };
            active.progress = progress;
            active.region = Some(region);

            for (target, props) in active.descriptor.timeline.sample(time) {
                styles.entry(target).or_default().overlay(&props);
            }

            if active.descriptor.pin && active.descriptor.scope == Scope::Page {
                let pin = (offset - range.start).clamp(0.0, range.length());
                pins.insert(active.descriptor.trigger, pin);
            }

            if let (Some(snap), Scope::Page) = (active.descriptor.snap, active.descriptor.scope) {
                if region == Region::Active
                    && !self.snapped
                    && self.snap_motion.is_none()
                    && self.idle >= snap.delay
                {
                    let target = snap.snap(progress);
                    let distance = target - progress;
                    if (distance * range.length()).abs() > 1.0 {
                        snap_request = Some(SnapMotion {
                            from: offset,
                            to: range.start + target * range.length(),
                            duration: snap.duration(distance),
                            elapsed: 0.0,
                        });
                    }
                    self.snapped = true;
                }
            }
        }

        if snap_request.is_some() {
            self.snap_motion = snap_request;
        }

        let elements: BTreeSet<ElementId> = styles.keys().chain(pins.keys()).copied().collect();
        for element in elements {
            let pin = pins.get(&element).copied().unwrap_or(0.0);
            let mut css = styles
                .get(&element)
                .map(|s| s.css(pin))
                .unwrap_or_else(|| StyleProps::new().css(pin));
            // A pin released at exactly zero still has to undo the last offset.
            if pins.contains_key(&element) && !css.iter().any(|(name, _)| *name == "transform") {
                css.push(("transform", "translate3d(0px, 0px, 0)".to_string()));
            }
            if self.written.get(&element) != Some(&css) {
                surface.write(element, &css);
                self.written.insert(element, css);
            }
        }
    }

    /// Detect user scrolling, drive an in-flight snap, and return the offset
    /// this frame should be evaluated at.
    fn track_scroll<S: Surface + ?Sized>(&mut self, surface: &mut S, dt: f64) -> f64 {
        let offset = surface.scroll_offset();
        let expected = self.snap_motion.as_ref().map(|m| {
            m.from + (m.to - m.from) * Easing::Power1InOut.apply(m.elapsed / m.duration.max(1e-6))
        });
        let moved = self.last_offset.map_or(true, |last| (offset - last).abs() > 0.5);
        let by_user = match expected {
            Some(expected) => (offset - expected).abs() > 1.0,
            None => moved,
        };

        if by_user {
            self.idle = 0.0;
            self.snapped = false;
            self.snap_motion = None;
        } else {
            self.idle += dt;
        }

        let mut offset = offset;
        if let Some(motion) = self.snap_motion.as_mut() {
            motion.elapsed = (motion.elapsed + dt).min(motion.duration);
            let t = Easing::Power1InOut.apply(motion.elapsed / motion.duration.max(1e-6));
            offset = motion.from + (motion.to - motion.from) * t;
            surface.scroll_to(offset);
            if motion.elapsed >= motion.duration {
                self.snap_motion = None;
            }
        }
        self.last_offset = Some(offset);
        offset
    }

    /// Horizontal travel of a container trigger's primary target, in px.
    fn container_offset<S: Surface + ?Sized>(
        &self,
        container: TriggerId,
        styles: &BTreeMap<ElementId, StyleProps>,
        surface: &S,
    ) -> Option<f64> {
        let active = self.triggers.get(container)?;
        let style = styles.get(&active.key)?;
        let number = |prop: Prop| style.get(prop).and_then(Value::number).unwrap_or(0.0);
        let width = surface.layout(active.key).map_or(0.0, |l| l.width);
        let translate = number(Prop::X) + number(Prop::XPercent) / 100.0 * width;
        Some(-translate)
    }

    fn forget(&mut self, id: TriggerId) -> Option<Active> {
        let removed = self.triggers.remove(id)?;
        if self.spaced.remove(&removed.descriptor.trigger) {
            self.stale_spacers.push(removed.descriptor.trigger);
        }
        for target in removed.descriptor.timeline.targets() {
            self.written.remove(&target);
        }
        self.written.remove(&removed.descriptor.trigger);
        Some(removed)
    }

    /// Removes `ids` and every trigger scoped inside one of them.
    fn forget_with_nested(&mut self, ids: BTreeSet<TriggerId>) -> usize {
        let nested: Vec<TriggerId> = self
            .triggers
            .iter()
            .filter(|(_, t)| matches!(t.descriptor.scope, Scope::Container(c) if ids.contains(&c)))
            .map(|(id, _)| id)
            .collect();
        ids.into_iter()
            .chain(nested)
            .filter_map(|id| self.forget(id))
            .count()
    }
}

impl ScrollObserver for ScrollEngine {
    fn observe(&mut self, trigger: ScrollTrigger) -> TriggerId {
        let key = trigger.key();
        let duplicates: BTreeSet<TriggerId> = self
            .triggers
            .iter()
            .filter(|(_, t)| t.descriptor.owner == trigger.owner && t.key == key)
            .map(|(id, _)| id)
            .collect();
        if !duplicates.is_empty() {
            debug!("replacing scroll trigger for {} owned by {}", key, trigger.owner);
            self.forget_with_nested(duplicates);
        }
        self.needs_refresh = true;
        self.triggers.insert(Active {
            descriptor: trigger,
            key,
            range: None,
            region: None,
            progress: 0.0,
            smoothed: None,
            playback: Playback {
                time: 0.0,
                heading: Heading::Forward,
                playing: false,
            },
        })
    }

    fn unobserve_owner(&mut self, owner: ElementId) -> usize {
        let owned: BTreeSet<TriggerId> = self
            .triggers
            .iter()
            .filter(|(_, t)| t.descriptor.owner == owner)
            .map(|(id, _)| id)
            .collect();
        let removed = self.forget_with_nested(owned);
        if removed > 0 {
            debug!("removed {} scroll triggers owned by {}", removed, owner);
        }
        removed
    }

    fn observed_by(&self, owner: ElementId) -> usize {
        self.triggers.values().filter(|t| t.descriptor.owner == owner).count()
    }

    fn unobserve_all(&mut self) -> usize {
        let ids: Vec<TriggerId> = self.triggers.keys().collect();
        ids.into_iter().filter_map(|id| self.forget(id)).count()
    }

    fn len(&self) -> usize {
        self.triggers.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Crossing {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

/// Boundary crossings between two regions, in order. The first evaluation
/// behaves as if coming from before the range.
fn crossings(from: Option<Region>, to: Region) -> &'static [Crossing] {
    use Crossing::*;
    match (from.unwrap_or(Region::Before), to) {
        (Region::Before, Region::Active) => &[Enter],
        (Region::Before, Region::After) => &[Enter, Leave],
        (Region::Active, Region::After) => &[Leave],
        (Region::After, Region::Active) => &[EnterBack],
        (Region::After, Region::Before) => &[EnterBack, LeaveBack],
        (Region::Active, Region::Before) => &[LeaveBack],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Timeline, Tween};
    use crate::scroll::position::ScrollEnd;
    use crate::scroll::surface::Layout;
    use crate::scroll::testing::FakeSurface;
    use crate::scroll::trigger::Snap;

    fn fade_in(target: ElementId) -> Timeline {
        Timeline::single(
            Tween::from_to(
                target,
                StyleProps::new().y(100.0).opacity(0.0),
                StyleProps::new().y(-300.0).opacity(1.0),
            )
            .duration(0.8)
            .ease(Easing::Linear),
            0.0,
        )
    }

    /// Runs `frames` updates 100 ms apart starting at `from` ms.
    fn run(engine: &mut ScrollEngine, surface: &mut FakeSurface, from: f64, frames: usize) -> f64 {
        let mut now = from;
        for _ in 0..frames {
            engine.update(surface, now);
            now += 100.0;
        }
        now
    }

    #[test]
    fn observe_replaces_descriptor_with_same_owner_and_key() {
        let mut engine = ScrollEngine::new();
        let section = ElementId::fresh();
        let title = ElementId::fresh();
        let first = engine.observe(
            ScrollTrigger::builder(section).animate(fade_in(title)).build().unwrap(),
        );
        let second = engine.observe(
            ScrollTrigger::builder(section).start("top 40%").animate(fade_in(title)).build().unwrap(),
        );
        assert!(!engine.contains(first));
        assert!(engine.contains(second));
        assert_eq!(engine.observed_by(section), 1);

        engine.observe(ScrollTrigger::builder(section).animate(fade_in(ElementId::fresh())).build().unwrap());
        assert_eq!(engine.observed_by(section), 2);
    }

    #[test]
    fn replacing_a_container_drops_triggers_nested_in_it() {
        let mut engine = ScrollEngine::new();
        let section = ElementId::fresh();
        let strip = ElementId::fresh();
        let old = engine.observe(ScrollTrigger::builder(section).scrub().animate(fade_in(strip)).build().unwrap());
        let nested = engine.observe(
            ScrollTrigger::builder(ElementId::fresh())
                .within(old)
                .scrub()
                .animate(fade_in(ElementId::fresh()))
                .build()
                .unwrap(),
        );
        assert_eq!(engine.len(), 2);

        let replacement = engine.observe(ScrollTrigger::builder(section).scrub().animate(fade_in(strip)).build().unwrap());
        assert!(!engine.contains(old));
        assert!(!engine.contains(nested));
        assert!(engine.contains(replacement));
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn width_derived_end_is_remeasured_only_on_refresh() {
        let mut surface = FakeSurface::new(1000.0, 800.0);
        let section = ElementId::fresh();
        let holder = ElementId::fresh();
        surface.block(section, 0.0, 800.0);
        surface.place(holder, Layout { top: 0.0, left: 0.0, width: 5000.0, height: 800.0 });

        let mut engine = ScrollEngine::new();
        let id = engine.observe(
            ScrollTrigger::builder(section)
                .start("top top")
                .end_at(ScrollEnd::WidthOf { element: holder, factor: 2.8 })
                .scrub()
                .animate(fade_in(ElementId::fresh()))
                .build()
                .unwrap(),
        );
        engine.update(&mut surface, 0.0);
        assert_eq!(engine.range(id).map(|r| r.end), Some(14000.0));

        surface.place(holder, Layout { top: 0.0, left: 0.0, width: 2000.0, height: 800.0 });
        engine.update(&mut surface, 16.0);
        assert_eq!(engine.range(id).map(|r| r.end), Some(14000.0));

        engine.request_refresh();
        engine.update(&mut surface, 32.0);
        assert_eq!(engine.range(id).map(|r| r.end), Some(5600.0));
    }

    #[test]
    fn unobserve_owner_leaves_nothing_behind() {
        let mut engine = ScrollEngine::new();
        let section = ElementId::fresh();
        let other = ElementId::fresh();
        let strip = engine.observe(
            ScrollTrigger::builder(section).scrub().animate(fade_in(ElementId::fresh())).build().unwrap(),
        );
        let panel = ElementId::fresh();
        let mut nested = ScrollTrigger::builder(panel)
            .within(strip)
            .scrub()
            .animate(fade_in(ElementId::fresh()))
            .build()
            .unwrap();
        nested.owner = other;
        engine.observe(nested);
        engine.observe(ScrollTrigger::builder(other).animate(fade_in(ElementId::fresh())).build().unwrap());

        assert_eq!(engine.unobserve_owner(section), 2);
        assert_eq!(engine.observed_by(section), 0);
        assert_eq!(engine.observed_by(other), 1);
        assert_eq!(engine.unobserve_all(), 1);
        assert_eq!(engine.len(), 0);
    }

    #[test]
    fn discrete_trigger_plays_on_enter_and_reverses_on_leave_back() {
        let mut surface = FakeSurface::new(1200.0, 1000.0);
        let section = ElementId::fresh();
        let title = ElementId::fresh();
        surface.block(section, 1000.0, 1000.0);
        let mut engine = ScrollEngine::new();
        let id = engine.observe(
            ScrollTrigger::builder(section).start("top 40%").animate(fade_in(title)).build().unwrap(),
        );

        engine.update(&mut surface, 0.0);
        assert_eq!(engine.range(id), Some(Range { start: 600.0, end: 2000.0 }));
        assert_eq!(surface.style(title, "opacity"), Some("0"));
        assert_eq!(surface.style(title, "transform"), Some("translate3d(0px, 100px, 0)"));

        surface.offset = 700.0;
        let now = run(&mut engine, &mut surface, 100.0, 12);
        assert_eq!(surface.style(title, "opacity"), Some("1"));
        assert_eq!(surface.style(title, "transform"), Some("translate3d(0px, -300px, 0)"));

        // Leaving the range downwards does nothing with `none`.
        surface.offset = 2500.0;
        let now = run(&mut engine, &mut surface, now, 3);
        assert_eq!(surface.style(title, "opacity"), Some("1"));

        surface.offset = 0.0;
        run(&mut engine, &mut surface, now, 12);
        assert_eq!(surface.style(title, "opacity"), Some("0"));
        assert_eq!(surface.style(title, "transform"), Some("translate3d(0px, 100px, 0)"));
    }

    #[test]
    fn scrubbed_trigger_follows_scroll() {
        let mut surface = FakeSurface::new(1200.0, 1000.0);
        let section = ElementId::fresh();
        let star = ElementId::fresh();
        surface.block(section, 1000.0, 1000.0);
        let mut engine = ScrollEngine::new();
        let id = engine.observe(
            ScrollTrigger::builder(section)
                .start("top bottom")
                .end("bottom top")
                .scrub()
                .animate(Timeline::single(
                    Tween::to(star, StyleProps::new().x(200.0)).duration(1.0).ease(Easing::Linear),
                    0.0,
                ))
                .build()
                .unwrap(),
        );

        surface.offset = 1000.0;
        engine.update(&mut surface, 0.0);
        assert_eq!(engine.progress(id), Some(0.5));
        assert_eq!(surface.style(star, "transform"), Some("translate3d(100px, 0px, 0)"));

        surface.offset = 5000.0;
        engine.update(&mut surface, 16.0);
        assert_eq!(surface.style(star, "transform"), Some("translate3d(200px, 0px, 0)"));
    }

    #[test]
    fn lagged_scrub_catches_up_gradually() {
        let mut surface = FakeSurface::new(1200.0, 1000.0);
        let section = ElementId::fresh();
        let star = ElementId::fresh();
        surface.block(section, 1000.0, 1000.0);
        let mut engine = ScrollEngine::new();
        engine.observe(
            ScrollTrigger::builder(section)
                .scrub_lag(1.0)
                .end("bottom top")
                .animate(Timeline::single(
                    Tween::to(star, StyleProps::new().opacity(0.0)).duration(1.0).ease(Easing::Linear),
                    0.0,
                ))
                .build()
                .unwrap(),
        );
        engine.update(&mut surface, 0.0);
        assert_eq!(surface.style(star, "opacity"), Some("1"));

        surface.offset = 5000.0;
        engine.update(&mut surface, 100.0);
        let opacity: f64 = surface.style(star, "opacity").unwrap().parse().unwrap();
        assert!(opacity > 0.0 && opacity < 1.0, "opacity {}", opacity);

        run(&mut engine, &mut surface, 200.0, 40);
        assert_eq!(surface.style(star, "opacity"), Some("0"));
    }

    #[test]
    fn pinned_trigger_reserves_spacing_and_holds_position() {
        let mut surface = FakeSurface::new(1200.0, 1000.0);
        let section = ElementId::fresh();
        let circle = ElementId::fresh();
        surface.block(section, 1000.0, 1000.0);
        let mut engine = ScrollEngine::new();
        let id = engine.observe(
            ScrollTrigger::builder(section)
                .start("top top")
                .end("+=200%")
                .scrub()
                .pin()
                .animate(Timeline::single(
                    Tween::to(circle, StyleProps::new().scale(17.0)).duration(1.0).ease(Easing::Linear),
                    0.0,
                ))
                .build()
                .unwrap(),
        );

        surface.offset = 2000.0;
        engine.update(&mut surface, 0.0);
        assert_eq!(engine.range(id), Some(Range { start: 1000.0, end: 3000.0 }));
        assert_eq!(surface.style(section, "margin-bottom"), Some("2000px"));
        assert_eq!(surface.style(section, "transform"), Some("translate3d(0px, 1000px, 0)"));
        assert_eq!(surface.style(circle, "transform"), Some("translate3d(0px, 0px, 0) scale(9)"));

        assert_eq!(engine.unobserve_owner(section), 1);
        engine.update(&mut surface, 16.0);
        assert_eq!(surface.style(section, "margin-bottom"), None);
        assert_eq!(surface.style(section, "transform"), None);
    }

    #[test]
    fn missing_trigger_element_is_a_no_op() {
        let mut surface = FakeSurface::new(1200.0, 1000.0);
        let mut engine = ScrollEngine::new();
        let ghost = ElementId::fresh();
        let target = ElementId::fresh();
        let id = engine.observe(ScrollTrigger::builder(ghost).animate(fade_in(target)).build().unwrap());
        run(&mut engine, &mut surface, 0.0, 3);
        assert_eq!(engine.range(id), None);
        assert!(surface.styles.is_empty());
    }

    #[test]
    fn snaps_to_nearest_point_once_scrolling_rests() {
        let mut surface = FakeSurface::new(1200.0, 1000.0);
        let section = ElementId::fresh();
        let strip = ElementId::fresh();
        surface.block(section, 0.0, 1000.0);
        let mut engine = ScrollEngine::new();
        engine.observe(
            ScrollTrigger::builder(section)
                .start("top top")
                .end("+=1000")
                .scrub()
                .snap(Snap::every(0.25))
                .animate(Timeline::single(
                    Tween::to(strip, StyleProps::new().x_percent(-400.0)).duration(1.0).ease(Easing::Linear),
                    0.0,
                ))
                .build()
                .unwrap(),
        );

        surface.offset = 300.0;
        run(&mut engine, &mut surface, 0.0, 12);
        assert!(!surface.scrolls.is_empty());
        assert!((surface.offset - 250.0).abs() < 1e-6, "offset {}", surface.offset);

        // Resting on a snap point does not trigger another snap.
        let scrolls = surface.scrolls.len();
        run(&mut engine, &mut surface, 1200.0, 5);
        assert_eq!(surface.scrolls.len(), scrolls);
    }
}
