//! Scroll-trigger descriptors: which element, which scroll range, how
//! progress maps onto a timeline.

use std::str::FromStr;

use slotmap::new_key_type;
use thiserror::Error;

use super::position::{PositionParseError, ScrollEnd, ScrollPosition};
use crate::animation::Timeline;
use crate::element::ElementId;

new_key_type! {
    /// Handle to a registered scroll trigger
    pub struct TriggerId;
}

#[derive(Debug, Error, PartialEq)]
pub enum TriggerError {
    #[error(transparent)]
    Position(#[from] PositionParseError),
    #[error("toggle actions \"{0}\" must name four of play, pause, resume, reverse, restart, reset, complete, none")]
    Actions(String),
    #[error("trigger on {0} has nothing to animate")]
    EmptyTimeline(ElementId),
    #[error("container-scoped trigger on {0} cannot pin")]
    PinnedInContainer(ElementId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    None,
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
}

impl FromStr for ToggleAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "none" => ToggleAction::None,
            "play" => ToggleAction::Play,
            "pause" => ToggleAction::Pause,
            "resume" => ToggleAction::Resume,
            "reverse" => ToggleAction::Reverse,
            "restart" => ToggleAction::Restart,
            "reset" => ToggleAction::Reset,
            "complete" => ToggleAction::Complete,
            _ => return Err(()),
        })
    }
}

/// What a discrete trigger does on each boundary crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl Default for ToggleActions {
    /// `play none none reverse`
    fn default() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::Reverse,
        }
    }
}

impl FromStr for ToggleActions {
    type Err = TriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actions: Result<Vec<ToggleAction>, ()> = s.split_whitespace().map(str::parse).collect();
        match actions.as_deref() {
            Ok([on_enter, on_leave, on_enter_back, on_leave_back]) => Ok(Self {
                on_enter: *on_enter,
                on_leave: *on_leave,
                on_enter_back: *on_enter_back,
                on_leave_back: *on_leave_back,
            }),
            _ => Err(TriggerError::Actions(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProgressMode {
    /// Timed playback started and reversed by boundary crossings.
    Discrete(ToggleActions),
    /// Timeline position follows scroll progress, optionally lagging by
    /// roughly `lag` seconds.
    Scrub { lag: Option<f64> },
}

/// Snap scroll progress to multiples of `increment` once scrolling rests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snap {
    pub increment: f64,
    pub min_duration: f64,
    pub max_duration: f64,
    pub delay: f64,
}

impl Snap {
    pub fn every(increment: f64) -> Self {
        Self {
            increment,
            min_duration: 0.3,
            max_duration: 0.5,
            delay: 0.2,
        }
    }

    pub fn durations(mut self, min: f64, max: f64) -> Self {
        self.min_duration = min;
        self.max_duration = max.max(min);
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    /// Nearest snap point to `progress`.
    pub fn snap(&self, progress: f64) -> f64 {
        if self.increment <= 0.0 {
            return progress.clamp(0.0, 1.0);
        }
        ((progress / self.increment).round() * self.increment).clamp(0.0, 1.0)
    }

    /// Time to travel `distance` (in progress units), growing with the
    /// distance and bounded by the configured durations.
    pub fn duration(&self, distance: f64) -> f64 {
        let span = if self.increment > 0.0 {
            (distance.abs() / self.increment).min(1.0)
        } else {
            1.0
        };
        self.min_duration + (self.max_duration - self.min_duration) * span
    }
}

/// What scroll offset a trigger measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// The page's vertical scroll.
    Page,
    /// The horizontal travel of another trigger's animated strip.
    Container(TriggerId),
}

/// A registered mapping from a scroll range to a timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTrigger {
    /// Cleanup key: the root element of the section that registered it.
    pub owner: ElementId,
    /// Element whose position defines the range.
    pub trigger: ElementId,
    pub start: ScrollPosition,
    pub end: ScrollEnd,
    pub mode: ProgressMode,
    pub pin: bool,
    pub snap: Option<Snap>,
    pub scope: Scope,
    pub timeline: Timeline,
}

impl ScrollTrigger {
    pub fn builder(trigger: ElementId) -> ScrollTriggerBuilder {
        ScrollTriggerBuilder::new(trigger)
    }

    /// The element this descriptor is keyed on within its owner.
    pub fn key(&self) -> ElementId {
        self.timeline.primary_target().unwrap_or(self.trigger)
    }
}

/// Builder collecting the first parse error instead of failing mid-chain.
pub struct ScrollTriggerBuilder {
    trigger: ElementId,
    start: Result<ScrollPosition, TriggerError>,
    end: Result<ScrollEnd, TriggerError>,
    mode: Result<ProgressMode, TriggerError>,
    pin: bool,
    snap: Option<Snap>,
    scope: Scope,
    timeline: Timeline,
}

impl ScrollTriggerBuilder {
    fn new(trigger: ElementId) -> Self {
        Self {
            trigger,
            start: "top bottom".parse().map_err(TriggerError::from),
            end: Ok(ScrollEnd::default()),
            mode: Ok(ProgressMode::Discrete(ToggleActions::default())),
            pin: false,
            snap: None,
            scope: Scope::Page,
            timeline: Timeline::new(),
        }
    }

    pub fn start(mut self, position: &str) -> Self {
        self.start = position.parse().map_err(TriggerError::from);
        self
    }

    pub fn end(mut self, position: &str) -> Self {
        self.end = position.parse().map_err(TriggerError::from);
        self
    }

    pub fn end_at(mut self, end: ScrollEnd) -> Self {
        self.end = Ok(end);
        self
    }

    pub fn toggle_actions(mut self, actions: &str) -> Self {
        self.mode = actions.parse().map(ProgressMode::Discrete);
        self
    }

    /// Bind progress directly to scroll.
    pub fn scrub(mut self) -> Self {
        self.mode = Ok(ProgressMode::Scrub { lag: None });
        self
    }

    /// Bind progress to scroll, catching up over roughly `seconds`.
    pub fn scrub_lag(mut self, seconds: f64) -> Self {
        self.mode = Ok(ProgressMode::Scrub { lag: Some(seconds) });
        self
    }

    pub fn pin(mut self) -> Self {
        self.pin = true;
        self
    }

    pub fn snap(mut self, snap: Snap) -> Self {
        self.snap = Some(snap);
        self
    }

    pub fn within(mut self, container: TriggerId) -> Self {
        self.scope = Scope::Container(container);
        self
    }

    pub fn animate(mut self, timeline: Timeline) -> Self {
        self.timeline = timeline;
        self
    }

    pub fn build(self) -> Result<ScrollTrigger, TriggerError> {
        if self.timeline.is_empty() {
            return Err(TriggerError::EmptyTimeline(self.trigger));
        }
        if self.pin && self.scope != Scope::Page {
            return Err(TriggerError::PinnedInContainer(self.trigger));
        }
        Ok(ScrollTrigger {
            owner: self.trigger,
            trigger: self.trigger,
            start: self.start?,
            end: self.end?,
            mode: self.mode?,
            pin: self.pin,
            snap: self.snap,
            scope: self.scope,
            timeline: self.timeline,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{StyleProps, Tween};
    use crate::scroll::position::Anchor;

    fn timeline(target: ElementId) -> Timeline {
        Timeline::single(Tween::to(target, StyleProps::new().opacity(1.0)), 0.0)
    }

    #[test]
    fn default_toggle_actions_play_then_reverse() {
        let parsed: ToggleActions = "play none none reverse".parse().unwrap();
        assert_eq!(parsed, ToggleActions::default());
        assert!("play none".parse::<ToggleActions>().is_err());
        assert!("play none none rewind".parse::<ToggleActions>().is_err());
    }

    #[test]
    fn builder_reports_first_bad_position() {
        let el = ElementId::fresh();
        let err = ScrollTrigger::builder(el)
            .start("top nowhere")
            .animate(timeline(el))
            .build()
            .unwrap_err();
        assert_eq!(err, TriggerError::Position(PositionParseError::Anchor("nowhere".into())));
    }

    #[test]
    fn builder_rejects_empty_timeline_and_pinned_containers() {
        let el = ElementId::fresh();
        assert_eq!(
            ScrollTrigger::builder(el).build().unwrap_err(),
            TriggerError::EmptyTimeline(el)
        );
        let container = TriggerId::default();
        assert_eq!(
            ScrollTrigger::builder(el).within(container).pin().animate(timeline(el)).build().unwrap_err(),
            TriggerError::PinnedInContainer(el)
        );
    }

    #[test]
    fn builder_defaults() {
        let section = ElementId::fresh();
        let title = ElementId::fresh();
        let trigger = ScrollTrigger::builder(section)
            .start("top 40%")
            .animate(timeline(title))
            .build()
            .unwrap();
        assert_eq!(trigger.owner, section);
        assert_eq!(trigger.start.viewport, Anchor::Percent(40.0));
        assert_eq!(trigger.end, ScrollEnd::default());
        assert_eq!(trigger.mode, ProgressMode::Discrete(ToggleActions::default()));
        assert_eq!(trigger.key(), title);
    }

    #[test]
    fn snaps_to_nearest_increment() {
        let snap = Snap::every(1.0 / 4.0);
        assert_eq!(snap.snap(0.0), 0.0);
        assert_eq!(snap.snap(0.1), 0.0);
        assert_eq!(snap.snap(0.13), 0.25);
        assert_eq!(snap.snap(0.6), 0.5);
        assert_eq!(snap.snap(0.9), 1.0);
    }

    #[test]
    fn snap_duration_is_bounded() {
        let snap = Snap::every(0.25);
        assert!((snap.duration(0.0) - 0.3).abs() < 1e-9);
        assert!((snap.duration(0.125) - 0.4).abs() < 1e-9);
        assert!((snap.duration(3.0) - 0.5).abs() < 1e-9);
    }
}
