//! Tweens and timelines.
//!
//! A timeline is sampled statelessly: `sample(t)` returns the style every
//! target has at time `t`, which is what both scrubbing (time follows scroll)
//! and discrete playback (time follows the clock) need.

use std::collections::{BTreeMap, BTreeSet};

use super::easing::Easing;
use super::props::{Prop, StyleProps};
use crate::element::ElementId;

/// One interpolation of one element.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub target: ElementId,
    pub from: Option<StyleProps>,
    pub to: StyleProps,
    pub duration: f64,
    pub ease: Easing,
}

impl Tween {
    /// Tween from whatever the target currently holds.
    pub fn to(target: ElementId, to: StyleProps) -> Self {
        Self {
            target,
            from: None,
            to,
            duration: 0.5,
            ease: Easing::default(),
        }
    }

    /// Tween between two explicit states. The from-state renders immediately.
    pub fn from_to(target: ElementId, from: StyleProps, to: StyleProps) -> Self {
        Self {
            from: Some(from),
            ..Self::to(target, to)
        }
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds.max(0.0);
        self
    }

    pub fn ease(mut self, ease: Easing) -> Self {
        self.ease = ease;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Entry {
    at: f64,
    tween: Tween,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    sets: Vec<(ElementId, StyleProps)>,
    entries: Vec<Entry>,
    /// Start state of each entry, parallel to `entries`.
    starts: Vec<StyleProps>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// A lone tween starting after `delay` seconds.
    pub fn single(tween: Tween, delay: f64) -> Self {
        Self::new().at(delay, tween)
    }

    /// Initial values applied before any tween runs.
    pub fn set(mut self, target: ElementId, props: StyleProps) -> Self {
        self.sets.push((target, props));
        self.resolve_starts();
        self
    }

    /// Place `tween` at absolute position `at` (seconds).
    pub fn at(mut self, at: f64, tween: Tween) -> Self {
        let at = at.max(0.0);
        let index = self.entries.partition_point(|e| e.at <= at);
        self.entries.insert(index, Entry { at, tween });
        self.resolve_starts();
        self
    }

    /// Append `tween` after everything already on the timeline.
    pub fn then(self, tween: Tween) -> Self {
        let at = self.duration();
        self.at(at, tween)
    }

    pub fn duration(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.at + e.tween.duration)
            .fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.sets.is_empty()
    }

    /// Every element this timeline writes to, in first-use order.
    pub fn targets(&self) -> Vec<ElementId> {
        let mut seen = BTreeSet::new();
        self.sets
            .iter()
            .map(|(id, _)| *id)
            .chain(self.entries.iter().map(|e| e.tween.target))
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// The element a descriptor driving this timeline is keyed on.
    pub fn primary_target(&self) -> Option<ElementId> {
        self.entries
            .first()
            .map(|e| e.tween.target)
            .or_else(|| self.sets.first().map(|(id, _)| *id))
    }

    /// Style of every target at `time` seconds.
    pub fn sample(&self, time: f64) -> BTreeMap<ElementId, StyleProps> {
        self.evaluate(self.entries.len(), time, None)
    }

    /// `to` tweens start from whatever the earlier entries on the same target
    /// left behind at their start time. Resolved in one forward pass so
    /// sampling never has to look back.
    fn resolve_starts(&mut self) {
        self.starts.clear();
        for index in 0..self.entries.len() {
            let entry = &self.entries[index];
            let start = match &entry.tween.from {
                Some(from) => from.clone(),
                None => self
                    .evaluate(index, entry.at, Some(entry.tween.target))
                    .remove(&entry.tween.target)
                    .unwrap_or_default(),
            };
            self.starts.push(start);
        }
    }

    /// Evaluates the sets and the first `end` entries at `time`, optionally
    /// restricted to one target. Relies on `starts[..end]` being resolved.
    fn evaluate(&self, end: usize, time: f64, only: Option<ElementId>) -> BTreeMap<ElementId, StyleProps> {
        let wanted = |id: ElementId| only.map_or(true, |only| only == id);
        let mut out: BTreeMap<ElementId, StyleProps> = BTreeMap::new();
        for (target, props) in self.sets.iter().filter(|(id, _)| wanted(*id)) {
            out.entry(*target).or_default().overlay(props);
        }

        let mut driven: BTreeSet<(ElementId, Prop)> = BTreeSet::new();
        for (entry, start) in self.entries[..end].iter().zip(&self.starts) {
            let tween = &entry.tween;
            if !wanted(tween.target) {
                continue;
            }
            if time < entry.at {
                if let Some(from) = &tween.from {
                    let current = out.entry(tween.target).or_default();
                    for (prop, value) in from.iter() {
                        if driven.insert((tween.target, prop)) {
                            current.set(prop, value);
                        }
                    }
                }
                continue;
            }

            let local = if tween.duration <= 0.0 {
                1.0
            } else {
                (time - entry.at) / tween.duration
            };
            let value = StyleProps::interpolate(start, &tween.to, tween.ease.apply(local));
            out.entry(tween.target).or_default().overlay(&value);
            for prop in tween.to.props() {
                driven.insert((tween.target, prop));
            }
        }
        out
    }
}
