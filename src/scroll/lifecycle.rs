//! Owner-scoped registration: a section tears down everything it registered
//! before registering again, and on unmount.

use log::{debug, warn};

use super::engine::ScrollObserver;
use super::trigger::{ScrollTrigger, TriggerError, TriggerId};
use crate::element::ElementId;

/// Registers descriptors on behalf of one owner.
pub struct Registrar<'a> {
    observer: &'a mut dyn ScrollObserver,
    owner: ElementId,
    registered: usize,
    skipped: usize,
}

impl<'a> Registrar<'a> {
    pub fn new(observer: &'a mut dyn ScrollObserver, owner: ElementId) -> Self {
        Self {
            observer,
            owner,
            registered: 0,
            skipped: 0,
        }
    }

    pub fn owner(&self) -> ElementId {
        self.owner
    }

    /// Registers `trigger` under this owner. A descriptor that failed to
    /// build is logged and skipped so the rest of the section still animates.
    pub fn add(&mut self, trigger: Result<ScrollTrigger, TriggerError>) -> Option<TriggerId> {
        match trigger {
            Ok(mut trigger) => {
                trigger.owner = self.owner;
                self.registered += 1;
                Some(self.observer.observe(trigger))
            }
            Err(e) => {
                warn!("skipping scroll trigger owned by {}: {}", self.owner, e);
                self.skipped += 1;
                None
            }
        }
    }

    pub fn registered(&self) -> usize {
        self.registered
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Kills every descriptor `owner` holds, then runs `register` against a
/// fresh registrar. Returns how many descriptors are live afterwards.
pub fn remount<F>(observer: &mut dyn ScrollObserver, owner: ElementId, register: F) -> usize
where
    F: FnOnce(&mut Registrar<'_>),
{
    let removed = observer.unobserve_owner(owner);
    let mut registrar = Registrar::new(observer, owner);
    register(&mut registrar);
    debug!(
        "{}: removed {} scroll triggers, registered {}, skipped {}",
        owner,
        removed,
        registrar.registered(),
        registrar.skipped()
    );
    observer.observed_by(owner)
}

/// Unmount: leaves `owner` with no live descriptors.
pub fn teardown(observer: &mut dyn ScrollObserver, owner: ElementId) -> usize {
    observer.unobserve_owner(owner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{StyleProps, Timeline, Tween};
    use crate::scroll::engine::ScrollEngine;

    fn reveal(section: ElementId, target: ElementId) -> Result<ScrollTrigger, TriggerError> {
        ScrollTrigger::builder(section)
            .start("top 80%")
            .animate(Timeline::single(Tween::to(target, StyleProps::new().opacity(1.0)), 0.0))
            .build()
    }

    #[test]
    fn remount_never_duplicates() {
        let mut engine = ScrollEngine::new();
        let section = ElementId::fresh();
        let title = ElementId::fresh();
        let line = ElementId::fresh();
        for _ in 0..3 {
            let live = remount(&mut engine, section, |r| {
                r.add(reveal(section, title));
                r.add(reveal(section, line));
            });
            assert_eq!(live, 2);
        }
        assert_eq!(engine.len(), 2);
        assert_eq!(teardown(&mut engine, section), 2);
        assert_eq!(engine.observed_by(section), 0);
    }

    #[test]
    fn bad_descriptor_is_skipped_not_fatal() {
        let mut engine = ScrollEngine::new();
        let section = ElementId::fresh();
        let title = ElementId::fresh();
        let live = remount(&mut engine, section, |r| {
            let broken = ScrollTrigger::builder(section)
                .start("top sideways")
                .animate(Timeline::single(Tween::to(title, StyleProps::new().y(0.0)), 0.0))
                .build();
            assert!(r.add(broken).is_none());
            assert!(r.add(reveal(section, title)).is_some());
            assert_eq!(r.skipped(), 1);
        });
        assert_eq!(live, 1);
    }

    #[test]
    fn registrar_stamps_owner() {
        let mut engine = ScrollEngine::new();
        let section = ElementId::fresh();
        let panel = ElementId::fresh();
        remount(&mut engine, section, |r| {
            r.add(reveal(panel, ElementId::fresh()));
        });
        assert_eq!(engine.observed_by(section), 1);
        assert_eq!(engine.observed_by(panel), 0);
    }
}
