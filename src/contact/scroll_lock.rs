use std::cell::Cell;
use std::rc::Rc;

use log::debug;

/// Whatever actually stops the page from scrolling.
pub trait OverflowTarget {
    fn suspend(&self);
    fn restore(&self);
}

/// `overflow: hidden` on the document body.
pub struct BodyOverflow;

impl OverflowTarget for BodyOverflow {
    fn suspend(&self) {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.style().set_property("overflow", "hidden");
        }
    }

    fn restore(&self) {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.style().remove_property("overflow");
        }
    }
}

struct Shared {
    holders: Cell<usize>,
    target: Box<dyn OverflowTarget>,
}

/// Reference-counted page scroll suspension. Scrolling resumes only when the
/// last guard is dropped.
#[derive(Clone)]
pub struct ScrollLock {
    shared: Rc<Shared>,
}

impl ScrollLock {
    pub fn new(target: Box<dyn OverflowTarget>) -> Self {
        Self {
            shared: Rc::new(Shared {
                holders: Cell::new(0),
                target,
            }),
        }
    }

    /// The lock shared by every modal on the page.
    pub fn page() -> Self {
        thread_local! {
            static PAGE: ScrollLock = ScrollLock::new(Box::new(BodyOverflow));
        }
        PAGE.with(ScrollLock::clone)
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.shared.holders.get() + 1;
        self.shared.holders.set(holders);
        if holders == 1 {
            debug!("page scroll suspended");
            self.shared.target.suspend();
        }
        ScrollLockGuard {
            shared: self.shared.clone(),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    pub fn holders(&self) -> usize {
        self.shared.holders.get()
    }
}

#[must_use = "scrolling resumes as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    shared: Rc<Shared>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let holders = self.shared.holders.get().saturating_sub(1);
        self.shared.holders.set(holders);
        if holders == 0 {
            debug!("page scroll restored");
            self.shared.target.restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Recorder {
        suspended: Rc<Cell<bool>>,
        toggles: Rc<Cell<usize>>,
    }

    impl OverflowTarget for Recorder {
        fn suspend(&self) {
            self.suspended.set(true);
            self.toggles.set(self.toggles.get() + 1);
        }

        fn restore(&self) {
            self.suspended.set(false);
            self.toggles.set(self.toggles.get() + 1);
        }
    }

    #[test]
    fn single_modal_locks_and_unlocks() {
        let recorder = Recorder::default();
        let lock = ScrollLock::new(Box::new(recorder.clone()));
        let guard = lock.acquire();
        assert!(lock.is_locked());
        assert!(recorder.suspended.get());
        drop(guard);
        assert!(!lock.is_locked());
        assert!(!recorder.suspended.get());
    }

    #[test]
    fn closing_one_of_two_modals_keeps_lock() {
        let recorder = Recorder::default();
        let lock = ScrollLock::new(Box::new(recorder.clone()));
        let header_modal = lock.acquire();
        let section_modal = lock.acquire();
        assert_eq!(lock.holders(), 2);

        drop(header_modal);
        assert!(lock.is_locked());
        assert!(recorder.suspended.get());

        drop(section_modal);
        assert!(!recorder.suspended.get());
        assert_eq!(recorder.toggles.get(), 2);
    }
}
