//! Scroll-triggered animation: position predicates, trigger descriptors, the
//! engine that maps scroll offsets onto timelines, and the hooks sections use
//! to register with it.

pub mod dom;
pub mod driver;
pub mod engine;
pub mod horizontal;
pub mod hooks;
pub mod lifecycle;
pub mod position;
pub mod surface;
pub mod trigger;

#[cfg(test)]
pub mod testing;

pub use driver::use_scroll_driver;
pub use engine::{ScrollEngine, ScrollObserver};
pub use horizontal::HorizontalStrip;
pub use hooks::{use_element, use_element_group, use_scroll_triggers, ScrollContext};
pub use lifecycle::{remount, teardown, Registrar};
pub use position::ScrollEnd;
pub use trigger::{ScrollTrigger, Snap, TriggerError, TriggerId};
