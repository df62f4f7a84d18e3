//! Declarative enter/exit, hover and tap transitions for page chrome.

pub mod component;
pub mod presence;
pub mod transition;

pub use component::Motion;
pub use presence::{use_presence, Presence};
pub use transition::Transition;
