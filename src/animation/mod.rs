//! Tween, timeline and spring primitives shared by scroll-driven animations
//! and motion transitions.

pub mod easing;
pub mod props;
pub mod spring;
pub mod timeline;

pub use easing::Easing;
pub use props::{Prop, Rgba, Shadow, StyleProps, Value};
pub use spring::SpringConfig;
pub use timeline::{Timeline, Tween};
