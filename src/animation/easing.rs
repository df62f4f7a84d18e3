//! Easing curves used by tweens and motion transitions.

/// Named easing curves. `Linear` is the "none" ease used by scrubbed tweens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Tween default.
    #[default]
    Power1Out,
    Power1InOut,
    Power2Out,
    Power2InOut,
    Power3Out,
    Power3InOut,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress. Input is clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power1Out => 1.0 - (1.0 - t).powi(2),
            Easing::Power1InOut => in_out(t, 2),
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power2InOut => in_out(t, 3),
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
            Easing::Power3InOut => in_out(t, 4),
        }
    }

    /// CSS `transition-timing-function` approximating this curve.
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Power1Out => "cubic-bezier(0.5, 1, 0.89, 1)",
            Easing::Power1InOut => "cubic-bezier(0.45, 0, 0.55, 1)",
            Easing::Power2Out => "cubic-bezier(0.33, 1, 0.68, 1)",
            Easing::Power2InOut => "cubic-bezier(0.65, 0, 0.35, 1)",
            Easing::Power3Out => "cubic-bezier(0.25, 1, 0.5, 1)",
            Easing::Power3InOut => "cubic-bezier(0.76, 0, 0.24, 1)",
        }
    }
}

fn in_out(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        (2.0 * t).powi(power) / 2.0
    } else {
        1.0 - (2.0 * (1.0 - t)).powi(power) / 2.0
    }
}
