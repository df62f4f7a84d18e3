use crate::animation::{Easing, SpringConfig};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    Tween(Easing),
    Spring(SpringConfig),
}

/// How a `Motion` element moves between visual states.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub delay: f64,
    pub duration: f64,
    pub curve: Curve,
}

impl Default for Transition {
    fn default() -> Self {
        Self::tween(0.3).ease(Easing::Power2Out)
    }
}

impl Transition {
    pub fn tween(duration: f64) -> Self {
        Self {
            delay: 0.0,
            duration,
            curve: Curve::Tween(Easing::Power2InOut),
        }
    }

    /// A spring runs for as long as it takes to settle.
    pub fn spring(stiffness: f64, damping: f64) -> Self {
        let config = SpringConfig::with(stiffness, damping);
        Self {
            delay: 0.0,
            duration: config.settle_time(),
            curve: Curve::Spring(config),
        }
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    pub fn ease(mut self, easing: Easing) -> Self {
        self.curve = Curve::Tween(easing);
        self
    }

    /// Seconds from the state change until the element comes to rest.
    pub fn total(&self) -> f64 {
        self.delay + self.duration
    }

    pub fn timing_function(&self) -> String {
        match self.curve {
            Curve::Tween(easing) => easing.css().to_string(),
            Curve::Spring(config) => config.css_easing(),
        }
    }

    /// `transition` declaration value.
    pub fn css(&self) -> String {
        format!(
            "all {}s {} {}s",
            seconds(self.duration),
            self.timing_function(),
            seconds(self.delay)
        )
    }

    /// Same curve with the delay dropped, for hover and tap feedback.
    pub fn immediate(&self) -> Self {
        Self { delay: 0.0, ..*self }
    }
}

fn seconds(v: f64) -> String {
    format!("{}", (v * 1000.0).round() / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_css() {
        let t = Transition::tween(0.5).delay(0.2).ease(Easing::Linear);
        assert_eq!(t.css(), "all 0.5s linear 0.2s");
        assert!((t.total() - 0.7).abs() < 1e-9);
        assert_eq!(t.immediate().css(), "all 0.5s linear 0s");
    }

    #[test]
    fn spring_lasts_until_settled() {
        let t = Transition::spring(200.0, 30.0);
        let config = SpringConfig::with(200.0, 30.0);
        assert_eq!(t.duration, config.settle_time());
        assert!(t.duration > 0.0 && t.duration < 3.0);
        assert!(t.css().starts_with("all "));
        assert!(t.timing_function().starts_with("linear(0.000"));
    }
}
