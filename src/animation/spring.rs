//! Spring physics for motion transitions.
//!
//! Springs are integrated with RK4 ahead of time and turned into a duration
//! plus a sampled CSS `linear()` easing curve, so the browser plays them as
//! ordinary transitions.

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Stiffness and damping with unit mass.
    pub fn with(stiffness: f64, damping: f64) -> Self {
        Self::new(stiffness, damping, 1.0)
    }

    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    /// Seconds until a unit step settles, capped at `MAX_SETTLE`.
    pub fn settle_time(&self) -> f64 {
        let mut spring = Spring::new(*self, 0.0);
        spring.set_target(1.0);
        let mut elapsed = 0.0;
        while !spring.is_settled() && elapsed < MAX_SETTLE {
            spring.step(STEP);
            elapsed += STEP;
        }
        elapsed
    }

    /// Unit-step response sampled at `points` evenly spaced instants over
    /// the settle time.
    pub fn samples(&self, points: usize) -> Vec<f64> {
        let points = points.max(2);
        let total = self.settle_time();
        let mut spring = Spring::new(*self, 0.0);
        spring.set_target(1.0);
        let mut out = Vec::with_capacity(points);
        let mut elapsed = 0.0;
        for i in 0..points {
            let at = total * i as f64 / (points - 1) as f64;
            while elapsed + STEP <= at {
                spring.step(STEP);
                elapsed += STEP;
            }
            out.push(spring.value());
        }
        if let Some(last) = out.last_mut() {
            *last = 1.0;
        }
        out
    }

    /// CSS `linear()` timing function reproducing the spring response.
    pub fn css_easing(&self) -> String {
        let stops = self
            .samples(24)
            .into_iter()
            .map(|v| format!("{:.3}", v))
            .collect::<Vec<_>>()
            .join(", ");
        format!("linear({})", stops)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::with(100.0, 10.0)
    }
}

const STEP: f64 = 1.0 / 240.0;
const MAX_SETTLE: f64 = 3.0;

#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Within a thousandth of the target and nearly at rest.
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < 1e-3 && self.velocity.abs() < 1e-2
    }

    /// Advance by `dt` seconds using RK4 integration.
    pub fn step(&mut self, dt: f64) {
        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(self.value + k1_x * dt * 0.5, self.velocity + k1_v * dt * 0.5);
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(self.value + k2_x * dt * 0.5, self.velocity + k2_v * dt * 0.5);
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f64, v: f64) -> f64 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_converges_to_target() {
        let mut spring = Spring::new(SpringConfig::with(200.0, 30.0), 0.0);
        spring.set_target(1.0);
        for _ in 0..2400 {
            spring.step(STEP);
        }
        assert!(spring.is_settled());
        assert!((spring.value() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn stiffer_springs_settle_faster() {
        let soft = SpringConfig::with(40.0, 25.0).settle_time();
        let stiff = SpringConfig::with(200.0, 30.0).settle_time();
        assert!(stiff < soft, "stiff {} soft {}", stiff, soft);
        assert!(soft <= MAX_SETTLE + STEP);
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let config = SpringConfig::with(100.0, 5.0);
        assert!(config.is_underdamped());
        assert!(config.samples(64).iter().any(|v| *v > 1.0));
    }

    #[test]
    fn css_easing_starts_at_zero_and_ends_at_one() {
        let css = SpringConfig::with(100.0, 25.0).css_easing();
        assert!(css.starts_with("linear(0.000, "));
        assert!(css.ends_with(", 1.000)"));
    }
}
