//! Damped spring used to ease pointer-driven motion (cursor dot, card tilt).

/// Integration step; large frame gaps are split into steps of at most this.
const MAX_STEP_SECS: f64 = 1.0 / 240.0;
/// Longest frame the integrator will simulate.
const MAX_FRAME_SECS: f64 = 0.1;
const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.value).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advances by `dt` seconds and returns the new value. Snaps to the target
    /// once at rest.
    pub fn step(&mut self, dt: f64) -> f64 {
        if !(dt > 0.0) {
            return self.value;
        }
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        // A resumed background tab reports the whole pause as one frame.
        let mut remaining = dt.min(MAX_FRAME_SECS);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let force = -stiffness * (self.value - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_on_target() {
        let mut spring = Spring::new(SpringConfig::new(150.0, 15.0), 0.0);
        spring.set_target(0.5);
        for _ in 0..240 {
            spring.step(1.0 / 60.0);
        }
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 0.5);
    }

    #[test]
    fn stiff_spring_moves_toward_target_on_first_frame() {
        let mut spring = Spring::new(SpringConfig::new(700.0, 25.0), -100.0);
        spring.set_target(300.0);
        let v = spring.step(1.0 / 60.0);
        assert!(v > -100.0 && v < 300.0, "{v}");
    }

    #[test]
    fn long_pause_does_not_blow_up() {
        let mut spring = Spring::new(SpringConfig::new(700.0, 25.0), 0.0);
        spring.set_target(1000.0);
        let v = spring.step(5.0);
        assert!(v.is_finite());
        assert!(v > 0.0 && v < 1500.0, "{v}");
    }

    #[test]
    fn pause_longer_than_a_frame_is_clamped() {
        let config = SpringConfig::new(700.0, 25.0);
        let mut resumed = Spring::new(config, 0.0);
        let mut single = Spring::new(config, 0.0);
        resumed.set_target(1000.0);
        single.set_target(1000.0);
        assert_eq!(resumed.step(3600.0), single.step(MAX_FRAME_SECS));
    }

    #[test]
    fn non_positive_dt_is_ignored() {
        let mut spring = Spring::new(SpringConfig::new(150.0, 15.0), 0.2);
        spring.set_target(0.0);
        assert_eq!(spring.step(0.0), 0.2);
        assert_eq!(spring.step(f64::NAN), 0.2);
    }
}
