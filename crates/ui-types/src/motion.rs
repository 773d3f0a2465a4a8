//! Animation curves used by the draggable panels.
//!
//! Time is measured in milliseconds on whatever monotonic-ish clock the
//! caller uses; only differences matter.

use std::collections::VecDeque;

/// Duration of the enter/exit tweens.
pub const PANEL_TWEEN_MS: f64 = 300.0;

/// Samples older than this are ignored when estimating release velocity.
pub const VELOCITY_WINDOW_MS: f64 = 100.0;

/// Upper bound on how long a spring may run before it is forced to rest.
const SPRING_MAX_MS: f64 = 10_000.0;

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

/// Fixed-duration interpolation between two offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Value at `now_ms` and whether the tween has finished.
    pub fn sample(&self, now_ms: f64) -> (f64, bool) {
        if self.duration_ms <= 0.0 {
            return (self.to, true);
        }
        let elapsed = (now_ms - self.start_ms).max(0.0);
        if elapsed >= self.duration_ms {
            return (self.to, true);
        }
        let eased = self.easing.apply(elapsed / self.duration_ms);
        (lerp(self.from, self.to, eased), false)
    }
}

/// Damped-spring parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target (px) below which the spring may rest.
    pub rest_delta: f64,
    /// Speed (px/s) below which the spring may rest.
    pub rest_speed: f64,
}

impl Spring {
    /// Snap-back used when a released drag does not dismiss its panel.
    pub const SNAP_BACK: Spring = Spring {
        stiffness: 300.0,
        damping: 40.0,
        mass: 1.0,
        rest_delta: 0.5,
        rest_speed: 10.0,
    };

    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::SNAP_BACK
    }
}

/// A spring released at `from` with an initial velocity, settling on `to`.
///
/// Uses the closed-form solution of the damped harmonic oscillator so the
/// value at any instant is independent of frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringMotion {
    pub spring: Spring,
    pub from: f64,
    pub to: f64,
    /// Initial velocity in px/s.
    pub velocity: f64,
    pub start_ms: f64,
}

impl SpringMotion {
    /// `velocity_px_per_ms` is the pointer velocity at release.
    pub fn new(spring: Spring, from: f64, to: f64, velocity_px_per_ms: f64, start_ms: f64) -> Self {
        Self {
            spring,
            from,
            to,
            velocity: velocity_px_per_ms * 1000.0,
            start_ms,
        }
    }

    /// Displacement from the target and its velocity (px/s) `t` seconds in.
    fn state_at(&self, t: f64) -> (f64, f64) {
        let x0 = self.from - self.to;
        let v0 = self.velocity;
        let omega = self.spring.natural_frequency();
        let zeta = self.spring.damping_ratio();

        if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let a = x0;
            let b = (v0 + zeta * omega * x0) / omega_d;
            let decay = (-zeta * omega * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            let x = decay * (a * cos + b * sin);
            let v = decay * ((-zeta * omega * a + omega_d * b) * cos + (-zeta * omega * b - omega_d * a) * sin);
            (x, v)
        } else if (zeta - 1.0).abs() < 1e-9 {
            let a = x0;
            let b = v0 + omega * x0;
            let decay = (-omega * t).exp();
            let x = decay * (a + b * t);
            let v = decay * (b - omega * (a + b * t));
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c1 = (v0 - r2 * x0) / (r1 - r2);
            let c2 = x0 - c1;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
        }
    }

    /// Value at `now_ms` and whether the spring has come to rest.
    pub fn sample(&self, now_ms: f64) -> (f64, bool) {
        let elapsed_ms = (now_ms - self.start_ms).max(0.0);
        if elapsed_ms >= SPRING_MAX_MS {
            return (self.to, true);
        }
        let (x, v) = self.state_at(elapsed_ms / 1000.0);
        if x.abs() < self.spring.rest_delta && v.abs() < self.spring.rest_speed {
            return (self.to, true);
        }
        (self.to + x, false)
    }
}

/// Estimates pointer velocity from recent samples along one axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VelocityTracker {
    samples: VecDeque<(f64, f64)>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn push(&mut self, time_ms: f64, position: f64) {
        self.samples.push_back((time_ms, position));
        while let Some(&(t, _)) = self.samples.front() {
            if time_ms - t > VELOCITY_WINDOW_MS {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Velocity in px/ms across the retained window; zero with fewer than two samples.
    pub fn velocity(&self) -> f64 {
        match (self.samples.front(), self.samples.back()) {
            (Some(&(t0, p0)), Some(&(t1, p1))) if t1 > t0 => (p1 - p0) / (t1 - t0),
            _ => 0.0,
        }
    }
}
