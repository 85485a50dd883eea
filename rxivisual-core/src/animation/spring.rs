//! Optional spring smoothing for the raw scroll signal.
//!
//! This stage sits upstream of the deck transform. The transform's contract is
//! defined on whatever progress it is handed; smoothing only changes which
//! progress values a host feeds it over time.

use crate::foundation::math::{finite_or, non_negative};

const MAX_SUBSTEP_SECS: f64 = 1.0 / 240.0;
const MAX_SUBSTEPS: u32 = 240;

/// Physical parameters of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringParams {
    /// Spring constant; higher pulls harder toward the target.
    pub stiffness: f64,
    /// Velocity damping coefficient.
    pub damping: f64,
    /// Simulated mass; must be > 0.
    pub mass: f64,
    /// Displacement and speed under which the spring snaps to rest.
    pub rest_delta: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.001,
        }
    }
}

/// Damped spring follower for scroll progress. The default parameters are
/// overdamped, so the position approaches the target without overshooting.
///
/// Integration uses fixed semi-implicit Euler sub-steps, so the same sequence
/// of `(target, dt)` calls always produces the same positions.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSpring {
    params: SpringParams,
    position: f64,
    velocity: f64,
}

impl ScrollSpring {
    pub fn new(params: SpringParams, initial: f64) -> Self {
        Self {
            params,
            position: finite_or(initial, 0.0),
            velocity: 0.0,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn is_at_rest(&self, target: f64) -> bool {
        let rest = non_negative(self.params.rest_delta);
        (self.position - target).abs() <= rest && self.velocity.abs() <= rest
    }

    /// Jump to `value` with zero velocity.
    pub fn snap_to(&mut self, value: f64) {
        self.position = finite_or(value, self.position);
        self.velocity = 0.0;
    }

    /// Advance the simulation by `dt_secs` toward `target` and return the new position.
    pub fn step(&mut self, target: f64, dt_secs: f64) -> f64 {
        let target = finite_or(target, self.position);
        let dt = non_negative(dt_secs);
        if dt == 0.0 {
            return self.position;
        }

        let k = non_negative(self.params.stiffness);
        let c = non_negative(self.params.damping);
        let m = finite_or(self.params.mass, 1.0).max(1e-6);

        let steps = ((dt / MAX_SUBSTEP_SECS).ceil() as u32).clamp(1, MAX_SUBSTEPS);
        let h = dt / f64::from(steps);
        for _ in 0..steps {
            let accel = (-k * (self.position - target) - c * self.velocity) / m;
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }

        if self.is_at_rest(target) {
            self.snap_to(target);
        }
        self.position
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
