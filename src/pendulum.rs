use nalgebra::DVector;

use crate::integrator::{euler_step, rk4_step};
use crate::ode::OdeSystem;

// ---------------------------------------------------------------------------
// Default physical parameters and initial conditions
// ---------------------------------------------------------------------------

pub const DEFAULT_LENGTH: f64 = 1.1; // m
pub const DEFAULT_GRAVITY: f64 = 9.81; // m/s^2
pub const DEFAULT_ANGLE: f64 = 1.0; // rad from vertical
pub const DEFAULT_ANGULAR_VELOCITY: f64 = 0.0; // rad/s

/// Number of state components: angle, angular velocity.
const N: usize = 2;

// ---------------------------------------------------------------------------
// Simple pendulum entity
// ---------------------------------------------------------------------------

/// A point mass on a rigid massless rod of length `len` in a uniform
/// gravitational field.
///
/// State vector: `[θ, θ̇]` with θ measured from the stable (hanging)
/// equilibrium. Equations of motion:
///
/// ```text
/// dθ/dt  = θ̇
/// dθ̇/dt = -(g/L) · sin θ
/// ```
#[derive(Debug, Clone)]
pub struct Pendulum {
    len: f64,     // m, invariant: > 0
    gravity: f64, // m/s^2, invariant: >= 0
    x: DVector<f64>,
}

impl Pendulum {
    /// Pendulum with default parameters, displaced 1 rad and at rest.
    pub fn new() -> Self {
        Pendulum {
            len: DEFAULT_LENGTH,
            gravity: DEFAULT_GRAVITY,
            x: DVector::from_vec(vec![DEFAULT_ANGLE, DEFAULT_ANGULAR_VELOCITY]),
        }
    }

    // -----------------------------------------------------------------------
    // Stepping
    // -----------------------------------------------------------------------

    /// Advance the state in place by one explicit Euler step.
    ///
    /// First-order: cheap, but energy drifts visibly over long runs.
    /// Prefer [`Pendulum::runge_kutta`] for anything beyond quick looks.
    pub fn step(&mut self, dt: f64) {
        self.x = euler_step(self, &self.x, dt);
    }

    /// Advance the state in place by one classical RK4 step.
    pub fn runge_kutta(&mut self, dt: f64) {
        self.x = rk4_step(self, &self.x, dt);
    }

    // -----------------------------------------------------------------------
    // Parameter accessors (guarded)
    // -----------------------------------------------------------------------

    /// Rod length, m.
    pub fn length(&self) -> f64 {
        self.len
    }

    /// Set rod length. Values <= 0 are ignored and the prior length kept.
    pub fn set_length(&mut self, len: f64) {
        if len > 0.0 {
            self.len = len;
        }
    }

    /// Gravitational field strength, m/s^2.
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Set gravity. Negative values are ignored and the prior value kept.
    pub fn set_gravity(&mut self, gravity: f64) {
        if gravity >= 0.0 {
            self.gravity = gravity;
        }
    }

    // -----------------------------------------------------------------------
    // State accessors (unguarded)
    // -----------------------------------------------------------------------

    /// Angle from vertical, rad.
    pub fn angle(&self) -> f64 {
        self.x[0]
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.x[0] = angle;
    }

    /// Angular velocity, rad/s.
    pub fn angular_velocity(&self) -> f64 {
        self.x[1]
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: f64) {
        self.x[1] = angular_velocity;
    }

    /// Shared view of the full state vector `[θ, θ̇]`.
    pub fn state(&self) -> &DVector<f64> {
        &self.x
    }

    // -----------------------------------------------------------------------
    // Derived quantities
    // -----------------------------------------------------------------------

    /// Total mechanical energy per unit mass: `0.5·L²·θ̇² + g·L·(1 − cos θ)`.
    ///
    /// Conserved by the exact dynamics; its drift under a numerical method
    /// measures that method's accuracy.
    pub fn energy(&self) -> f64 {
        let (theta, omega) = (self.x[0], self.x[1]);
        0.5 * self.len * self.len * omega * omega
            + self.gravity * self.len * (1.0 - theta.cos())
    }

    /// Small-angle oscillation period: `2π·sqrt(L/g)`, s.
    pub fn small_angle_period(&self) -> f64 {
        2.0 * std::f64::consts::PI * (self.len / self.gravity).sqrt()
    }
}

impl Default for Pendulum {
    fn default() -> Self {
        Pendulum::new()
    }
}

impl OdeSystem for Pendulum {
    fn dim(&self) -> usize {
        N
    }

    fn eval(&self, state: &DVector<f64>, deriv: &mut DVector<f64>) {
        deriv[0] = state[1];
        deriv[1] = -(self.gravity / self.len) * state[0].sin();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
