use nalgebra::DVector;

use crate::ode::OdeSystem;

// ---------------------------------------------------------------------------
// Fixed-step explicit integrators
// ---------------------------------------------------------------------------
// Both methods work on any `OdeSystem`, whatever its state length. Neither
// validates `dt`: zero makes no progress, negative steps backward in time,
// and non-finite values propagate into the returned state.

/// Single explicit Euler step: `x + f(x) · dt`.
///
/// One derivative evaluation per call. Global error O(dt) — use for speed
/// or comparison, not accuracy.
pub fn euler_step<S: OdeSystem + ?Sized>(system: &S, x: &DVector<f64>, dt: f64) -> DVector<f64> {
    let mut f = DVector::zeros(system.dim());
    system.eval(x, &mut f);
    x + f * dt
}

/// Single classical 4th-order Runge-Kutta step.
///
/// Four derivative evaluations at staggered intermediate states; the state
/// is only updated by the final weighted combination. Local truncation
/// error O(dt^5).
pub fn rk4_step<S: OdeSystem + ?Sized>(system: &S, x: &DVector<f64>, dt: f64) -> DVector<f64> {
    let n = system.dim();
    let mut k1 = DVector::zeros(n);
    let mut k2 = DVector::zeros(n);
    let mut k3 = DVector::zeros(n);
    let mut k4 = DVector::zeros(n);

    system.eval(x, &mut k1);
    system.eval(&(x + &k1 * (dt * 0.5)), &mut k2);
    system.eval(&(x + &k2 * (dt * 0.5)), &mut k3);
    system.eval(&(x + &k3 * dt), &mut k4);

    x + (k1 + 2.0 * k2 + 2.0 * k3 + k4) * (dt / 6.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
