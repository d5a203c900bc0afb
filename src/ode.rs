use nalgebra::DVector;

// ---------------------------------------------------------------------------
// First-order ODE system contract
// ---------------------------------------------------------------------------

/// An autonomous first-order ODE system dx/dt = f(x).
///
/// The integrators in [`crate::integrator`] work against this trait only,
/// so any system exposing a state length and a right-hand side can be
/// stepped with the same code — the bundled pendulum is just one
/// implementor.
pub trait OdeSystem {
    /// Number of state components.
    fn dim(&self) -> usize;

    /// Evaluate the right-hand side at `state`, writing into `deriv`.
    ///
    /// `state` may be any buffer of length `dim()`, not necessarily the
    /// system's own stored state — multi-stage methods evaluate at
    /// intermediate states. Must not mutate anything besides `deriv`.
    fn eval(&self, state: &DVector<f64>, deriv: &mut DVector<f64>);
}
