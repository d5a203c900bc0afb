pub mod integrator;
pub mod io;
pub mod ode;
pub mod pendulum;
pub mod sim;

// Flat re-exports of the core surface
pub use integrator::{euler_step, rk4_step};
pub use ode::OdeSystem;
pub use pendulum::Pendulum;
