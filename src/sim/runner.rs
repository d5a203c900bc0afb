use crate::pendulum::Pendulum;

// ---------------------------------------------------------------------------
// Integration method selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Explicit Euler — first order, one evaluation per step.
    Euler,
    /// Classical Runge-Kutta — fourth order, four evaluations per step.
    RungeKutta4,
}

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub dt: f64,       // integration timestep, s
    pub duration: f64, // simulated time, s
    pub method: Method,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,       // 100 Hz
            duration: 10.0, // a handful of swings
            method: Method::RungeKutta4,
        }
    }
}

// ---------------------------------------------------------------------------
// Trajectory sample
// ---------------------------------------------------------------------------

/// Pendulum state snapshot at a single point in time.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub time: f64,             // s
    pub angle: f64,            // rad
    pub angular_velocity: f64, // rad/s
    pub energy: f64,           // J/kg
}

impl Sample {
    fn of(pendulum: &Pendulum, time: f64) -> Self {
        Sample {
            time,
            angle: pendulum.angle(),
            angular_velocity: pendulum.angular_velocity(),
            energy: pendulum.energy(),
        }
    }
}

// ---------------------------------------------------------------------------
// Fixed-step driving loop
// ---------------------------------------------------------------------------

/// Advance `pendulum` for `config.duration` seconds with the configured
/// method, recording one sample per step (plus the initial state).
pub fn simulate(pendulum: &mut Pendulum, config: &SimConfig) -> Vec<Sample> {
    let n_steps = (config.duration / config.dt) as usize;
    let mut trajectory = Vec::with_capacity(n_steps + 1);
    trajectory.push(Sample::of(pendulum, 0.0));

    for i in 1..=n_steps {
        match config.method {
            Method::Euler => pendulum.step(config.dt),
            Method::RungeKutta4 => pendulum.runge_kutta(config.dt),
        }
        trajectory.push(Sample::of(pendulum, i as f64 * config.dt));
    }

    trajectory
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_crossings(trajectory: &[Sample]) -> usize {
        trajectory
            .windows(2)
            .filter(|w| w[0].angle.signum() != w[1].angle.signum())
            .count()
    }

    #[test]
    fn trajectory_has_one_sample_per_step() {
        let mut p = Pendulum::new();
        let config = SimConfig::default();
        let traj = simulate(&mut p, &config);
        assert_eq!(traj.len(), 1001); // initial + 1000 steps
        assert_eq!(traj[0].time, 0.0);
        assert!((traj.last().unwrap().time - 10.0).abs() < 1e-9);
    }

    #[test]
    fn rk4_run_stays_inside_oscillation_envelope() {
        let mut p = Pendulum::new();
        let config = SimConfig::default();
        let traj = simulate(&mut p, &config);

        // Released from rest at 1 rad: |θ| can never exceed the release
        // angle, and |θ̇| is capped by the energy at the bottom of the arc,
        // θ̇² = 2g(1 - cos θ0)/L.
        let omega_max = (2.0 * p.gravity() * (1.0 - 1.0_f64.cos()) / p.length()).sqrt();
        for s in &traj {
            assert!(s.angle.abs() <= 1.0 + 1e-3, "θ escaped at t={:.2}", s.time);
            assert!(
                s.angular_velocity.abs() <= omega_max + 1e-3,
                "θ̇ escaped at t={:.2}",
                s.time
            );
        }
    }

    #[test]
    fn rk4_run_oscillates_at_the_pendulum_period() {
        let mut p = Pendulum::new();
        let config = SimConfig::default();
        let traj = simulate(&mut p, &config);

        // Large-amplitude period at 1 rad is ~2.24 s (small-angle 2.10 s
        // stretched by the elliptic correction), so 10 s holds ~9 zero
        // crossings of θ, one every half period.
        let crossings = zero_crossings(&traj);
        assert!(
            (7..=11).contains(&crossings),
            "Expected ~9 zero crossings in 10 s, got {}",
            crossings
        );
    }

    #[test]
    fn euler_and_rk4_agree_at_the_first_step() {
        // Both methods consume the same initial derivative; after a single
        // small step they should still be close.
        let mut pe = Pendulum::new();
        let mut pr = Pendulum::new();
        pe.step(0.001);
        pr.runge_kutta(0.001);
        assert!((pe.angle() - pr.angle()).abs() < 1e-5);
        assert!((pe.angular_velocity() - pr.angular_velocity()).abs() < 1e-4);
    }

    #[test]
    fn euler_trajectory_amplitude_grows() {
        let mut p = Pendulum::new();
        let config = SimConfig {
            method: Method::Euler,
            ..SimConfig::default()
        };
        let traj = simulate(&mut p, &config);

        // Energy pumped in by Euler shows up as a growing swing
        let late_max = traj[800..]
            .iter()
            .map(|s| s.angle.abs())
            .fold(0.0_f64, f64::max);
        assert!(
            late_max > 1.0,
            "Euler swing should exceed the release angle, got {:.3}",
            late_max
        );
    }
}
