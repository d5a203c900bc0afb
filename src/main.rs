use pendulum_sim::io::csv;
use pendulum_sim::pendulum::Pendulum;
use pendulum_sim::sim::{simulate, Method, Sample, SimConfig};

fn main() {
    // -----------------------------------------------------------------------
    // Entity: simple pendulum released from rest at 1 rad
    // -----------------------------------------------------------------------
    let mut pendulum = Pendulum::new();

    let config = SimConfig {
        dt: 0.01,
        duration: 10.0,
        method: Method::RungeKutta4,
    };

    // -----------------------------------------------------------------------
    // Run simulation (RK4, plus an Euler run for comparison)
    // -----------------------------------------------------------------------
    let trajectory = simulate(&mut pendulum, &config);

    let mut euler_pendulum = Pendulum::new();
    let euler_config = SimConfig {
        method: Method::Euler,
        ..config.clone()
    };
    let euler_trajectory = simulate(&mut euler_pendulum, &euler_config);

    // -----------------------------------------------------------------------
    // Analyze trajectory
    // -----------------------------------------------------------------------
    let amplitude = trajectory
        .iter()
        .map(|s| s.angle.abs())
        .fold(0.0_f64, f64::max);

    let max_rate = trajectory
        .iter()
        .map(|s| s.angular_velocity.abs())
        .fold(0.0_f64, f64::max);

    let measured_period = measure_period(&trajectory);
    let rk4_drift = energy_drift(&trajectory);
    let euler_drift = energy_drift(&euler_trajectory);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  SIMPLE PENDULUM SIMULATION");
    println!("====================================================================");
    println!();
    println!("  Pendulum Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Length:        {:>8.2} m     Gravity:      {:>8.2} m/s^2",
        pendulum.length(),
        pendulum.gravity()
    );
    println!(
        "  Release angle: {:>8.2} rad   Small-angle T:{:>8.3} s",
        trajectory[0].angle,
        pendulum.small_angle_period()
    );
    println!();

    println!("  Trajectory ({} steps at dt = {} s)", trajectory.len() - 1, config.dt);
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Amplitude:     {:>8.3} rad   Max rate:     {:>8.3} rad/s",
        amplitude, max_rate
    );
    match measured_period {
        Some(period) => println!("  Measured T:    {:>8.3} s", period),
        None => println!("  Measured T:         n/a (fewer than two full swings)"),
    }
    println!();

    println!("  Energy Drift over {} s", config.duration);
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  RK4:           {:>12.6} %", rk4_drift * 100.0);
    println!("  Euler:         {:>12.6} %", euler_drift * 100.0);
    println!();

    // -----------------------------------------------------------------------
    // Optional CSV export: pendulum-sim <path>
    // -----------------------------------------------------------------------
    if let Some(path) = std::env::args().nth(1) {
        match csv::write_trajectory_file(&path, &trajectory) {
            Ok(()) => println!("  Trajectory written to {}", path),
            Err(e) => eprintln!("  Failed to write {}: {}", path, e),
        }
        println!();
    }
}

/// Mean time between zero crossings of θ, doubled — the oscillation period.
fn measure_period(trajectory: &[Sample]) -> Option<f64> {
    let crossings: Vec<f64> = trajectory
        .windows(2)
        .filter(|w| w[0].angle.signum() != w[1].angle.signum())
        .map(|w| w[0].time)
        .collect();

    if crossings.len() < 2 {
        return None;
    }
    let spacing = (crossings.last().unwrap() - crossings[0]) / (crossings.len() - 1) as f64;
    Some(2.0 * spacing)
}

/// Relative energy change from the first to the last sample.
fn energy_drift(trajectory: &[Sample]) -> f64 {
    let e0 = trajectory[0].energy;
    (trajectory.last().unwrap().energy - e0) / e0
}
