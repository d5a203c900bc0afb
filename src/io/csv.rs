use std::io::{self, Write};

use crate::sim::Sample;

/// Write trajectory data to CSV format.
///
/// Columns: time, angle, angular_velocity, energy
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &[Sample]) -> io::Result<()> {
    writeln!(writer, "time,angle,angular_velocity,energy")?;

    for s in trajectory {
        writeln!(
            writer,
            "{:.4},{:.6},{:.6},{:.6}",
            s.time, s.angle, s.angular_velocity, s.energy,
        )?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, trajectory: &[Sample]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_output_has_header_and_rows() {
        let traj = vec![
            Sample {
                time: 0.0,
                angle: 1.0,
                angular_velocity: 0.0,
                energy: 4.9629,
            },
            Sample {
                time: 0.01,
                angle: 0.9996,
                angular_velocity: -0.0750,
                energy: 4.9629,
            },
        ];

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &traj).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("time,"));
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("0.0000,"));
    }
}
