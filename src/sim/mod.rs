pub mod runner;

pub use runner::{simulate, Method, Sample, SimConfig};
