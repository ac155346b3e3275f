// Adapters layer: concrete device classes behind the domain ports

pub mod simulator;

pub use simulator::{SimulatedDevice, SimulatorOptions};
