pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod messages;
pub mod transport;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{SimulatedDevice, SimulatorOptions};
pub use config::ServiceConfig;
pub use core::{CommonService, Dispatcher, ServiceProvider};
pub use transport::{Connection, Server};
pub use utils::error::{Result, ServiceError};
