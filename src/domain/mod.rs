// Domain layer: vendor-neutral model and the device-class ports.

pub mod capabilities;
pub mod model;
pub mod ports;
pub mod status;
