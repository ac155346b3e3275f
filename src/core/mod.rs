// Core layer: status cache, message discovery, command dispatch

pub mod capability_mapping;
pub mod common_service;
pub mod discovery;
pub mod dispatcher;
pub mod handlers;
pub mod notifier;
pub mod registry;
pub mod service;
pub mod status_mapping;

pub use crate::domain::ports::{ConfigProvider, Device};
pub use crate::utils::error::Result;
pub use common_service::CommonService;
pub use dispatcher::Dispatcher;
pub use service::ServiceProvider;
