//! Command handlers: validate the payload, call one device method, build the completion.

pub mod card_reader;
pub mod cash_dispenser;
pub mod check;
pub mod common;
pub mod printer;
pub mod service_publisher;
pub mod text_terminal;
pub mod vendor_application;

use crate::core::common_service::CommonService;
use crate::domain::model::DeviceResult;
use crate::domain::ports::{Device, DispenseEvents};
use crate::messages::cash_dispenser::DelayedDispenseEvent;
use crate::messages::{Completion, Envelope};
use crate::transport::connection::Connection;
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub const DELAYED_DISPENSE_EVENT: &str = "CashDispenser.DelayedDispenseEvent";

/// Service-wide state every handler can reach.
pub struct ServiceContext {
    pub common: Arc<CommonService>,
    pub service_uris: Vec<String>,
    pub vendor_name: Option<String>,
}

/// One command being executed.
pub struct CommandContext {
    pub service: Arc<ServiceContext>,
    pub connection: Arc<Connection>,
    pub request_id: i64,
    pub cancel: CancellationToken,
}

impl CommandContext {
    pub fn common(&self) -> &CommonService {
        &self.service.common
    }

    pub fn device(&self) -> &dyn Device {
        self.service.common.device().as_ref()
    }

    /// Intermediate event for this command.
    pub fn send_event<T: Serialize>(&self, name: &str, payload: &T) -> Result<()> {
        let envelope = Envelope::event(name, self.request_id, serde_json::to_value(payload)?)
            .with_version(self.common().registry().version_of(name));
        self.connection.send(envelope)
    }
}

#[async_trait]
impl DispenseEvents for CommandContext {
    async fn delayed_dispense(&self, delay_ms: u32) -> Result<()> {
        self.send_event(DELAYED_DISPENSE_EVENT, &DelayedDispenseEvent { delay: delay_ms })
    }
}

#[async_trait]
pub trait CommandHandler: Send + Sync + 'static {
    const NAME: &'static str;
    type Command: DeserializeOwned + Send;
    type Completion: Serialize + Send;

    async fn handle(&self, ctx: &CommandContext, command: Self::Command) -> Result<Completion<Self::Completion>>;
}

/// Type-erased handler stored in the dispatch table.
#[async_trait]
pub trait ErasedHandler: Send + Sync {
    fn name(&self) -> &'static str;

    async fn call(&self, ctx: &CommandContext, payload: Option<Value>) -> Result<Value>;
}

struct Erased<H>(H);

#[async_trait]
impl<H: CommandHandler> ErasedHandler for Erased<H> {
    fn name(&self) -> &'static str {
        H::NAME
    }

    async fn call(&self, ctx: &CommandContext, payload: Option<Value>) -> Result<Value> {
        let payload = payload.unwrap_or_else(|| Value::Object(Default::default()));
        let command: H::Command = serde_json::from_value(payload)
            .map_err(|e| ServiceError::invalid_data(format!("Invalid {} payload. {}", H::NAME, e)))?;
        let completion = self.0.handle(ctx, command).await?;
        Ok(serde_json::to_value(completion)?)
    }
}

pub struct HandlerTable {
    handlers: HashMap<&'static str, Box<dyn ErasedHandler>>,
}

impl HandlerTable {
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register<H: CommandHandler>(&mut self, handler: H) {
        self.handlers.insert(H::NAME, Box::new(Erased(handler)));
    }

    pub fn get(&self, name: &str) -> Option<&dyn ErasedHandler> {
        self.handlers.get(name).map(|h| h.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }
}

impl Default for HandlerTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.register(common::Capabilities);
        table.register(common::Status);
        table.register(common::GetTransactionState);
        table.register(common::SetTransactionState);
        table.register(common::Cancel);
        table.register(common::PowerSaveControl);
        table.register(card_reader::ResetCount);
        table.register(card_reader::SetKey);
        table.register(cash_dispenser::Count);
        table.register(cash_dispenser::GetMixTypes);
        table.register(cash_dispenser::Dispense);
        table.register(printer::RetractMedia);
        table.register(text_terminal::Reset);
        table.register(vendor_application::StartLocalApplication);
        table.register(check::MediaInEnd);
        table.register(check::SupplyReplenish);
        table.register(service_publisher::GetServices);
        table
    }
}

pub(crate) fn log_call(name: &str, request_id: i64) {
    debug!("[{}] 呼叫 device: {}", request_id, name);
}

pub(crate) fn log_result<T, E: Debug>(name: &str, request_id: i64, result: &DeviceResult<T, E>) {
    debug!(
        "[{}] {} 完成: {:?} {:?} {}",
        request_id,
        name,
        result.completion_code,
        result.error_code,
        result.error_description.as_deref().unwrap_or("")
    );
}

/// Interface is declared by the device but its device class is missing.
pub(crate) fn not_implemented(interface: &str) -> ServiceError {
    ServiceError::unsupported_command(format!("The device class does not implement {}.", interface))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::MessageRegistry;

    #[test]
    fn test_every_registered_command_has_a_handler() {
        let table = HandlerTable::default();
        let registry = MessageRegistry::new();
        for message in registry.iter().filter(|m| registry.is_command(m.name)) {
            assert!(table.get(message.name).is_some(), "{}", message.name);
        }
        for name in table.names() {
            assert!(registry.is_command(name), "{}", name);
        }
    }
}
