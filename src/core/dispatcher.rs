//! Inbound frame → acknowledge → handler task → completion.

use crate::core::handlers::{CommandContext, HandlerTable, ServiceContext};
use crate::messages::{AcknowledgeStatus, Completion, CompletionCode, Envelope, MessageKind, NoPayload};
use crate::transport::connection::Connection;
use crate::utils::error::ServiceError;
use futures_util::FutureExt;
use serde_json::Value;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

const CANCEL_COMMAND: &str = "Common.Cancel";

pub struct Dispatcher {
    service: Arc<ServiceContext>,
    handlers: Arc<HandlerTable>,
    max_in_flight: usize,
    default_timeout_ms: u64,
}

impl Dispatcher {
    pub fn new(service: Arc<ServiceContext>, handlers: HandlerTable, max_in_flight: usize, default_timeout_ms: u64) -> Self {
        Self {
            service,
            handlers: Arc::new(handlers),
            max_in_flight,
            default_timeout_ms,
        }
    }

    fn reject(connection: &Connection, name: &str, request_id: i64, status: AcknowledgeStatus, reason: String) {
        warn!("拒絕 {} [{}]: {:?} {}", name, request_id, status, reason);
        if let Err(e) = connection.send(Envelope::acknowledge(name, request_id, status, Some(reason))) {
            debug!("acknowledge 送不出去: {}", e);
        }
    }

    /// Handles one text frame. The acknowledge is queued before this returns;
    /// the command itself runs on its own task.
    pub fn dispatch(&self, connection: &Arc<Connection>, text: &str) {
        let envelope: Envelope = match serde_json::from_str(text) {
            Ok(envelope) => envelope,
            Err(e) => {
                // header 壞掉時盡量撈出 name 與 requestId
                let raw: Option<Value> = serde_json::from_str(text).ok();
                let name = raw
                    .as_ref()
                    .and_then(|v| v["header"]["name"].as_str())
                    .unwrap_or("")
                    .to_string();
                let request_id = raw
                    .as_ref()
                    .and_then(|v| v["header"]["requestId"].as_i64())
                    .filter(|id| *id > 0)
                    .unwrap_or(0);
                Self::reject(
                    connection,
                    &name,
                    request_id,
                    AcknowledgeStatus::InvalidMessage,
                    format!("Invalid message. {}", e),
                );
                return;
            }
        };

        let name = envelope.name().to_string();
        let request_id = match envelope.request_id() {
            Some(id) if id > 0 => id,
            _ => {
                Self::reject(
                    connection,
                    &name,
                    0,
                    AcknowledgeStatus::InvalidMessage,
                    "Missing or invalid requestId.".to_string(),
                );
                return;
            }
        };
        if envelope.kind() != MessageKind::Command {
            Self::reject(
                connection,
                &name,
                request_id,
                AcknowledgeStatus::InvalidMessage,
                format!("Unexpected message type {:?}.", envelope.kind()),
            );
            return;
        }
        if self.handlers.get(&name).is_none() {
            Self::reject(
                connection,
                &name,
                request_id,
                AcknowledgeStatus::InvalidMessage,
                format!("Unknown command {}.", name),
            );
            return;
        }

        let limit = (name != CANCEL_COMMAND).then_some(self.max_in_flight);
        let cancel = match connection.begin(request_id, limit) {
            Ok(token) => token,
            Err(status) => {
                let reason = match status {
                    AcknowledgeStatus::InvalidRequestId => format!("Request {} is already in progress.", request_id),
                    _ => format!("More than {} commands in progress.", self.max_in_flight),
                };
                Self::reject(connection, &name, request_id, status, reason);
                return;
            }
        };

        if let Err(e) = connection.send(Envelope::acknowledge(&name, request_id, AcknowledgeStatus::Ok, None)) {
            debug!("acknowledge 送不出去: {}", e);
            connection.end(request_id);
            return;
        }

        let timeout_ms = envelope
            .header
            .timeout
            .filter(|t| *t > 0)
            .or((self.default_timeout_ms > 0).then_some(self.default_timeout_ms));
        let ctx = CommandContext {
            service: Arc::clone(&self.service),
            connection: Arc::clone(connection),
            request_id,
            cancel,
        };
        let handlers = Arc::clone(&self.handlers);
        tokio::spawn(async move {
            let completion = run(&handlers, &ctx, &name, envelope.payload, timeout_ms).await;
            ctx.connection.end(request_id);
            let version = ctx.common().registry().version_of(&name);
            let message = Envelope::completion(&name, request_id, completion).with_version(version);
            if let Err(e) = ctx.connection.send(message) {
                debug!("[{}] completion 送不出去: {}", request_id, e);
            }
        });
    }
}

async fn run(handlers: &HandlerTable, ctx: &CommandContext, name: &str, payload: Option<Value>, timeout_ms: Option<u64>) -> Value {
    info!("[{}] 執行 {}", ctx.request_id, name);

    let result = if !ctx.common().is_supported(name) {
        Err(ServiceError::unsupported_command(format!("{} is not supported by the device.", name)))
    } else {
        match handlers.get(name) {
            Some(handler) => {
                // handler 或 device panic 時仍要回 completion 並釋放 requestId
                let call = AssertUnwindSafe(handler.call(ctx, payload))
                    .catch_unwind()
                    .map(|outcome| {
                        outcome.unwrap_or_else(|panic| {
                            Err(ServiceError::internal(format!("{} panicked: {}", name, panic_message(&*panic))))
                        })
                    });
                let bounded = async {
                    match timeout_ms {
                        Some(ms) => tokio::time::timeout(Duration::from_millis(ms), call)
                            .await
                            .unwrap_or(Err(ServiceError::Timeout { timeout_ms: ms })),
                        None => call.await,
                    }
                };
                tokio::select! {
                    result = bounded => result,
                    _ = ctx.cancel.cancelled() => Err(ServiceError::Canceled {
                        message: format!("Request {} was canceled.", ctx.request_id),
                    }),
                }
            }
            None => Err(ServiceError::internal(format!("No handler for {}.", name))),
        }
    };

    match result {
        Ok(completion) => completion,
        Err(e) => {
            let code = e.completion_code();
            if code == CompletionCode::InternalError {
                error!("[{}] {} 失敗: {}", ctx.request_id, name, e);
            } else {
                warn!("[{}] {} 完成: {:?} {}", ctx.request_id, name, code, e);
            }
            let completion = Completion::with_code(code, Some(e.to_string()), NoPayload {});
            serde_json::to_value(completion).unwrap_or_else(|_| Value::Object(Default::default()))
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SimulatedDevice;
    use crate::core::common_service::CommonService;
    use crate::core::handlers::CommandHandler;
    use crate::core::registry::MessageRegistry;
    use crate::domain::ports::Device;
    use crate::utils::error::Result;
    use async_trait::async_trait;
    use serde_json::json;

    struct Crashing;

    #[async_trait]
    impl CommandHandler for Crashing {
        const NAME: &'static str = "Common.Status";
        type Command = Value;
        type Completion = NoPayload;

        async fn handle(&self, _ctx: &CommandContext, _command: Value) -> Result<Completion<NoPayload>> {
            panic!("device driver crashed");
        }
    }

    fn crashing_dispatcher() -> Dispatcher {
        let device: Arc<dyn Device> = Arc::new(SimulatedDevice::default());
        let common = Arc::new(CommonService::new(device, MessageRegistry::new()).unwrap());
        let service = Arc::new(ServiceContext {
            common,
            service_uris: Vec::new(),
            vendor_name: None,
        });
        let mut handlers = HandlerTable::empty();
        handlers.register(Crashing);
        Dispatcher::new(service, handlers, 4, 0)
    }

    #[tokio::test]
    async fn test_panicking_handler_completes_and_frees_request_id() {
        let dispatcher = crashing_dispatcher();
        let (connection, mut outbound) = Connection::new(1);
        let frame = serde_json::to_string(&Envelope::command("Common.Status", 7, json!({}))).unwrap();

        dispatcher.dispatch(&connection, &frame);
        let ack = outbound.recv().await.unwrap();
        assert_eq!(ack.header.status, Some(AcknowledgeStatus::Ok));

        let completion = tokio::time::timeout(Duration::from_secs(1), outbound.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(completion.kind(), MessageKind::Completion);
        let payload = completion.payload.unwrap();
        assert_eq!(payload["completionCode"], json!("internalError"));
        assert!(payload["errorDescription"].as_str().unwrap().contains("device driver crashed"));
        assert_eq!(connection.in_flight(), 0);

        // 同一個 requestId 可以再用
        dispatcher.dispatch(&connection, &frame);
        let ack = outbound.recv().await.unwrap();
        assert_eq!(ack.header.status, Some(AcknowledgeStatus::Ok));
    }

    #[test]
    fn test_panic_message_reads_str_and_string() {
        let from_str: Box<dyn Any + Send> = Box::new("boom");
        let from_string: Box<dyn Any + Send> = Box::new(String::from("bang"));
        let other: Box<dyn Any + Send> = Box::new(42);
        assert_eq!(panic_message(&*from_str), "boom");
        assert_eq!(panic_message(&*from_string), "bang");
        assert_eq!(panic_message(&*other), "unknown panic");
    }
}
