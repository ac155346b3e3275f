#![allow(dead_code)]

use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use xfs4iot_framework::core::notifier::DeviceNotifier;
use xfs4iot_framework::messages::{Envelope, MessageKind};
use xfs4iot_framework::{
    Connection, Dispatcher, ServiceConfig, ServiceProvider, SimulatedDevice, SimulatorOptions,
};

pub const SERVICE_TOML: &str = r#"
[service]
name = "sim"
vendor_name = "Test Vendor"
port = 5846
max_in_flight = 4
"#;

/// 不經過 WebSocket，直接把文字訊息丟給 dispatcher
pub struct Harness {
    pub device: Arc<SimulatedDevice>,
    pub provider: ServiceProvider,
    pub dispatcher: Arc<Dispatcher>,
    pub connection: Arc<Connection>,
    pub outbound: mpsc::UnboundedReceiver<Envelope>,
    pub events: broadcast::Receiver<Envelope>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with(SimulatorOptions::default(), SERVICE_TOML)
    }

    pub fn with_options(options: SimulatorOptions) -> Self {
        Self::with(options, SERVICE_TOML)
    }

    pub fn with(options: SimulatorOptions, toml: &str) -> Self {
        let config = ServiceConfig::from_toml_str(toml).expect("test config");
        let (notifier, notifications) = DeviceNotifier::channel();
        let device = Arc::new(SimulatedDevice::new(options).with_notifier(notifier));

        let mut provider =
            ServiceProvider::new(device.clone(), notifications, &config).expect("service provider");
        provider.spawn_notifications();
        let events = provider.subscribe();
        let dispatcher = provider.dispatcher();
        let (connection, outbound) = Connection::new(1);

        Self {
            device,
            provider,
            dispatcher,
            connection,
            outbound,
            events,
        }
    }

    pub fn send_raw(&self, text: &str) {
        self.dispatcher.dispatch(&self.connection, text);
    }

    pub fn send(&self, envelope: &Envelope) {
        self.send_raw(&serde_json::to_string(envelope).expect("serialize"));
    }

    pub fn command(&self, name: &str, request_id: i64, payload: Value) {
        self.send(&Envelope::command(name, request_id, payload));
    }

    pub async fn next(&mut self) -> Envelope {
        tokio::time::timeout(Duration::from_secs(5), self.outbound.recv())
            .await
            .expect("timed out waiting for a message")
            .expect("connection queue closed")
    }

    pub async fn next_event(&mut self) -> Envelope {
        tokio::time::timeout(Duration::from_secs(5), self.events.recv())
            .await
            .expect("timed out waiting for an event")
            .expect("event channel closed")
    }

    /// 送出 command，收集到它的 completion 為止 (acknowledge 與中間事件也回傳)
    pub async fn execute(&mut self, name: &str, request_id: i64, payload: Value) -> Vec<Envelope> {
        self.command(name, request_id, payload);
        self.collect(request_id).await
    }

    pub async fn collect(&mut self, request_id: i64) -> Vec<Envelope> {
        let mut messages = Vec::new();
        loop {
            let message = self.next().await;
            let ours = message.request_id() == Some(request_id);
            let rejected = message.kind() == MessageKind::Acknowledge
                && message.header.status != Some(xfs4iot_framework::messages::AcknowledgeStatus::Ok);
            let done = ours && (message.kind() == MessageKind::Completion || rejected);
            messages.push(message);
            if done {
                return messages;
            }
        }
    }

    /// Completion payload of a command that was acknowledged ok.
    pub async fn complete(&mut self, name: &str, request_id: i64, payload: Value) -> Value {
        let messages = self.execute(name, request_id, payload).await;
        let last = messages.last().expect("no messages");
        assert_eq!(last.kind(), MessageKind::Completion, "{:?}", messages);
        last.payload.clone().expect("completion payload")
    }
}
