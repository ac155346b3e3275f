use anyhow::Result;
use futures_util::{SinkExt, Stream, StreamExt};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use xfs4iot_framework::core::notifier::DeviceNotifier;
use xfs4iot_framework::domain::status::common::{CommonProperty, DeviceState};
use xfs4iot_framework::domain::status::StatusChange;
use xfs4iot_framework::messages::{AcknowledgeStatus, Envelope, MessageKind};
use xfs4iot_framework::{Server, ServiceConfig, ServiceProvider, SimulatedDevice, SimulatorOptions};

const PATH: &str = "/xfs4iot/v1.0/sim";

struct Running {
    uri: String,
    device: Arc<SimulatedDevice>,
    shutdown: Option<oneshot::Sender<()>>,
    _provider: ServiceProvider,
}

impl Drop for Running {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

async fn start() -> Result<Running> {
    let config = ServiceConfig::from_toml_str("[service]\nname = \"sim\"\nport = 1\n")?;
    let (notifier, notifications) = DeviceNotifier::channel();
    let device = Arc::new(SimulatedDevice::new(SimulatorOptions::default()).with_notifier(notifier));

    let mut provider = ServiceProvider::new(device.clone(), notifications, &config)?;
    provider.spawn_notifications();

    let server = Server::bind("127.0.0.1:0", PATH, provider.dispatcher(), provider.events()).await?;
    let uri = format!("ws://{}{}", server.local_addr()?, PATH);
    let (shutdown, stopped) = oneshot::channel::<()>();
    tokio::spawn(server.run(async {
        let _ = stopped.await;
    }));

    Ok(Running {
        uri,
        device,
        shutdown: Some(shutdown),
        _provider: provider,
    })
}

async fn read<S>(source: &mut S) -> Result<Envelope>
where
    S: Stream<Item = std::result::Result<Message, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    loop {
        let message = tokio::time::timeout(Duration::from_secs(5), source.next())
            .await?
            .ok_or_else(|| anyhow::anyhow!("socket closed"))??;
        if let Message::Text(text) = message {
            return Ok(serde_json::from_str(&text)?);
        }
    }
}

/// 透過真正的 WebSocket 走完 command → acknowledge → completion
#[tokio::test]
async fn test_status_over_websocket() -> Result<()> {
    let running = start().await?;
    let (socket, _) = connect_async(running.uri.as_str()).await?;
    let (mut sink, mut source) = socket.split();

    let command = Envelope::command("Common.Status", 1, json!({}));
    sink.send(Message::Text(serde_json::to_string(&command)?)).await?;

    let ack = read(&mut source).await?;
    assert_eq!(ack.kind(), MessageKind::Acknowledge);
    assert_eq!(ack.header.status, Some(AcknowledgeStatus::Ok));

    let completion = read(&mut source).await?;
    assert_eq!(completion.kind(), MessageKind::Completion);
    assert_eq!(completion.request_id(), Some(1));
    let payload = completion.payload.unwrap();
    assert_eq!(payload["completionCode"], json!("success"));
    assert_eq!(payload["common"]["device"], json!("online"));
    Ok(())
}

#[tokio::test]
async fn test_unsolicited_event_reaches_client() -> Result<()> {
    let running = start().await?;
    let (socket, _) = connect_async(running.uri.as_str()).await?;
    let (_sink, mut source) = socket.split();

    // 等伺服器端完成訂閱
    tokio::time::sleep(Duration::from_millis(100)).await;
    running
        .device
        .inject(StatusChange::Common(CommonProperty::Device(DeviceState::Offline)));

    let event = read(&mut source).await?;
    assert_eq!(event.kind(), MessageKind::Unsolicited);
    assert_eq!(event.name(), "Common.StatusChangedEvent");
    assert_eq!(event.request_id(), None);
    assert_eq!(event.payload, Some(json!({"common": {"device": "offline"}})));
    Ok(())
}

#[tokio::test]
async fn test_unknown_path_is_refused() -> Result<()> {
    let running = start().await?;
    let wrong = running.uri.replace("/sim", "/printer");
    assert!(connect_async(wrong.as_str()).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_invalid_frame_gets_invalid_message() -> Result<()> {
    let running = start().await?;
    let (socket, _) = connect_async(running.uri.as_str()).await?;
    let (mut sink, mut source) = socket.split();

    sink.send(Message::Text("{\"header\": 42}".to_string())).await?;
    let ack = read(&mut source).await?;
    assert_eq!(ack.header.status, Some(AcknowledgeStatus::InvalidMessage));
    assert_eq!(ack.request_id(), Some(0));
    Ok(())
}
