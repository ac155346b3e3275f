use clap::Parser;
use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use xfs4iot_framework::messages::{Envelope, MessageKind};
use xfs4iot_framework::utils::logger;

#[derive(Parser)]
#[command(name = "xfs-client")]
#[command(about = "Send one XFS4IoT command and print every message until its completion")]
struct Args {
    /// Service URI, e.g. ws://127.0.0.1:5846/xfs4iot/v1.0/simulator
    #[arg(short, long)]
    uri: String,

    /// Command name, e.g. Common.Status
    #[arg(short, long)]
    command: String,

    /// JSON payload
    #[arg(short, long, default_value = "{}")]
    payload: String,

    #[arg(long, default_value = "1")]
    request_id: i64,

    /// Command timeout in milliseconds
    #[arg(long)]
    timeout: Option<u64>,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let payload: Value = serde_json::from_str(&args.payload)?;
    let mut command = Envelope::command(&args.command, args.request_id, payload);
    if let Some(timeout) = args.timeout {
        command = command.with_timeout(timeout);
    }

    let (socket, _) = connect_async(args.uri.as_str()).await?;
    tracing::info!("🔌 Connected to {}", args.uri);
    let (mut sink, mut source) = socket.split();

    sink.send(Message::Text(serde_json::to_string(&command)?)).await?;

    while let Some(message) = source.next().await {
        let text = match message? {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };
        let envelope: Envelope = serde_json::from_str(&text)?;
        println!("{}", serde_json::to_string_pretty(&envelope)?);

        let ours = envelope.request_id() == Some(args.request_id);
        let done = match envelope.kind() {
            MessageKind::Completion => ours,
            // 被拒絕的指令不會有 completion
            MessageKind::Acknowledge => {
                ours && envelope.header.status != Some(xfs4iot_framework::messages::AcknowledgeStatus::Ok)
            }
            _ => false,
        };
        if done {
            break;
        }
    }

    sink.send(Message::Close(None)).await?;
    Ok(())
}
