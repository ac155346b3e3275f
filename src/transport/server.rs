//! WebSocket endpoint: one task per connection.

use crate::core::dispatcher::Dispatcher;
use crate::messages::Envelope;
use crate::transport::connection::Connection;
use crate::utils::error::Result;
use futures_util::{Sink, SinkExt, StreamExt};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::broadcast;
use tokio_tungstenite::tungstenite::handshake::server::{ErrorResponse, Request, Response};
use tokio_tungstenite::tungstenite::http::StatusCode;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, error, info, warn};

pub struct Server {
    listener: TcpListener,
    path: String,
    dispatcher: Arc<Dispatcher>,
    events: broadcast::Sender<Envelope>,
}

impl Server {
    /// `path` 為服務的 URI path，例如 `/xfs4iot/v1.0/printer`
    pub async fn bind(
        address: &str,
        path: &str,
        dispatcher: Arc<Dispatcher>,
        events: broadcast::Sender<Envelope>,
    ) -> Result<Self> {
        let listener = TcpListener::bind(address).await?;
        info!("監聽 {}{}", listener.local_addr()?, path);
        Ok(Self {
            listener,
            path: path.to_string(),
            dispatcher,
            events,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections until `shutdown` resolves.
    pub async fn run(self, shutdown: impl Future<Output = ()>) -> Result<()> {
        let next_id = AtomicU64::new(1);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                accepted = self.listener.accept() => {
                    let (stream, peer) = match accepted {
                        Ok(accepted) => accepted,
                        Err(e) => {
                            warn!("accept 失敗: {}", e);
                            continue;
                        }
                    };
                    let id = next_id.fetch_add(1, Ordering::Relaxed);
                    let path = self.path.clone();
                    let dispatcher = Arc::clone(&self.dispatcher);
                    let events = self.events.subscribe();
                    tokio::spawn(async move {
                        if let Err(e) = serve_connection(id, stream, peer, &path, dispatcher, events).await {
                            debug!("連線 {} ({}) 結束: {}", id, peer, e);
                        }
                    });
                }
                _ = &mut shutdown => {
                    info!("停止接受新連線");
                    return Ok(());
                }
            }
        }
    }
}

async fn serve_connection(
    id: u64,
    stream: TcpStream,
    peer: SocketAddr,
    path: &str,
    dispatcher: Arc<Dispatcher>,
    mut events: broadcast::Receiver<Envelope>,
) -> Result<()> {
    let expected = path.to_string();
    let socket = tokio_tungstenite::accept_hdr_async(stream, move |request: &Request, response: Response| {
        if request.uri().path() == expected {
            Ok(response)
        } else {
            let mut rejected = ErrorResponse::new(Some(format!("Unknown service {}", request.uri().path())));
            *rejected.status_mut() = StatusCode::NOT_FOUND;
            Err(rejected)
        }
    })
    .await?;
    info!("連線 {} 建立: {}", id, peer);

    let (mut sink, mut source) = socket.split();
    let (connection, mut outbound) = Connection::new(id);

    let result = loop {
        tokio::select! {
            inbound = source.next() => match inbound {
                Some(Ok(Message::Text(text))) => dispatcher.dispatch(&connection, &text),
                Some(Ok(Message::Close(_))) | None => break Ok(()),
                Some(Ok(other)) => debug!("連線 {} 忽略非文字訊息: {:?}", id, other),
                Some(Err(e)) => break Err(e.into()),
            },
            Some(message) = outbound.recv() => {
                if let Err(e) = send(&mut sink, &message).await {
                    break Err(e);
                }
            }
            event = events.recv() => match event {
                Ok(message) => {
                    if let Err(e) = send(&mut sink, &message).await {
                        break Err(e);
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("連線 {} 太慢，漏掉 {} 個事件", id, skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break Ok(()),
            },
        }
    };

    connection.cancel_all();
    match &result {
        Ok(()) => info!("連線 {} 關閉", id),
        Err(e) => error!("連線 {} 異常關閉: {}", id, e),
    }
    result
}

async fn send<S>(sink: &mut S, message: &Envelope) -> Result<()>
where
    S: Sink<Message> + Unpin,
    crate::utils::error::ServiceError: From<S::Error>,
{
    let text = serde_json::to_string(message)?;
    sink.send(Message::Text(text)).await?;
    Ok(())
}
