use crate::messages::{AcknowledgeStatus, Envelope};
use crate::utils::error::{Result, ServiceError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// One client connection: its outbound queue and in-flight commands.
#[derive(Debug)]
pub struct Connection {
    id: u64,
    outbound: mpsc::UnboundedSender<Envelope>,
    in_flight: Mutex<HashMap<i64, CancellationToken>>,
}

impl Connection {
    pub fn new(id: u64) -> (Arc<Self>, mpsc::UnboundedReceiver<Envelope>) {
        let (outbound, receiver) = mpsc::unbounded_channel();
        let connection = Arc::new(Self {
            id,
            outbound,
            in_flight: Mutex::new(HashMap::new()),
        });
        (connection, receiver)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn send(&self, envelope: Envelope) -> Result<()> {
        self.outbound
            .send(envelope)
            .map_err(|_| ServiceError::ConnectionClosed)
    }

    fn table(&self) -> MutexGuard<'_, HashMap<i64, CancellationToken>> {
        self.in_flight.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Registers a command; `limit` of None skips the in-flight limit.
    pub fn begin(
        &self,
        request_id: i64,
        limit: Option<usize>,
    ) -> std::result::Result<CancellationToken, AcknowledgeStatus> {
        let mut table = self.table();
        if table.contains_key(&request_id) {
            return Err(AcknowledgeStatus::InvalidRequestId);
        }
        if limit.is_some_and(|limit| table.len() >= limit) {
            return Err(AcknowledgeStatus::TooManyRequests);
        }
        let token = CancellationToken::new();
        table.insert(request_id, token.clone());
        Ok(token)
    }

    pub fn end(&self, request_id: i64) {
        self.table().remove(&request_id);
    }

    pub fn in_flight(&self) -> usize {
        self.table().len()
    }

    /// Cancels the listed requests, or every one when `request_ids` is None.
    /// `except` is the canceling command itself.
    pub fn cancel(&self, request_ids: Option<&[i64]>, except: i64) -> usize {
        let table = self.table();
        let mut canceled = 0;
        for (id, token) in table.iter() {
            let listed = request_ids.map_or(true, |ids| ids.contains(id));
            if *id != except && listed {
                token.cancel();
                canceled += 1;
            }
        }
        debug!("連線 {} 取消了 {} 個 command", self.id, canceled);
        canceled
    }

    pub fn cancel_all(&self) {
        for token in self.table().values() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_request_id_rejected() {
        let (connection, _rx) = Connection::new(1);
        assert!(connection.begin(5, Some(10)).is_ok());
        assert_eq!(
            connection.begin(5, Some(10)).unwrap_err(),
            AcknowledgeStatus::InvalidRequestId
        );
        connection.end(5);
        assert!(connection.begin(5, Some(10)).is_ok());
    }

    #[test]
    fn test_limit_applies_only_when_given() {
        let (connection, _rx) = Connection::new(1);
        connection.begin(1, Some(1)).unwrap();
        assert_eq!(
            connection.begin(2, Some(1)).unwrap_err(),
            AcknowledgeStatus::TooManyRequests
        );
        assert!(connection.begin(3, None).is_ok());
        assert_eq!(connection.in_flight(), 2);
    }

    #[test]
    fn test_cancel_skips_the_canceling_request() {
        let (connection, _rx) = Connection::new(1);
        let first = connection.begin(1, None).unwrap();
        let second = connection.begin(2, None).unwrap();
        let own = connection.begin(3, None).unwrap();

        assert_eq!(connection.cancel(Some(&[2, 3]), 3), 1);
        assert!(!first.is_cancelled());
        assert!(second.is_cancelled());
        assert!(!own.is_cancelled());

        assert_eq!(connection.cancel(None, 3), 2);
        assert!(first.is_cancelled());
        assert!(!own.is_cancelled());
    }

    #[test]
    fn test_cancel_all_wakes_waiting_commands() {
        let (connection, _rx) = Connection::new(1);
        let token = connection.begin(8, None).unwrap();
        let mut waiting = tokio_test::task::spawn(token.cancelled());
        tokio_test::assert_pending!(waiting.poll());

        connection.cancel_all();
        assert!(waiting.is_woken());
        tokio_test::assert_ready!(waiting.poll());
    }

    #[test]
    fn test_send_after_close_is_an_error() {
        let (connection, rx) = Connection::new(1);
        drop(rx);
        let result = connection.send(Envelope::unsolicited("Common.ErrorEvent", serde_json::json!({})));
        assert!(matches!(result, Err(ServiceError::ConnectionClosed)));
    }
}
