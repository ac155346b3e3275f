use crate::domain::model::{AutoRetractResult, DeviceNotification, ErrorAction, ErrorEventKind};
use crate::domain::status::StatusChange;
use tokio::sync::mpsc;
use tracing::warn;

/// Handle a device class uses to report things outside of a command.
#[derive(Debug, Clone)]
pub struct DeviceNotifier {
    sender: mpsc::UnboundedSender<DeviceNotification>,
}

impl DeviceNotifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<DeviceNotification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn notify(&self, notification: DeviceNotification) {
        if self.sender.send(notification).is_err() {
            warn!("服務已停止，通知被丟棄");
        }
    }

    pub fn status_changed(&self, change: StatusChange) {
        self.notify(DeviceNotification::Status(change));
    }

    pub fn error(&self, kind: ErrorEventKind, action: ErrorAction, vendor_description: Option<String>) {
        self.notify(DeviceNotification::Error {
            kind,
            action,
            vendor_description,
        });
    }

    pub fn nonce_cleared(&self, reason: Option<String>) {
        self.notify(DeviceNotification::NonceCleared { reason });
    }

    pub fn media_auto_retracted(&self, result: AutoRetractResult) {
        self.notify(DeviceNotification::MediaAutoRetracted(result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status::common::{CommonProperty, DeviceState};

    #[tokio::test]
    async fn test_notifications_arrive_in_order() {
        let (notifier, mut receiver) = DeviceNotifier::channel();
        notifier.status_changed(StatusChange::Common(CommonProperty::Device(DeviceState::Offline)));
        notifier.nonce_cleared(None);

        assert!(matches!(receiver.recv().await, Some(DeviceNotification::Status(_))));
        assert_eq!(
            receiver.recv().await,
            Some(DeviceNotification::NonceCleared { reason: None })
        );
    }

    #[test]
    fn test_closed_channel_does_not_panic() {
        let (notifier, receiver) = DeviceNotifier::channel();
        drop(receiver);
        notifier.media_auto_retracted(AutoRetractResult::Jammed);
    }
}
