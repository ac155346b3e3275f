//! Capability and status aggregation shared by every interface.
//!
//! Holds the status cache, maps each change to a `Common.StatusChangedEvent`
//! carrying only the changed property, and publishes unsolicited events.

use crate::core::discovery::{supported_messages, SupportedMessages};
use crate::core::registry::MessageRegistry;
use crate::core::status_mapping::{changed_payload, full_payload};
use crate::domain::capabilities::{CommonCapabilities, DeviceCapabilities};
use crate::domain::model::{AutoRetractResult, DeviceNotification, ErrorAction, ErrorEventKind};
use crate::domain::ports::Device;
use crate::domain::status::{DeviceStatus, StatusChange};
use crate::messages::common::{self as wire, ErrorEvent, NonceClearedEvent};
use crate::messages::printer::MediaAutoRetractedEvent;
use crate::messages::{Envelope, StatusPayload};
use crate::utils::error::{Result, ServiceError};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, warn};

pub const STATUS_CHANGED_EVENT: &str = "Common.StatusChangedEvent";
pub const ERROR_EVENT: &str = "Common.ErrorEvent";
pub const NONCE_CLEARED_EVENT: &str = "Common.NonceClearedEvent";
pub const MEDIA_AUTO_RETRACTED_EVENT: &str = "Printer.MediaAutoRetractedEvent";

const PUBLISH_CAPACITY: usize = 256;

pub struct CommonService {
    device: Arc<dyn Device>,
    capabilities: DeviceCapabilities,
    common: CommonCapabilities,
    status: RwLock<DeviceStatus>,
    supported: SupportedMessages,
    registry: MessageRegistry,
    publisher: broadcast::Sender<Envelope>,
}

impl CommonService {
    pub fn new(device: Arc<dyn Device>, registry: MessageRegistry) -> Result<Self> {
        let capabilities = device.capabilities();
        let common = capabilities.common.clone().ok_or_else(|| {
            ServiceError::internal("Common capabilities are not reported by the device class.")
        })?;
        let status = device.status();
        let supported = supported_messages(&common, &registry);
        let (publisher, _) = broadcast::channel(PUBLISH_CAPACITY);

        info!(
            "Common service 初始化完成: {} 個 interface, {} 個支援的訊息",
            common.interfaces.len(),
            supported.len()
        );

        Ok(Self {
            device,
            capabilities,
            common,
            status: RwLock::new(status),
            supported,
            registry,
            publisher,
        })
    }

    pub fn device(&self) -> &Arc<dyn Device> {
        &self.device
    }

    pub fn capabilities(&self) -> &DeviceCapabilities {
        &self.capabilities
    }

    pub fn common_capabilities(&self) -> &CommonCapabilities {
        &self.common
    }

    pub fn supported_messages(&self) -> &SupportedMessages {
        &self.supported
    }

    pub fn is_supported(&self, name: &str) -> bool {
        self.supported.contains_key(name)
    }

    pub fn registry(&self) -> &MessageRegistry {
        &self.registry
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Envelope> {
        self.publisher.subscribe()
    }

    pub fn publisher(&self) -> broadcast::Sender<Envelope> {
        self.publisher.clone()
    }

    /// Applies a change to the cache and returns the wire payload of just that
    /// property; `None` when nothing maps.
    pub async fn status_changed(&self, change: &StatusChange) -> Option<StatusPayload> {
        let applied = self.status.write().await.apply(change);
        if !applied {
            warn!("{} 的狀態變更，但裝置沒有這個 interface", change.interface());
            return None;
        }

        let payload = changed_payload(change);
        match &payload {
            Some(payload) => self.publish(STATUS_CHANGED_EVENT, payload),
            None => debug!("{:?} 對應不到 wire 屬性，不送事件", change),
        }
        payload
    }

    pub async fn status(&self) -> DeviceStatus {
        self.status.read().await.clone()
    }

    pub async fn status_payload(&self) -> StatusPayload {
        full_payload(&*self.status.read().await)
    }

    pub fn error_event(
        &self,
        kind: ErrorEventKind,
        action: ErrorAction,
        vendor_description: Option<String>,
    ) -> ErrorEvent {
        let event = ErrorEvent {
            event_id: match kind {
                ErrorEventKind::Hardware => wire::ErrorEventId::Hardware,
                ErrorEventKind::Software => wire::ErrorEventId::Software,
                ErrorEventKind::User => wire::ErrorEventId::User,
                ErrorEventKind::FraudAttempt => wire::ErrorEventId::FraudAttempt,
            },
            action: match action {
                ErrorAction::Reset => wire::ErrorAction::Reset,
                ErrorAction::SoftwareError => wire::ErrorAction::SoftwareError,
                ErrorAction::Configuration => wire::ErrorAction::Configuration,
                ErrorAction::Clear => wire::ErrorAction::Clear,
                ErrorAction::Maintenance => wire::ErrorAction::Maintenance,
                ErrorAction::Suspend => wire::ErrorAction::Suspend,
            },
            vendor_description,
        };
        self.publish(ERROR_EVENT, &event);
        event
    }

    pub fn nonce_cleared_event(&self, reason: Option<String>) -> NonceClearedEvent {
        let event = NonceClearedEvent {
            reason_description: reason,
        };
        self.publish(NONCE_CLEARED_EVENT, &event);
        event
    }

    pub fn media_auto_retracted(&self, result: AutoRetractResult) -> MediaAutoRetractedEvent {
        let event = MediaAutoRetractedEvent {
            result: Some(match result {
                AutoRetractResult::Transport => "transport".to_string(),
                AutoRetractResult::Jammed => "jammed".to_string(),
                AutoRetractResult::Bin(n) => format!("unit{}", n),
            }),
        };
        self.publish(MEDIA_AUTO_RETRACTED_EVENT, &event);
        event
    }

    pub async fn handle_notification(&self, notification: DeviceNotification) {
        match notification {
            DeviceNotification::Status(change) => {
                self.status_changed(&change).await;
            }
            DeviceNotification::Error {
                kind,
                action,
                vendor_description,
            } => {
                self.error_event(kind, action, vendor_description);
            }
            DeviceNotification::NonceCleared { reason } => {
                self.nonce_cleared_event(reason);
            }
            DeviceNotification::MediaAutoRetracted(result) => {
                self.media_auto_retracted(result);
            }
        }
    }

    fn publish<T: Serialize>(&self, name: &str, payload: &T) {
        let payload = match serde_json::to_value(payload) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("{} 序列化失敗: {}", name, e);
                return;
            }
        };
        let envelope = Envelope::unsolicited(name, payload).with_version(self.registry.version_of(name));
        // 沒有連線時送不出去是正常的
        if self.publisher.send(envelope).is_err() {
            debug!("{} 沒有訂閱者", name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::simulator::SimulatedDevice;
    use crate::domain::status::common::{CommonProperty, DeviceState};
    use crate::domain::status::printer::{LampState, PrinterProperty};
    use serde_json::json;

    fn service() -> CommonService {
        let device = Arc::new(SimulatedDevice::default());
        CommonService::new(device, MessageRegistry::new()).unwrap()
    }

    #[tokio::test]
    async fn test_status_change_publishes_only_the_changed_property() {
        let service = service();
        let mut events = service.subscribe();

        let payload = service
            .status_changed(&StatusChange::Common(CommonProperty::Device(DeviceState::HardwareError)))
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"common": {"device": "hardwareError"}})
        );

        let event = events.recv().await.unwrap();
        assert_eq!(event.name(), STATUS_CHANGED_EVENT);
        assert_eq!(event.payload, Some(json!({"common": {"device": "hardwareError"}})));
        assert_eq!(
            service.status().await.common.device,
            DeviceState::HardwareError
        );
    }

    #[tokio::test]
    async fn test_not_supported_value_updates_cache_without_event() {
        let service = service();
        let mut events = service.subscribe();
        let change = StatusChange::Printer(PrinterProperty::Lamp(LampState::NotSupported));
        assert!(service.status_changed(&change).await.is_none());
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_full_status_contains_common() {
        let service = service();
        let value = serde_json::to_value(service.status_payload().await).unwrap();
        assert_eq!(value["common"]["device"], json!("online"));
    }

    #[test]
    fn test_error_event_payload() {
        let service = service();
        let event = service.error_event(
            ErrorEventKind::Hardware,
            ErrorAction::Maintenance,
            Some("jam".to_string()),
        );
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"eventId": "hardware", "action": "maintenance", "vendorDescription": "jam"})
        );
    }

    #[tokio::test]
    async fn test_media_auto_retracted_names_the_bin() {
        let service = service();
        let mut events = service.subscribe();
        service.handle_notification(DeviceNotification::MediaAutoRetracted(AutoRetractResult::Bin(2))).await;
        let event = events.recv().await.unwrap();
        assert_eq!(event.name(), MEDIA_AUTO_RETRACTED_EVENT);
        assert_eq!(event.header.version.as_deref(), Some("2.0"));
        assert_eq!(event.payload, Some(json!({"result": "unit2"})));
    }

    #[test]
    fn test_missing_common_capabilities_is_an_error() {
        let device = Arc::new(SimulatedDevice::without_common_capabilities());
        assert!(CommonService::new(device, MessageRegistry::new()).is_err());
    }
}
