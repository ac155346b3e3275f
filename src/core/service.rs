use crate::core::common_service::CommonService;
use crate::core::dispatcher::Dispatcher;
use crate::core::handlers::{HandlerTable, ServiceContext};
use crate::core::registry::MessageRegistry;
use crate::domain::model::DeviceNotification;
use crate::domain::ports::{ConfigProvider, Device};
use crate::messages::Envelope;
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// One service endpoint: the common service plus the command dispatcher.
pub struct ServiceProvider {
    common: Arc<CommonService>,
    dispatcher: Arc<Dispatcher>,
    notifications: Option<mpsc::UnboundedReceiver<DeviceNotification>>,
}

impl ServiceProvider {
    pub fn new(
        device: Arc<dyn Device>,
        notifications: mpsc::UnboundedReceiver<DeviceNotification>,
        config: &dyn ConfigProvider,
    ) -> Result<Self> {
        let common = Arc::new(CommonService::new(device, MessageRegistry::new())?);
        let context = Arc::new(ServiceContext {
            common: Arc::clone(&common),
            service_uris: vec![config.service_uri()],
            vendor_name: config.vendor_name().map(str::to_string),
        });
        let dispatcher = Dispatcher::new(
            context,
            HandlerTable::default(),
            config.max_in_flight(),
            config.default_timeout_ms(),
        );

        info!("服務 {} 就緒: {}", config.service_name(), config.service_uri());
        Ok(Self {
            common,
            dispatcher: Arc::new(dispatcher),
            notifications: Some(notifications),
        })
    }

    pub fn common(&self) -> &Arc<CommonService> {
        &self.common
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.dispatcher)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Envelope> {
        self.common.subscribe()
    }

    pub fn events(&self) -> broadcast::Sender<Envelope> {
        self.common.publisher()
    }

    /// Forwards device notifications to the common service until the device side closes.
    /// Only the first call starts a task.
    pub fn spawn_notifications(&mut self) -> Option<JoinHandle<()>> {
        let mut receiver = self.notifications.take()?;
        let common = Arc::clone(&self.common);
        Some(tokio::spawn(async move {
            while let Some(notification) = receiver.recv().await {
                common.handle_notification(notification).await;
            }
            debug!("裝置通知通道已關閉");
        }))
    }
}
