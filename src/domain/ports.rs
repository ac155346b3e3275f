use crate::domain::capabilities::DeviceCapabilities;
use crate::domain::model::{
    CashUnit, CountError, CountRequest, DeviceResult, DispenseError, DispenseRequest,
    DispenseResult, Mix, RetractBin, RetractError, StartLocalApplicationRequest, TransactionState,
};
use crate::domain::status::DeviceStatus;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio_util::sync::CancellationToken;

pub trait ConfigProvider: Send + Sync {
    fn service_name(&self) -> &str;
    fn vendor_name(&self) -> Option<&str>;
    fn bind_address(&self) -> String;
    fn service_uri(&self) -> String;
    fn max_in_flight(&self) -> usize;
    fn default_timeout_ms(&self) -> u64;
}

/// Device class behind the Common interface. Every device implements it.
#[async_trait]
pub trait CommonDevice: Send + Sync {
    fn capabilities(&self) -> DeviceCapabilities;

    /// Status of every interface the device implements.
    fn status(&self) -> DeviceStatus;

    async fn get_transaction_state(&self) -> Result<DeviceResult<TransactionState>>;

    async fn set_transaction_state(&self, state: TransactionState) -> Result<DeviceResult>;

    async fn power_save_control(
        &self,
        max_power_save_recovery_time: u32,
        cancel: CancellationToken,
    ) -> Result<DeviceResult>;
}

/// 一個 device class 可以同時實作多個 interface；沒實作的回傳 None
pub trait Device: CommonDevice {
    fn card_reader(&self) -> Option<&dyn CardReaderDevice> {
        None
    }

    fn cash_dispenser(&self) -> Option<&dyn CashDispenserDevice> {
        None
    }

    fn printer(&self) -> Option<&dyn PrinterDevice> {
        None
    }

    fn text_terminal(&self) -> Option<&dyn TextTerminalDevice> {
        None
    }

    fn vendor_application(&self) -> Option<&dyn VendorApplicationDevice> {
        None
    }
}

#[async_trait]
pub trait CardReaderDevice: Send + Sync {
    async fn reset_count(&self) -> Result<DeviceResult>;

    async fn set_key(&self, key_value: Vec<u8>) -> Result<DeviceResult>;
}

/// Intermediate events a dispense may emit while it runs.
#[async_trait]
pub trait DispenseEvents: Send + Sync {
    async fn delayed_dispense(&self, delay_ms: u32) -> Result<()>;
}

#[async_trait]
pub trait CashDispenserDevice: Send + Sync {
    fn cash_units(&self) -> Vec<CashUnit>;

    async fn count(
        &self,
        request: CountRequest,
        cancel: CancellationToken,
    ) -> Result<DeviceResult<(), CountError>>;

    async fn get_mix_types(&self) -> Result<DeviceResult<BTreeMap<String, Mix>>>;

    async fn dispense(
        &self,
        request: DispenseRequest,
        events: &dyn DispenseEvents,
        cancel: CancellationToken,
    ) -> Result<DeviceResult<DispenseResult, DispenseError>>;
}

#[async_trait]
pub trait PrinterDevice: Send + Sync {
    async fn retract(
        &self,
        bin: RetractBin,
        cancel: CancellationToken,
    ) -> Result<DeviceResult<(), RetractError>>;
}

#[async_trait]
pub trait TextTerminalDevice: Send + Sync {
    async fn reset(&self, cancel: CancellationToken) -> Result<DeviceResult>;
}

#[async_trait]
pub trait VendorApplicationDevice: Send + Sync {
    async fn start_local_application(
        &self,
        request: StartLocalApplicationRequest,
    ) -> Result<DeviceResult>;
}
