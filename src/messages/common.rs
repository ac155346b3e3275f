//! Common interface: status, capabilities, commands and events.

use super::InterfaceName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeviceState {
    Online,
    Offline,
    PowerOff,
    NoDevice,
    HardwareError,
    UserError,
    DeviceBusy,
    FraudAttempt,
    PotentialFraud,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DevicePosition {
    InPosition,
    NotInPosition,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AntiFraudModule {
    Ok,
    Inoperable,
    DeviceDetected,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Exchange {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<DeviceState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_position: Option<DevicePosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_save_recovery_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anti_fraud_module: Option<AntiFraudModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<Exchange>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub device_information: Vec<DeviceInformation>,
    pub power_save_control: bool,
    pub anti_fraud_module: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synchronizable_commands: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageVersions {
    pub versions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceInfo {
    pub name: InterfaceName,
    pub commands: BTreeMap<String, MessageVersions>,
    pub events: BTreeMap<String, MessageVersions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_requests: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authentication_required: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitiesCompletion {
    #[serde(default)]
    pub interfaces: Vec<InterfaceInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common: Option<CommonCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_reader: Option<super::card_reader::CardReaderCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_dispenser: Option<super::cash_dispenser::CashDispenserCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_management: Option<super::cash_management::CashManagementCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_management: Option<super::key_management::KeyManagementCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<super::key_management::KeyboardCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_terminal: Option<super::text_terminal::TextTerminalCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printer: Option<super::printer::PrinterCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_application: Option<super::vendor::VendorApplicationCapabilities>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionState {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionStateCompletion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TransactionState>,
    #[serde(rename = "transactionID", skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTransactionStateCommand {
    pub state: TransactionState,
    #[serde(rename = "transactionID", default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelCommand {
    /// 沒有指定時取消這個連線上所有進行中的 command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerSaveControlCommand {
    pub max_power_save_recovery_time: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorEventId {
    Hardware,
    Software,
    User,
    FraudAttempt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorAction {
    Reset,
    SoftwareError,
    Configuration,
    Clear,
    Maintenance,
    Suspend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEvent {
    pub event_id: ErrorEventId,
    pub action: ErrorAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonceClearedEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_description: Option<String>,
}
