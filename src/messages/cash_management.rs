//! CashManagement status and the cash position status shared by the dispenser
//! and acceptor interfaces.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitsState {
    Ok,
    Attention,
    Stop,
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashManagementStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispenser: Option<UnitsState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptor: Option<UnitsState>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CashPosition {
    InDefault,
    InLeft,
    InRight,
    InCenter,
    InTop,
    InBottom,
    InFront,
    InRear,
    OutDefault,
    OutLeft,
    OutRight,
    OutCenter,
    OutTop,
    OutBottom,
    OutFront,
    OutRear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Shutter {
    Closed,
    Open,
    JammedOpen,
    JammedPartiallyOpen,
    JammedClosed,
    JammedUnknown,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PositionStatus {
    Empty,
    NotEmpty,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transport {
    Ok,
    Inoperative,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransportStatus {
    Empty,
    NotEmpty,
    NotEmptyCustomer,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashPositionStatus {
    pub position: CashPosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shutter: Option<Shutter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_status: Option<PositionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<Transport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_status: Option<TransportStatus>,
}

impl CashPositionStatus {
    pub fn empty(position: CashPosition) -> Self {
        Self {
            position,
            shutter: None,
            position_status: None,
            transport: None,
            transport_status: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeType {
    pub by_hand: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInfoTypes {
    pub serial_number: bool,
    pub signature: bool,
    pub image_file: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashManagementCapabilities {
    pub safe_door: bool,
    pub cash_box: bool,
    pub exchange_type: ExchangeType,
    pub item_info_types: ItemInfoTypes,
    pub classification_list: bool,
}
