use super::cash_management::CashPositionStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntermediateStacker {
    Empty,
    NotEmpty,
    NotEmptyCustomer,
    NotEmptyUnknown,
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashDispenserStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate_stacker: Option<IntermediateStacker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<CashPositionStatus>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputPosition {
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
pub enum DispenserType {
    TellerBill,
    SelfServiceBill,
    TellerCoin,
    SelfServiceCoin,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputPositions {
    pub left: bool,
    pub right: bool,
    pub center: bool,
    pub top: bool,
    pub bottom: bool,
    pub front: bool,
    pub rear: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashDispenserCapabilities {
    #[serde(rename = "type")]
    pub dispenser_type: DispenserType,
    pub max_dispense_items: u32,
    pub shutter_control: bool,
    pub intermediate_stacker: u32,
    pub items_taken_sensor: bool,
    pub positions: OutputPositions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountCommand {
    /// 單一 cash unit，或 `all`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<OutputPosition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CountErrorCode {
    CashUnitError,
    UnsupportedPosition,
    ExchangeActive,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountCompletion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<CountErrorCode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MixKind {
    Individual,
    Algorithm,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MixAlgorithm {
    MinimumBills,
    EqualEmptying,
    MaxCashUnits,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixType {
    #[serde(rename = "type")]
    pub kind: MixKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<MixAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMixTypesCompletion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixes: Option<BTreeMap<String, MixType>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Denomination {
    /// currency → amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currencies: Option<BTreeMap<String, f64>>,
    /// cash unit → item count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<BTreeMap<String, u32>>,
}

impl Denomination {
    pub fn is_empty(&self) -> bool {
        self.currencies.as_ref().map_or(true, BTreeMap::is_empty)
            && self.values.as_ref().map_or(true, BTreeMap::is_empty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispenseCommand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denomination: Option<Denomination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<OutputPosition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DispenseErrorCode {
    InvalidCurrency,
    #[serde(rename = "invalidTellerID")]
    InvalidTellerId,
    CashUnitError,
    InvalidDenomination,
    InvalidMixNumber,
    NoCurrencyMix,
    NotDispensable,
    TooManyItems,
    UnsupportedPosition,
    ExchangeActive,
    NoCashBoxPresent,
    AmountNotInMixTable,
    ItemsLeft,
    ShutterOpen,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispenseCompletion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<DispenseErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denomination: Option<Denomination>,
    /// `unknown` 或 bunch 數
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bunches: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedDispenseEvent {
    pub delay: u32,
}
