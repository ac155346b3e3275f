use super::cash_management::CashPositionStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntermediateStacker {
    Empty,
    NotEmpty,
    Full,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StackerItems {
    CustomerAccess,
    NoCustomerAccess,
    AccessUnknown,
    NoItems,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BanknoteReader {
    Ok,
    Inoperable,
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashAcceptorStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate_stacker: Option<IntermediateStacker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacker_items: Option<StackerItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banknote_reader: Option<BanknoteReader>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_box: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<CashPositionStatus>>,
}
