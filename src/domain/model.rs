use crate::domain::status::cash::OutputPosition;
use crate::domain::status::vendor::AccessLevel;
use crate::domain::status::StatusChange;
use crate::messages::CompletionCode;
use std::collections::BTreeMap;

/// What a device class call produced.
///
/// `error_code` is only meaningful with `CompletionCode::CommandErrorCode`;
/// `data` may be present even when the command failed.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceResult<T = (), E = ()> {
    pub completion_code: CompletionCode,
    pub error_description: Option<String>,
    pub error_code: Option<E>,
    pub data: Option<T>,
}

impl<T, E> DeviceResult<T, E> {
    pub fn success(data: T) -> Self {
        Self {
            completion_code: CompletionCode::Success,
            error_description: None,
            error_code: None,
            data: Some(data),
        }
    }

    pub fn failed(completion_code: CompletionCode, error_description: impl Into<String>) -> Self {
        Self {
            completion_code,
            error_description: Some(error_description.into()),
            error_code: None,
            data: None,
        }
    }

    pub fn command_error(error_code: E, error_description: impl Into<String>) -> Self {
        Self {
            completion_code: CompletionCode::CommandErrorCode,
            error_description: Some(error_description.into()),
            error_code: Some(error_code),
            data: None,
        }
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn is_success(&self) -> bool {
        self.completion_code == CompletionCode::Success
    }
}

impl<E> DeviceResult<(), E> {
    pub fn ok() -> Self {
        Self::success(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionStatus {
    Active,
    Inactive,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionState {
    pub state: TransactionStatus,
    pub transaction_id: Option<String>,
    pub extra: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetractError {
    NoMediaPresent,
    RetractBinFull,
    MediaJammed,
}

/// Retract target: `-1` is the transport, `n` is retract bin n.
pub type RetractBin = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashUnitKind {
    CashIn,
    CashOut,
    Recycling,
    Retract,
    Reject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CashUnit {
    pub id: String,
    pub kind: CashUnitKind,
    pub currency: String,
    pub value: f64,
    pub count: u32,
}

impl CashUnit {
    /// 出鈔用的單元 (cash-out 或循環)
    pub fn dispenses(&self) -> bool {
        matches!(self.kind, CashUnitKind::CashOut | CashUnitKind::Recycling)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountRequest {
    pub position: Option<OutputPosition>,
    pub units: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountError {
    CashUnitError,
    UnsupportedPosition,
    ExchangeActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixAlgorithm {
    MinimumBills,
    EqualEmptying,
    MaxCashUnits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixKind {
    Individual,
    Algorithm(MixAlgorithm),
    Table,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mix {
    pub kind: MixKind,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DispenseRequest {
    pub position: Option<OutputPosition>,
    pub mix: Option<String>,
    pub currencies: BTreeMap<String, f64>,
    pub values: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DispenseResult {
    pub currencies: BTreeMap<String, f64>,
    pub values: BTreeMap<String, u32>,
    /// `unknown` or a bunch count
    pub bunches: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispenseError {
    InvalidCurrency,
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartLocalApplicationRequest {
    pub app_name: String,
    pub access_level: Option<AccessLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorEventKind {
    Hardware,
    Software,
    User,
    FraudAttempt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorAction {
    Reset,
    SoftwareError,
    Configuration,
    Clear,
    Maintenance,
    Suspend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoRetractResult {
    Transport,
    Jammed,
    Bin(u32),
}

/// Everything a device class reports outside of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceNotification {
    Status(StatusChange),
    Error {
        kind: ErrorEventKind,
        action: ErrorAction,
        vendor_description: Option<String>,
    },
    NonceCleared {
        reason: Option<String>,
    },
    MediaAutoRetracted(AutoRetractResult),
}
