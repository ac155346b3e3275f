use super::{
    auxiliaries::AuxiliariesStatus, barcode_reader::BarcodeReaderStatus,
    biometric::BiometricStatus, camera::CameraStatus, card_reader::CardReaderStatus,
    cash_acceptor::CashAcceptorStatus, cash_dispenser::CashDispenserStatus,
    cash_management::CashManagementStatus, check::CheckStatus, common::CommonStatus,
    key_management::{KeyManagementStatus, KeyboardStatus},
    mixed_media::MixedMediaStatus, printer::PrinterStatus, text_terminal::TextTerminalStatus,
    vendor::{VendorApplicationStatus, VendorModeStatus},
};
use serde::{Deserialize, Serialize};

/// Payload of `Common.Status` and `Common.StatusChangedEvent`.
///
/// 每個 interface 一個欄位；status changed event 只會填入變動的那一個屬性。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common: Option<CommonStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_reader: Option<CardReaderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_dispenser: Option<CashDispenserStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_management: Option<CashManagementStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_acceptor: Option<CashAcceptorStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<CheckStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixed_media: Option<MixedMediaStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_management: Option<KeyManagementStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<KeyboardStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_terminal: Option<TextTerminalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printer: Option<PrinterStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliaries: Option<AuxiliariesStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_mode: Option<VendorModeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_application: Option<VendorApplicationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode_reader: Option<BarcodeReaderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biometric: Option<BiometricStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraStatus>,
}

impl StatusPayload {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// `Some(status)` unless every property of it is absent.
pub(crate) fn non_empty<T: Default + PartialEq>(status: T) -> Option<T> {
    if status == T::default() {
        None
    } else {
        Some(status)
    }
}
