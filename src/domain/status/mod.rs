//! Vendor-neutral status model.
//!
//! Device classes report status with these types; `core::status_mapping` turns
//! them into wire payloads. Members such as `NotSupported` / `NotAvailable`
//! exist for devices lacking a feature and never reach the wire.

pub mod auxiliaries;
pub mod camera;
pub mod card_reader;
pub mod cash;
pub mod check;
pub mod common;
pub mod printer;
pub mod readers;
pub mod terminal;
pub mod vendor;

use crate::messages::InterfaceName;

use auxiliaries::{AuxiliariesProperty, AuxiliariesStatus};
use camera::{CameraProperty, CameraStatus};
use card_reader::{CardReaderProperty, CardReaderStatus};
use cash::{
    CashAcceptorProperty, CashAcceptorStatus, CashDispenserProperty, CashDispenserStatus,
    CashManagementProperty, CashManagementStatus,
};
use check::{CheckProperty, CheckStatus, MixedMediaProperty, MixedMediaStatus};
use common::{CommonProperty, CommonStatus};
use printer::{PrinterProperty, PrinterStatus};
use readers::{BarcodeReaderProperty, BarcodeReaderStatus, BiometricProperty, BiometricStatus};
use terminal::{
    KeyManagementProperty, KeyManagementStatus, KeyboardProperty, KeyboardStatus,
    TextTerminalProperty, TextTerminalStatus,
};
use vendor::{
    VendorApplicationProperty, VendorApplicationStatus, VendorModeProperty, VendorModeStatus,
};

/// Status of every interface a device implements; `None` for the ones it does not.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceStatus {
    pub common: CommonStatus,
    pub card_reader: Option<CardReaderStatus>,
    pub cash_dispenser: Option<CashDispenserStatus>,
    pub cash_management: Option<CashManagementStatus>,
    pub cash_acceptor: Option<CashAcceptorStatus>,
    pub check: Option<CheckStatus>,
    pub mixed_media: Option<MixedMediaStatus>,
    pub key_management: Option<KeyManagementStatus>,
    pub keyboard: Option<KeyboardStatus>,
    pub text_terminal: Option<TextTerminalStatus>,
    pub printer: Option<PrinterStatus>,
    pub auxiliaries: Option<AuxiliariesStatus>,
    pub vendor_mode: Option<VendorModeStatus>,
    pub vendor_application: Option<VendorApplicationStatus>,
    pub barcode_reader: Option<BarcodeReaderStatus>,
    pub biometric: Option<BiometricStatus>,
    pub camera: Option<CameraStatus>,
}

/// One property of one interface changed to a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusChange {
    Common(CommonProperty),
    CardReader(CardReaderProperty),
    CashDispenser(CashDispenserProperty),
    CashManagement(CashManagementProperty),
    CashAcceptor(CashAcceptorProperty),
    Check(CheckProperty),
    MixedMedia(MixedMediaProperty),
    KeyManagement(KeyManagementProperty),
    Keyboard(KeyboardProperty),
    TextTerminal(TextTerminalProperty),
    Printer(PrinterProperty),
    Auxiliaries(AuxiliariesProperty),
    VendorMode(VendorModeProperty),
    VendorApplication(VendorApplicationProperty),
    BarcodeReader(BarcodeReaderProperty),
    Biometric(BiometricProperty),
    Camera(CameraProperty),
}

impl StatusChange {
    pub fn interface(&self) -> InterfaceName {
        match self {
            Self::Common(_) => InterfaceName::Common,
            Self::CardReader(_) => InterfaceName::CardReader,
            Self::CashDispenser(_) => InterfaceName::CashDispenser,
            Self::CashManagement(_) => InterfaceName::CashManagement,
            Self::CashAcceptor(_) => InterfaceName::CashAcceptor,
            Self::Check(_) => InterfaceName::Check,
            Self::MixedMedia(_) => InterfaceName::MixedMedia,
            Self::KeyManagement(_) => InterfaceName::KeyManagement,
            Self::Keyboard(_) => InterfaceName::Keyboard,
            Self::TextTerminal(_) => InterfaceName::TextTerminal,
            Self::Printer(_) => InterfaceName::Printer,
            Self::Auxiliaries(_) => InterfaceName::Auxiliaries,
            Self::VendorMode(_) => InterfaceName::VendorMode,
            Self::VendorApplication(_) => InterfaceName::VendorApplication,
            Self::BarcodeReader(_) => InterfaceName::BarcodeReader,
            Self::Biometric(_) => InterfaceName::Biometric,
            Self::Camera(_) => InterfaceName::Camera,
        }
    }
}

macro_rules! apply_to {
    ($slot:expr, $property:expr) => {
        match $slot.as_mut() {
            Some(status) => {
                status.apply($property);
                true
            }
            None => false,
        }
    };
}

impl DeviceStatus {
    /// 更新快取；裝置沒有這個 interface 時回傳 false
    pub fn apply(&mut self, change: &StatusChange) -> bool {
        match change {
            StatusChange::Common(p) => {
                self.common.apply(p);
                true
            }
            StatusChange::CardReader(p) => apply_to!(self.card_reader, p),
            StatusChange::CashDispenser(p) => apply_to!(self.cash_dispenser, p),
            StatusChange::CashManagement(p) => apply_to!(self.cash_management, p),
            StatusChange::CashAcceptor(p) => apply_to!(self.cash_acceptor, p),
            StatusChange::Check(p) => apply_to!(self.check, p),
            StatusChange::MixedMedia(p) => apply_to!(self.mixed_media, p),
            StatusChange::KeyManagement(p) => apply_to!(self.key_management, p),
            StatusChange::Keyboard(p) => apply_to!(self.keyboard, p),
            StatusChange::TextTerminal(p) => apply_to!(self.text_terminal, p),
            StatusChange::Printer(p) => apply_to!(self.printer, p),
            StatusChange::Auxiliaries(p) => apply_to!(self.auxiliaries, p),
            StatusChange::VendorMode(p) => apply_to!(self.vendor_mode, p),
            StatusChange::VendorApplication(p) => apply_to!(self.vendor_application, p),
            StatusChange::BarcodeReader(p) => apply_to!(self.barcode_reader, p),
            StatusChange::Biometric(p) => apply_to!(self.biometric, p),
            StatusChange::Camera(p) => apply_to!(self.camera, p),
        }
    }

    /// Every property of every present interface, as changes.
    pub fn changes(&self) -> Vec<StatusChange> {
        let mut changes: Vec<StatusChange> = self
            .common
            .properties()
            .into_iter()
            .map(StatusChange::Common)
            .collect();

        macro_rules! collect {
            ($slot:expr, $variant:path) => {
                if let Some(status) = &$slot {
                    changes.extend(status.properties().into_iter().map($variant));
                }
            };
        }

        collect!(self.card_reader, StatusChange::CardReader);
        collect!(self.cash_dispenser, StatusChange::CashDispenser);
        collect!(self.cash_management, StatusChange::CashManagement);
        collect!(self.cash_acceptor, StatusChange::CashAcceptor);
        collect!(self.check, StatusChange::Check);
        collect!(self.mixed_media, StatusChange::MixedMedia);
        collect!(self.key_management, StatusChange::KeyManagement);
        collect!(self.keyboard, StatusChange::Keyboard);
        collect!(self.text_terminal, StatusChange::TextTerminal);
        collect!(self.printer, StatusChange::Printer);
        collect!(self.auxiliaries, StatusChange::Auxiliaries);
        collect!(self.vendor_mode, StatusChange::VendorMode);
        collect!(self.vendor_application, StatusChange::VendorApplication);
        collect!(self.barcode_reader, StatusChange::BarcodeReader);
        collect!(self.biometric, StatusChange::Biometric);
        collect!(self.camera, StatusChange::Camera);

        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use printer::{RetractBinProperty, RetractBinState};

    #[test]
    fn test_apply_to_missing_interface_is_reported() {
        let mut status = DeviceStatus::default();
        let applied = status.apply(&StatusChange::Printer(PrinterProperty::Toner(
            printer::SupplyState::Low,
        )));
        assert!(!applied);
        assert!(status.printer.is_none());
    }

    #[test]
    fn test_retract_bin_change_grows_bins() {
        let mut status = DeviceStatus {
            printer: Some(PrinterStatus::default()),
            ..Default::default()
        };
        assert!(status.apply(&StatusChange::Printer(PrinterProperty::RetractBin {
            bin: 1,
            change: RetractBinProperty::State(RetractBinState::Full),
        })));
        let bins = &status.printer.as_ref().unwrap().retract_bins;
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[1].state, RetractBinState::Full);
    }

    #[test]
    fn test_changes_cover_common_properties() {
        let status = DeviceStatus::default();
        let changes = status.changes();
        assert_eq!(changes.len(), 5);
        assert!(changes.iter().all(|c| c.interface() == InterfaceName::Common));
    }
}
