//! Internal status → wire status.
//!
//! Every mapping is an exhaustive `match`: a new internal member does not
//! compile until it is given a wire value or declared absent.

use crate::domain::status::{DeviceStatus, StatusChange};
use crate::messages::status::non_empty;
use crate::messages::StatusPayload;

/// Maps an internal value to its wire value; `None` means "leave the property out".
pub trait ToWire {
    type Wire;
    fn to_wire(&self) -> Option<Self::Wire>;
}

macro_rules! wire_enum {
    ($dm:ident::$from:ident => $wm:ident::$to:ident,
     same [$($same:ident),* $(,)?]
     $(, map [$($a:ident => $b:ident),* $(,)?])?
     $(, absent [$($n:ident),* $(,)?])?
    ) => {
        impl $crate::core::status_mapping::ToWire for $dm::$from {
            type Wire = $wm::$to;

            fn to_wire(&self) -> Option<Self::Wire> {
                match self {
                    $($dm::$from::$same => Some($wm::$to::$same),)*
                    $($($dm::$from::$a => Some($wm::$to::$b),)*)?
                    $($($dm::$from::$n => None,)*)?
                }
            }
        }
    };
}

mod auxiliaries;
mod camera;
mod card_reader;
mod cash;
mod check;
mod common;
mod printer;
mod readers;
mod terminal;
mod vendor;

/// Negative numbers are "not supported" sentinels.
fn non_negative(value: i32) -> Option<u32> {
    u32::try_from(value).ok()
}

/// Zero is the "not supported" sentinel.
fn non_zero(value: u32) -> Option<u32> {
    (value != 0).then_some(value)
}

fn write_change(change: &StatusChange, payload: &mut StatusPayload) {
    match change {
        StatusChange::Common(p) => common::write(p, payload.common.get_or_insert_with(Default::default)),
        StatusChange::CardReader(p) => {
            card_reader::write(p, payload.card_reader.get_or_insert_with(Default::default))
        }
        StatusChange::CashDispenser(p) => {
            cash::write_dispenser(p, payload.cash_dispenser.get_or_insert_with(Default::default))
        }
        StatusChange::CashManagement(p) => cash::write_management(p, payload),
        StatusChange::CashAcceptor(p) => {
            cash::write_acceptor(p, payload.cash_acceptor.get_or_insert_with(Default::default))
        }
        StatusChange::Check(p) => check::write(p, payload.check.get_or_insert_with(Default::default)),
        StatusChange::MixedMedia(p) => {
            check::write_mixed_media(p, payload.mixed_media.get_or_insert_with(Default::default))
        }
        StatusChange::KeyManagement(p) => terminal::write_key_management(
            p,
            payload.key_management.get_or_insert_with(Default::default),
        ),
        StatusChange::Keyboard(p) => {
            terminal::write_keyboard(p, payload.keyboard.get_or_insert_with(Default::default))
        }
        StatusChange::TextTerminal(p) => terminal::write_text_terminal(
            p,
            payload.text_terminal.get_or_insert_with(Default::default),
        ),
        StatusChange::Printer(p) => {
            printer::write(p, payload.printer.get_or_insert_with(Default::default))
        }
        StatusChange::Auxiliaries(p) => {
            auxiliaries::write(p, payload.auxiliaries.get_or_insert_with(Default::default))
        }
        StatusChange::VendorMode(p) => {
            vendor::write_vendor_mode(p, payload.vendor_mode.get_or_insert_with(Default::default))
        }
        StatusChange::VendorApplication(p) => vendor::write_vendor_application(
            p,
            payload.vendor_application.get_or_insert_with(Default::default),
        ),
        StatusChange::BarcodeReader(p) => readers::write_barcode_reader(
            p,
            payload.barcode_reader.get_or_insert_with(Default::default),
        ),
        StatusChange::Biometric(p) => {
            readers::write_biometric(p, payload.biometric.get_or_insert_with(Default::default))
        }
        StatusChange::Camera(p) => camera::write(p, payload.camera.get_or_insert_with(Default::default)),
    }
}

/// 把只有空物件的 interface 拿掉
fn prune(payload: StatusPayload) -> StatusPayload {
    StatusPayload {
        common: payload.common.and_then(non_empty),
        card_reader: payload.card_reader.and_then(non_empty),
        cash_dispenser: payload.cash_dispenser.and_then(non_empty),
        cash_management: payload.cash_management.and_then(non_empty),
        cash_acceptor: payload.cash_acceptor.and_then(non_empty),
        check: payload.check.and_then(non_empty),
        mixed_media: payload.mixed_media.and_then(non_empty),
        key_management: payload.key_management.and_then(non_empty),
        keyboard: payload.keyboard.and_then(non_empty),
        text_terminal: payload.text_terminal.and_then(non_empty),
        printer: payload.printer.and_then(non_empty),
        auxiliaries: payload.auxiliaries.and_then(non_empty),
        vendor_mode: payload.vendor_mode.and_then(non_empty),
        vendor_application: payload.vendor_application.and_then(non_empty),
        barcode_reader: payload.barcode_reader.and_then(non_empty),
        biometric: payload.biometric.and_then(non_empty),
        camera: payload.camera.and_then(non_empty),
    }
}

/// Wire payload carrying only the changed property; `None` when nothing maps.
pub fn changed_payload(change: &StatusChange) -> Option<StatusPayload> {
    let mut payload = StatusPayload::default();
    write_change(change, &mut payload);
    if let Some(printer) = payload.printer.as_mut() {
        printer::keep_changed_bin(printer);
    }
    non_empty(prune(payload))
}

/// Complete wire status for `Common.Status`.
pub fn full_payload(status: &DeviceStatus) -> StatusPayload {
    let mut payload = StatusPayload::default();
    for change in status.changes() {
        write_change(&change, &mut payload);
    }
    prune(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status::common::{CommonProperty, DeviceState, ExchangeState};
    use crate::domain::status::terminal::{TextTerminalProperty, TextTerminalStatus};
    use serde_json::json;

    #[test]
    fn test_only_changed_property_is_populated() {
        let payload =
            changed_payload(&StatusChange::Common(CommonProperty::Device(DeviceState::DeviceBusy)))
                .unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"common": {"device": "deviceBusy"}})
        );
    }

    #[test]
    fn test_not_supported_yields_no_payload() {
        assert!(changed_payload(&StatusChange::Common(CommonProperty::Exchange(
            ExchangeState::NotSupported
        )))
        .is_none());
        assert!(changed_payload(&StatusChange::TextTerminal(
            TextTerminalProperty::DisplaySizeX(-1)
        ))
        .is_none());
    }

    #[test]
    fn test_full_payload_skips_unsupported_properties() {
        let status = DeviceStatus {
            text_terminal: Some(TextTerminalStatus {
                display_size_x: 40,
                ..Default::default()
            }),
            ..Default::default()
        };
        let value = serde_json::to_value(full_payload(&status)).unwrap();
        assert_eq!(value["common"]["device"], "online");
        assert_eq!(value["common"]["powerSaveRecoveryTime"], 0);
        assert!(value["common"].get("exchange").is_none());
        assert_eq!(value["textTerminal"], json!({"displaySizeX": 40}));
    }
}
