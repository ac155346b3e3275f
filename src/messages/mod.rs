//! XFS4IoT wire schema: envelope, completion codes and per-interface payloads.

pub mod auxiliaries;
pub mod barcode_reader;
pub mod biometric;
pub mod camera;
pub mod card_reader;
pub mod cash_acceptor;
pub mod cash_dispenser;
pub mod cash_management;
pub mod check;
pub mod common;
pub mod completion;
pub mod envelope;
pub mod key_management;
pub mod mixed_media;
pub mod printer;
pub mod service_publisher;
pub mod status;
pub mod text_terminal;
pub mod vendor;

pub use completion::{Completion, CompletionCode, NoPayload};
pub use envelope::{AcknowledgeStatus, Envelope, Header, MessageKind};
pub use status::StatusPayload;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterfaceName {
    Common,
    CardReader,
    CashDispenser,
    CashManagement,
    CashAcceptor,
    Check,
    MixedMedia,
    Crypto,
    KeyManagement,
    Keyboard,
    PinPad,
    TextTerminal,
    Printer,
    Lights,
    Auxiliaries,
    VendorMode,
    VendorApplication,
    BarcodeReader,
    Biometric,
    Camera,
    Storage,
    ServicePublisher,
}

impl InterfaceName {
    pub const ALL: [InterfaceName; 22] = [
        Self::Common,
        Self::CardReader,
        Self::CashDispenser,
        Self::CashManagement,
        Self::CashAcceptor,
        Self::Check,
        Self::MixedMedia,
        Self::Crypto,
        Self::KeyManagement,
        Self::Keyboard,
        Self::PinPad,
        Self::TextTerminal,
        Self::Printer,
        Self::Lights,
        Self::Auxiliaries,
        Self::VendorMode,
        Self::VendorApplication,
        Self::BarcodeReader,
        Self::Biometric,
        Self::Camera,
        Self::Storage,
        Self::ServicePublisher,
    ];

    /// Message name prefix, e.g. `CardReader` in `CardReader.ReadRawData`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::CardReader => "CardReader",
            Self::CashDispenser => "CashDispenser",
            Self::CashManagement => "CashManagement",
            Self::CashAcceptor => "CashAcceptor",
            Self::Check => "Check",
            Self::MixedMedia => "MixedMedia",
            Self::Crypto => "Crypto",
            Self::KeyManagement => "KeyManagement",
            Self::Keyboard => "Keyboard",
            Self::PinPad => "PinPad",
            Self::TextTerminal => "TextTerminal",
            Self::Printer => "Printer",
            Self::Lights => "Lights",
            Self::Auxiliaries => "Auxiliaries",
            Self::VendorMode => "VendorMode",
            Self::VendorApplication => "VendorApplication",
            Self::BarcodeReader => "BarcodeReader",
            Self::Biometric => "Biometric",
            Self::Camera => "Camera",
            Self::Storage => "Storage",
            Self::ServicePublisher => "ServicePublisher",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.prefix() == prefix)
    }

    /// Interface part of a full message name.
    pub fn of_message(message_name: &str) -> Option<Self> {
        message_name
            .split_once('.')
            .and_then(|(prefix, _)| Self::from_prefix(prefix))
    }
}

impl fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_prefix_round_trip() {
        for name in InterfaceName::ALL {
            assert_eq!(InterfaceName::from_prefix(name.prefix()), Some(name));
        }
        assert_eq!(
            InterfaceName::of_message("Printer.RetractMedia"),
            Some(InterfaceName::Printer)
        );
        assert_eq!(InterfaceName::of_message("Nope.Thing"), None);
    }

    #[test]
    fn test_interface_wire_name_is_camel_case() {
        assert_eq!(
            serde_json::to_value(InterfaceName::CardReader).unwrap(),
            serde_json::json!("cardReader")
        );
    }
}
