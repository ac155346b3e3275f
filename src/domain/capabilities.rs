//! Vendor-neutral capabilities a device class reports.

use crate::domain::status::cash::OutputPosition;
use crate::domain::status::vendor::AccessLevel;
use crate::messages::InterfaceName;
use std::collections::{BTreeMap, BTreeSet};

/// Commands and events of one interface, by short name (`"RetractMedia"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceSupport {
    pub commands: Vec<String>,
    pub events: Vec<String>,
    pub maximum_requests: Option<u32>,
    pub authentication_required: Vec<String>,
}

impl InterfaceSupport {
    pub fn new<C, E>(commands: C, events: E) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            commands: commands.into_iter().map(Into::into).collect(),
            events: events.into_iter().map(Into::into).collect(),
            maximum_requests: None,
            authentication_required: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceInformation {
    pub model_name: Option<String>,
    pub serial_number: Option<String>,
    pub revision_number: Option<String>,
    pub model_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonCapabilities {
    pub service_version: Option<String>,
    pub device_information: Vec<DeviceInformation>,
    pub power_save_control: bool,
    pub anti_fraud_module: bool,
    pub interfaces: BTreeMap<InterfaceName, InterfaceSupport>,
    pub synchronizable_commands: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardReaderType {
    Motor,
    Swipe,
    Dip,
    LatchedDip,
    Contactless,
    IntelligentContactless,
    Permanent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Track {
    Track1,
    Track2,
    Track3,
    Watermark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityType {
    NotSupported,
    Mm,
    Cim86,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerOption {
    NotSupported,
    Exit,
    Retain,
    ExitThenRetain,
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardReaderCapabilities {
    pub device_type: CardReaderType,
    pub read_tracks: BTreeSet<Track>,
    pub write_tracks: BTreeSet<Track>,
    pub security_type: SecurityType,
    pub power_on_option: PowerOption,
    pub power_off_option: PowerOption,
    pub flux_sensor_programmable: bool,
    pub read_write_access_following_exit: bool,
    pub card_taken_sensor: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispenserType {
    TellerBill,
    SelfServiceBill,
    TellerCoin,
    SelfServiceCoin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashDispenserCapabilities {
    pub dispenser_type: DispenserType,
    pub max_dispense_items: u32,
    pub shutter_control: bool,
    pub intermediate_stacker: u32,
    pub items_taken_sensor: bool,
    pub output_positions: BTreeSet<OutputPosition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PrinterType {
    Receipt,
    Passbook,
    Journal,
    Document,
    Scanner,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrinterCapabilities {
    pub types: BTreeSet<PrinterType>,
    pub retract_bins: u32,
    pub max_retract: Vec<u32>,
    pub media_taken: bool,
}

/// 空集合代表不支援 access level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorApplicationCapabilities {
    pub supported_access_levels: BTreeSet<AccessLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ItemInfoType {
    SerialNumber,
    Signature,
    ImageFile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CashManagementCapabilities {
    pub safe_door: bool,
    pub cash_box: bool,
    pub exchange_by_hand: bool,
    pub item_info_types: BTreeSet<ItemInfoType>,
    pub classification_list: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyCheckMode {
    KcvSelf,
    KcvZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DesKeyLength {
    Single,
    Double,
    Triple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyBlockFormat {
    A,
    B,
    C,
    D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SymmetricKeyMethod {
    FixedKey,
    MasterKey,
    TripleDesDukpt,
}

/// keyUsage → algorithm → modeOfUse → restricted key usage (if any)
pub type KeyAttributes = BTreeMap<String, BTreeMap<String, BTreeMap<String, Option<String>>>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyManagementCapabilities {
    pub max_keys: u32,
    pub key_check_modes: BTreeSet<KeyCheckMode>,
    pub hsm_vendor: Option<String>,
    pub des_key_lengths: BTreeSet<DesKeyLength>,
    pub key_block_import_formats: BTreeSet<KeyBlockFormat>,
    pub key_import_through_parts: bool,
    pub symmetric_key_methods: BTreeSet<SymmetricKeyMethod>,
    pub key_attributes: KeyAttributes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AutoBeepCapability {
    ActiveAvailable,
    ActiveSelectable,
    InactiveAvailable,
    InactiveSelectable,
}

/// Touch frame of an encrypting touch screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EtsCapability {
    pub x_pos: u32,
    pub y_pos: u32,
    pub x_size: u32,
    pub y_size: u32,
    pub maximum_touch_frames: u32,
    pub maximum_touch_keys: u32,
    pub float_x: bool,
    pub float_y: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardCapabilities {
    pub auto_beep: BTreeSet<AutoBeepCapability>,
    pub ets: Vec<EtsCapability>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextTerminalType {
    #[default]
    Fixed,
    Removable,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTerminalCapabilities {
    pub terminal_type: TextTerminalType,
    /// (width, height) in characters
    pub resolutions: Vec<(u32, u32)>,
    pub key_lock: bool,
    pub cursor: bool,
    pub forms: bool,
}

/// Everything the device reports; `common` is mandatory for a usable service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceCapabilities {
    pub common: Option<CommonCapabilities>,
    pub card_reader: Option<CardReaderCapabilities>,
    pub cash_dispenser: Option<CashDispenserCapabilities>,
    pub cash_management: Option<CashManagementCapabilities>,
    pub key_management: Option<KeyManagementCapabilities>,
    pub keyboard: Option<KeyboardCapabilities>,
    pub text_terminal: Option<TextTerminalCapabilities>,
    pub printer: Option<PrinterCapabilities>,
    pub vendor_application: Option<VendorApplicationCapabilities>,
}
