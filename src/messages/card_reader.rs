use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Media {
    Present,
    NotPresent,
    Jammed,
    Entering,
    Latched,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Security {
    NotReady,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChipPower {
    Online,
    Busy,
    PoweredOff,
    NoDevice,
    HardwareError,
    NoCard,
    Unknown,
}

/// chip、magWrite、frontImage、backImage 模組共用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModuleState {
    Ok,
    Inoperable,
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardReaderStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Security>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chip_power: Option<ChipPower>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chip_module: Option<ModuleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mag_write_module: Option<ModuleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_image_module: Option<ModuleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_image_module: Option<ModuleState>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardReaderType {
    Motor,
    Swipe,
    Dip,
    LatchedDip,
    Contactless,
    IntelligentContactless,
    Permanent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SecurityType {
    Mm,
    Cim86,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PowerOption {
    Exit,
    Retain,
    ExitThenRetain,
    Transport,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracks {
    pub track1: bool,
    pub track2: bool,
    pub track3: bool,
    pub watermark: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardReaderCapabilities {
    #[serde(rename = "type")]
    pub device_type: CardReaderType,
    pub read_tracks: Tracks,
    pub write_tracks: Tracks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_type: Option<SecurityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_on_option: Option<PowerOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_off_option: Option<PowerOption>,
    pub flux_sensor_programmable: bool,
    pub read_write_access_following_exit: bool,
    pub card_taken_sensor: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetKeyCommand {
    /// Base64 編碼的 key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_value: Option<String>,
}
