use super::auxiliaries::OnOff;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextTerminalStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<OnOff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_lock: Option<OnOff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_size_x: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_size_y: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextTerminalType {
    Fixed,
    Removable,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub size_x: u32,
    pub size_y: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextTerminalCapabilities {
    #[serde(rename = "type")]
    pub terminal_type: TextTerminalType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resolutions: Vec<Resolution>,
    pub key_lock: bool,
    pub cursor: bool,
    pub forms: bool,
}
