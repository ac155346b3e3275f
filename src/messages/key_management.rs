//! KeyManagement and Keyboard.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EncryptionState {
    Ready,
    NotReady,
    NotInitialized,
    Initialized,
    Undefined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CertificateState {
    Unknown,
    Primary,
    Secondary,
    NotReady,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyManagementStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_state: Option<EncryptionState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_state: Option<CertificateState>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoBeep {
    pub active_available: bool,
    pub inactive_available: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_beep: Option<AutoBeep>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivationAlgorithms {
    pub chip_zka: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyCheckModes {
    #[serde(rename = "self")]
    pub kcv_self: bool,
    #[serde(rename = "zero")]
    pub kcv_zero: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesKeyLength {
    pub single: bool,
    pub double: bool,
    pub triple: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBlockImportFormats {
    #[serde(rename = "A")]
    pub a: bool,
    #[serde(rename = "B")]
    pub b: bool,
    #[serde(rename = "C")]
    pub c: bool,
    #[serde(rename = "D")]
    pub d: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymmetricKeyManagementMethods {
    pub fixed_key: bool,
    pub master_key: bool,
    #[serde(rename = "tdesDukpt")]
    pub tdes_dukpt: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyManagementCapabilities {
    pub key_num: u32,
    pub derivation_algorithms: DerivationAlgorithms,
    pub key_check_modes: KeyCheckModes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsm_vendor: Option<String>,
    pub des_key_length: DesKeyLength,
    pub key_block_import_formats: KeyBlockImportFormats,
    pub key_import_through_parts: bool,
    pub symmetric_key_management_methods: SymmetricKeyManagementMethods,
    /// keyUsage → algorithm → modeOfUse
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub key_attributes: BTreeMap<String, BTreeMap<String, BTreeMap<String, KeyAttribute>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoBeepCapabilities {
    pub active_available: bool,
    pub active_selectable: bool,
    pub inactive_available: bool,
    pub inactive_selectable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtsFloat {
    pub x: bool,
    pub y: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtsCaps {
    pub x_pos: u32,
    pub y_pos: u32,
    pub x_size: u32,
    pub y_size: u32,
    pub maximum_touch_frames: u32,
    pub maximum_touch_keys: u32,
    pub float: EtsFloat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardCapabilities {
    pub auto_beep: AutoBeepCapabilities,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ets_caps: Vec<EtsCaps>,
}
