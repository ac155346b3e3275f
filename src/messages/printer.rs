use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Media {
    Present,
    NotPresent,
    Jammed,
    Entering,
    Retracted,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaperSupply {
    Full,
    Low,
    Out,
    Jammed,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaperType {
    Single,
    Dual,
    Unknown,
}

/// toner 與 ink 共用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Supply {
    Full,
    Low,
    Out,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Lamp {
    Ok,
    Fading,
    Inop,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RetractBinState {
    Ok,
    Full,
    High,
    Missing,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlackMarkMode {
    On,
    Off,
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetractBin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<RetractBinState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// Values keyed by paper source; vendor sources land in `extended`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMap<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aux: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aux2: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub park: Option<T>,
    #[serde(flatten)]
    pub extended: BTreeMap<String, T>,
}

impl<T> Default for SourceMap<T> {
    fn default() -> Self {
        Self {
            upper: None,
            lower: None,
            external: None,
            aux: None,
            aux2: None,
            park: None,
            extended: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrinterStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper: Option<SourceMap<PaperSupply>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_type: Option<SourceMap<PaperType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toner: Option<Supply>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ink: Option<Supply>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lamp: Option<Lamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retract_bins: Option<Vec<RetractBin>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_on_stacker: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_mark_mode: Option<BlackMarkMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrinterTypes {
    pub receipt: bool,
    pub passbook: bool,
    pub journal: bool,
    pub document: bool,
    pub scanner: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrinterCapabilities {
    #[serde(rename = "type")]
    pub printer_type: PrinterTypes,
    pub retract_bins: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub max_retract: Vec<u32>,
    pub media_taken: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetractMediaCommand {
    /// `transport` 或 `unitN`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_control: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RetractMediaErrorCode {
    NoMediaPresent,
    RetractBinFull,
    MediaJammed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetractMediaCompletion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<RetractMediaErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAutoRetractedEvent {
    /// `transport`、`jammed` 或 `unitN`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}
