use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scanner {
    On,
    Off,
    Inoperative,
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeReaderStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanner: Option<Scanner>,
}
