use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modes {
    pub cash_accept: bool,
    pub check_accept: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedMediaStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modes: Option<Modes>,
}
