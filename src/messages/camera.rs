use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaState {
    Ok,
    High,
    Full,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CameraState {
    Ok,
    Inop,
    Unknown,
}

/// Values keyed by camera location; vendor locations land in `extended`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationMap<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_slot: Option<T>,
    #[serde(flatten)]
    pub extended: BTreeMap<String, T>,
}

impl<T> Default for LocationMap<T> {
    fn default() -> Self {
        Self {
            room: None,
            person: None,
            exit_slot: None,
            extended: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<LocationMap<MediaState>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cameras: Option<LocationMap<CameraState>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pictures: Option<LocationMap<u32>>,
}
