use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Acceptor {
    Ok,
    State,
    Stop,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Media {
    Present,
    NotPresent,
    Jammed,
    Unknown,
    Position,
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

/// image scanner 與 MICR reader 共用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scanner {
    Ok,
    Fading,
    Inoperative,
    Unknown,
}

/// stacker 與 rebuncher 共用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stacker {
    Empty,
    NotEmpty,
    Full,
    Inoperative,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaFeeder {
    Empty,
    NotEmpty,
    Inoperative,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Shutter {
    Closed,
    Open,
    Jammed,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PositionStatus {
    Empty,
    NotEmpty,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transport {
    Ok,
    Inoperative,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransportMediaStatus {
    Empty,
    NotEmpty,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JammedShutterPosition {
    NotJammed,
    Open,
    PartiallyOpen,
    Closed,
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckPositionStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shutter: Option<Shutter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_status: Option<PositionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<Transport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_media_status: Option<TransportMediaStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jammed_shutter_position: Option<JammedShutterPosition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckPositions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<CheckPositionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<CheckPositionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refused: Option<CheckPositionStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptor: Option<Acceptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toner: Option<Supply>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ink: Option<Supply>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_image_scanner: Option<Scanner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_image_scanner: Option<Scanner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub micr_reader: Option<Scanner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacker: Option<Stacker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebuncher: Option<Stacker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_feeder: Option<MediaFeeder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<CheckPositions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyReplenishCommand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toner: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ink: Option<bool>,
}
