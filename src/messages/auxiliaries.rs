use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OnOff {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Presence {
    Present,
    NotPresent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Door {
    Closed,
    Open,
    Locked,
    Bolted,
    Tampered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperatorSwitch {
    Run,
    Maintenance,
    Supervisor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AmbientLight {
    VeryDark,
    Dark,
    MediumLight,
    Light,
    VeryLight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsumerDisplay {
    Off,
    On,
    DisplayError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Handset {
    OnTheHook,
    OffTheHook,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VandalShield {
    Closed,
    Open,
    Locked,
    Service,
    Keyboard,
    PartiallyOpen,
    Jammed,
    Tampered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpenClosed {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AudioSignal {
    Keypress,
    Exclamation,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<OnOff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<AudioSignal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ups {
    pub low: bool,
    pub engaged: bool,
    pub powering: bool,
    pub recovered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AudioControl {
    PublicAudioManual,
    PublicAudioAuto,
    PublicAudioSemiAuto,
    PrivateAudioManual,
    PrivateAudioAuto,
    PrivateAudioSemiAuto,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuxiliariesStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_switch: Option<OperatorSwitch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tamper_sensor: Option<OnOff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_tamper_sensor: Option<OnOff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seismic_sensor: Option<OnOff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_sensor: Option<OnOff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_sensor: Option<Presence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambient_light_sensor: Option<AmbientLight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_audio_sensor: Option<Presence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_switch_sensor: Option<OnOff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_display_sensor: Option<ConsumerDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_call_button_sensor: Option<OnOff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handset_sensor: Option<Handset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headset_microphone_sensor: Option<Presence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fascia_microphone_sensor: Option<OnOff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cabinet_front_door: Option<Door>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cabinet_left_door: Option<Door>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cabinet_right_door: Option<Door>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cabinet_rear_door: Option<Door>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe_door: Option<Door>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vandal_shield: Option<VandalShield>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_closed_indicator: Option<OpenClosed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heating: Option<OnOff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_display_backlight: Option<OnOff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signage_display: Option<OnOff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ups: Option<Ups>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audible_alarm: Option<OnOff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_audio_control: Option<AudioControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_microphone_control: Option<AudioControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microphone_volume: Option<u32>,
}
