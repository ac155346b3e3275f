use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DoorKind {
    FrontCabinet,
    LeftCabinet,
    RightCabinet,
    RearCabinet,
    Safe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorState {
    #[default]
    NotAvailable,
    Closed,
    Open,
    Locked,
    Bolted,
    Tampered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatorSwitchState {
    #[default]
    NotAvailable,
    Run,
    Maintenance,
    Supervisor,
}

/// Sensors and indicators reported as on/off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SwitchSensor {
    Tamper,
    InternalTamper,
    Seismic,
    Heat,
    BootSwitch,
    OperatorCallButton,
    FasciaMicrophone,
    Heating,
    ConsumerDisplayBacklight,
    SignageDisplay,
    AudibleAlarm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchState {
    #[default]
    NotAvailable,
    On,
    Off,
}

/// Sensors reported as present/notPresent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PresenceSensor {
    Proximity,
    EnhancedAudio,
    HeadsetMicrophone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresenceState {
    #[default]
    NotAvailable,
    Present,
    NotPresent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmbientLightState {
    #[default]
    NotAvailable,
    VeryDark,
    Dark,
    MediumLight,
    Light,
    VeryLight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsumerDisplayState {
    #[default]
    NotAvailable,
    Off,
    On,
    DisplayError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandsetState {
    #[default]
    NotAvailable,
    OnTheHook,
    OffTheHook,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VandalShieldState {
    #[default]
    NotAvailable,
    Closed,
    Open,
    Locked,
    Service,
    Keyboard,
    PartiallyOpen,
    Jammed,
    Tampered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenClosedState {
    #[default]
    NotAvailable,
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioSignal {
    Keypress,
    Exclamation,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AudioStatus {
    pub rate: SwitchState,
    pub signal: Option<AudioSignal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpsStatus {
    pub good: bool,
    pub low: bool,
    pub engaged: bool,
    pub powering: bool,
    pub recovered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioControlState {
    #[default]
    NotAvailable,
    PublicAudioManual,
    PublicAudioAuto,
    PublicAudioSemiAuto,
    PrivateAudioManual,
    PrivateAudioAuto,
    PrivateAudioSemiAuto,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuxiliariesStatus {
    pub doors: BTreeMap<DoorKind, DoorState>,
    pub operator_switch: OperatorSwitchState,
    pub switches: BTreeMap<SwitchSensor, SwitchState>,
    pub presence: BTreeMap<PresenceSensor, PresenceState>,
    pub ambient_light: AmbientLightState,
    pub consumer_display: ConsumerDisplayState,
    pub handset: HandsetState,
    pub vandal_shield: VandalShieldState,
    pub open_closed_indicator: OpenClosedState,
    pub audio: AudioStatus,
    /// None 代表沒有 UPS
    pub ups: Option<UpsStatus>,
    /// 0 代表不支援
    pub volume: u32,
    pub microphone_volume: u32,
    pub enhanced_audio_control: AudioControlState,
    pub enhanced_microphone_control: AudioControlState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxiliariesProperty {
    Door { door: DoorKind, state: DoorState },
    OperatorSwitch(OperatorSwitchState),
    Switch { sensor: SwitchSensor, state: SwitchState },
    Presence { sensor: PresenceSensor, state: PresenceState },
    AmbientLight(AmbientLightState),
    ConsumerDisplay(ConsumerDisplayState),
    Handset(HandsetState),
    VandalShield(VandalShieldState),
    OpenClosedIndicator(OpenClosedState),
    AudioRate(SwitchState),
    AudioSignal(Option<AudioSignal>),
    Ups(Option<UpsStatus>),
    Volume(u32),
    MicrophoneVolume(u32),
    EnhancedAudioControl(AudioControlState),
    EnhancedMicrophoneControl(AudioControlState),
}

impl AuxiliariesStatus {
    pub fn apply(&mut self, property: &AuxiliariesProperty) {
        match *property {
            AuxiliariesProperty::Door { door, state } => {
                self.doors.insert(door, state);
            }
            AuxiliariesProperty::OperatorSwitch(v) => self.operator_switch = v,
            AuxiliariesProperty::Switch { sensor, state } => {
                self.switches.insert(sensor, state);
            }
            AuxiliariesProperty::Presence { sensor, state } => {
                self.presence.insert(sensor, state);
            }
            AuxiliariesProperty::AmbientLight(v) => self.ambient_light = v,
            AuxiliariesProperty::ConsumerDisplay(v) => self.consumer_display = v,
            AuxiliariesProperty::Handset(v) => self.handset = v,
            AuxiliariesProperty::VandalShield(v) => self.vandal_shield = v,
            AuxiliariesProperty::OpenClosedIndicator(v) => self.open_closed_indicator = v,
            AuxiliariesProperty::AudioRate(v) => self.audio.rate = v,
            AuxiliariesProperty::AudioSignal(v) => self.audio.signal = v,
            AuxiliariesProperty::Ups(v) => self.ups = v,
            AuxiliariesProperty::Volume(v) => self.volume = v,
            AuxiliariesProperty::MicrophoneVolume(v) => self.microphone_volume = v,
            AuxiliariesProperty::EnhancedAudioControl(v) => self.enhanced_audio_control = v,
            AuxiliariesProperty::EnhancedMicrophoneControl(v) => {
                self.enhanced_microphone_control = v
            }
        }
    }

    pub fn properties(&self) -> Vec<AuxiliariesProperty> {
        let mut properties: Vec<AuxiliariesProperty> = self
            .doors
            .iter()
            .map(|(door, state)| AuxiliariesProperty::Door {
                door: *door,
                state: *state,
            })
            .collect();
        properties.extend(self.switches.iter().map(|(sensor, state)| {
            AuxiliariesProperty::Switch {
                sensor: *sensor,
                state: *state,
            }
        }));
        properties.extend(self.presence.iter().map(|(sensor, state)| {
            AuxiliariesProperty::Presence {
                sensor: *sensor,
                state: *state,
            }
        }));
        properties.extend([
            AuxiliariesProperty::OperatorSwitch(self.operator_switch),
            AuxiliariesProperty::AmbientLight(self.ambient_light),
            AuxiliariesProperty::ConsumerDisplay(self.consumer_display),
            AuxiliariesProperty::Handset(self.handset),
            AuxiliariesProperty::VandalShield(self.vandal_shield),
            AuxiliariesProperty::OpenClosedIndicator(self.open_closed_indicator),
            AuxiliariesProperty::AudioRate(self.audio.rate),
            AuxiliariesProperty::AudioSignal(self.audio.signal),
            AuxiliariesProperty::Ups(self.ups),
            AuxiliariesProperty::Volume(self.volume),
            AuxiliariesProperty::MicrophoneVolume(self.microphone_volume),
            AuxiliariesProperty::EnhancedAudioControl(self.enhanced_audio_control),
            AuxiliariesProperty::EnhancedMicrophoneControl(self.enhanced_microphone_control),
        ]);
        properties
    }
}
