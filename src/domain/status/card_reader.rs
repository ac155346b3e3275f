#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaState {
    #[default]
    Unknown,
    Present,
    NotPresent,
    Jammed,
    Entering,
    Latched,
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecurityState {
    #[default]
    NotSupported,
    NotReady,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChipPowerState {
    #[default]
    Unknown,
    Online,
    Busy,
    PoweredOff,
    NoDevice,
    HardwareError,
    NoCard,
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModuleState {
    Ok,
    Inoperable,
    Unknown,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardReaderStatus {
    pub media: MediaState,
    pub security: SecurityState,
    pub chip_power: ChipPowerState,
    pub chip_module: ModuleState,
    pub mag_write_module: ModuleState,
    pub front_image_module: ModuleState,
    pub back_image_module: ModuleState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardReaderProperty {
    Media(MediaState),
    Security(SecurityState),
    ChipPower(ChipPowerState),
    ChipModule(ModuleState),
    MagWriteModule(ModuleState),
    FrontImageModule(ModuleState),
    BackImageModule(ModuleState),
}

impl CardReaderStatus {
    pub fn apply(&mut self, property: &CardReaderProperty) {
        match *property {
            CardReaderProperty::Media(v) => self.media = v,
            CardReaderProperty::Security(v) => self.security = v,
            CardReaderProperty::ChipPower(v) => self.chip_power = v,
            CardReaderProperty::ChipModule(v) => self.chip_module = v,
            CardReaderProperty::MagWriteModule(v) => self.mag_write_module = v,
            CardReaderProperty::FrontImageModule(v) => self.front_image_module = v,
            CardReaderProperty::BackImageModule(v) => self.back_image_module = v,
        }
    }

    pub fn properties(&self) -> Vec<CardReaderProperty> {
        vec![
            CardReaderProperty::Media(self.media),
            CardReaderProperty::Security(self.security),
            CardReaderProperty::ChipPower(self.chip_power),
            CardReaderProperty::ChipModule(self.chip_module),
            CardReaderProperty::MagWriteModule(self.mag_write_module),
            CardReaderProperty::FrontImageModule(self.front_image_module),
            CardReaderProperty::BackImageModule(self.back_image_module),
        ]
    }
}
