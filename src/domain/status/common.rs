#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceState {
    #[default]
    Online,
    Offline,
    PowerOff,
    NoDevice,
    HardwareError,
    UserError,
    DeviceBusy,
    FraudAttempt,
    PotentialFraud,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionState {
    InPosition,
    NotInPosition,
    Unknown,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AntiFraudModuleState {
    #[default]
    NotSupported,
    Ok,
    Inoperable,
    DeviceDetected,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExchangeState {
    #[default]
    NotSupported,
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommonStatus {
    pub device: DeviceState,
    pub device_position: PositionState,
    pub power_save_recovery_time: u32,
    pub anti_fraud_module: AntiFraudModuleState,
    pub exchange: ExchangeState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonProperty {
    Device(DeviceState),
    DevicePosition(PositionState),
    PowerSaveRecoveryTime(u32),
    AntiFraudModule(AntiFraudModuleState),
    Exchange(ExchangeState),
}

impl CommonStatus {
    pub fn apply(&mut self, property: &CommonProperty) {
        match *property {
            CommonProperty::Device(v) => self.device = v,
            CommonProperty::DevicePosition(v) => self.device_position = v,
            CommonProperty::PowerSaveRecoveryTime(v) => self.power_save_recovery_time = v,
            CommonProperty::AntiFraudModule(v) => self.anti_fraud_module = v,
            CommonProperty::Exchange(v) => self.exchange = v,
        }
    }

    pub fn properties(&self) -> Vec<CommonProperty> {
        vec![
            CommonProperty::Device(self.device),
            CommonProperty::DevicePosition(self.device_position),
            CommonProperty::PowerSaveRecoveryTime(self.power_save_recovery_time),
            CommonProperty::AntiFraudModule(self.anti_fraud_module),
            CommonProperty::Exchange(self.exchange),
        ]
    }
}
