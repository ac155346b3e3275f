//! VendorMode and VendorApplication.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VendorModeDeviceState {
    #[default]
    Online,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VendorModeServiceState {
    EnterPending,
    Active,
    ExitPending,
    #[default]
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VendorModeStatus {
    pub device: VendorModeDeviceState,
    pub service: VendorModeServiceState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorModeProperty {
    Device(VendorModeDeviceState),
    Service(VendorModeServiceState),
}

impl VendorModeStatus {
    pub fn apply(&mut self, property: &VendorModeProperty) {
        match *property {
            VendorModeProperty::Device(v) => self.device = v,
            VendorModeProperty::Service(v) => self.service = v,
        }
    }

    pub fn properties(&self) -> Vec<VendorModeProperty> {
        vec![
            VendorModeProperty::Device(self.device),
            VendorModeProperty::Service(self.service),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AccessLevel {
    #[default]
    NotActive,
    Basic,
    Intermediate,
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VendorApplicationStatus {
    pub access_level: AccessLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorApplicationProperty {
    AccessLevel(AccessLevel),
}

impl VendorApplicationStatus {
    pub fn apply(&mut self, property: &VendorApplicationProperty) {
        match *property {
            VendorApplicationProperty::AccessLevel(v) => self.access_level = v,
        }
    }

    pub fn properties(&self) -> Vec<VendorApplicationProperty> {
        vec![VendorApplicationProperty::AccessLevel(self.access_level)]
    }
}
