//! BarcodeReader and Biometric.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScannerState {
    On,
    Off,
    Inoperative,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BarcodeReaderStatus {
    pub scanner: ScannerState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeReaderProperty {
    Scanner(ScannerState),
}

impl BarcodeReaderStatus {
    pub fn apply(&mut self, property: &BarcodeReaderProperty) {
        match *property {
            BarcodeReaderProperty::Scanner(v) => self.scanner = v,
        }
    }

    pub fn properties(&self) -> Vec<BarcodeReaderProperty> {
        vec![BarcodeReaderProperty::Scanner(self.scanner)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubjectState {
    Present,
    NotPresent,
    Unknown,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataPersistence {
    Persist,
    Clear,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BiometricStatus {
    pub subject: SubjectState,
    pub capture: bool,
    pub data_persistence: DataPersistence,
    pub remaining_storage: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiometricProperty {
    Subject(SubjectState),
    Capture(bool),
    DataPersistence(DataPersistence),
    RemainingStorage(u32),
}

impl BiometricStatus {
    pub fn apply(&mut self, property: &BiometricProperty) {
        match *property {
            BiometricProperty::Subject(v) => self.subject = v,
            BiometricProperty::Capture(v) => self.capture = v,
            BiometricProperty::DataPersistence(v) => self.data_persistence = v,
            BiometricProperty::RemainingStorage(v) => self.remaining_storage = v,
        }
    }

    pub fn properties(&self) -> Vec<BiometricProperty> {
        vec![
            BiometricProperty::Subject(self.subject),
            BiometricProperty::Capture(self.capture),
            BiometricProperty::DataPersistence(self.data_persistence),
            BiometricProperty::RemainingStorage(self.remaining_storage),
        ]
    }
}
