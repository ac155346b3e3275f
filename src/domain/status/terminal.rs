//! TextTerminal, KeyManagement and Keyboard.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchState {
    #[default]
    NotAvailable,
    On,
    Off,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTerminalStatus {
    pub keyboard: SwitchState,
    pub key_lock: SwitchState,
    /// -1 代表不支援
    pub display_size_x: i32,
    pub display_size_y: i32,
}

impl Default for TextTerminalStatus {
    fn default() -> Self {
        Self {
            keyboard: SwitchState::NotAvailable,
            key_lock: SwitchState::NotAvailable,
            display_size_x: -1,
            display_size_y: -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTerminalProperty {
    Keyboard(SwitchState),
    KeyLock(SwitchState),
    DisplaySizeX(i32),
    DisplaySizeY(i32),
}

impl TextTerminalStatus {
    pub fn apply(&mut self, property: &TextTerminalProperty) {
        match *property {
            TextTerminalProperty::Keyboard(v) => self.keyboard = v,
            TextTerminalProperty::KeyLock(v) => self.key_lock = v,
            TextTerminalProperty::DisplaySizeX(v) => self.display_size_x = v,
            TextTerminalProperty::DisplaySizeY(v) => self.display_size_y = v,
        }
    }

    pub fn properties(&self) -> Vec<TextTerminalProperty> {
        vec![
            TextTerminalProperty::Keyboard(self.keyboard),
            TextTerminalProperty::KeyLock(self.key_lock),
            TextTerminalProperty::DisplaySizeX(self.display_size_x),
            TextTerminalProperty::DisplaySizeY(self.display_size_y),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncryptionState {
    Ready,
    NotReady,
    NotInitialized,
    Initialized,
    #[default]
    Undefined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CertificateState {
    Unknown,
    Primary,
    Secondary,
    NotReady,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyManagementStatus {
    pub encryption_state: EncryptionState,
    pub certificate_state: CertificateState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyManagementProperty {
    EncryptionState(EncryptionState),
    CertificateState(CertificateState),
}

impl KeyManagementStatus {
    pub fn apply(&mut self, property: &KeyManagementProperty) {
        match *property {
            KeyManagementProperty::EncryptionState(v) => self.encryption_state = v,
            KeyManagementProperty::CertificateState(v) => self.certificate_state = v,
        }
    }

    pub fn properties(&self) -> Vec<KeyManagementProperty> {
        vec![
            KeyManagementProperty::EncryptionState(self.encryption_state),
            KeyManagementProperty::CertificateState(self.certificate_state),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoBeepMode {
    #[default]
    NotSupported,
    Available { active: bool, inactive: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyboardStatus {
    pub auto_beep: AutoBeepMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardProperty {
    AutoBeep(AutoBeepMode),
}

impl KeyboardStatus {
    pub fn apply(&mut self, property: &KeyboardProperty) {
        match *property {
            KeyboardProperty::AutoBeep(v) => self.auto_beep = v,
        }
    }

    pub fn properties(&self) -> Vec<KeyboardProperty> {
        vec![KeyboardProperty::AutoBeep(self.auto_beep)]
    }
}
