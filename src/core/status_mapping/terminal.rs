use super::{non_negative, ToWire};
use crate::domain::status::terminal as d;
use crate::messages::auxiliaries::OnOff;
use crate::messages::key_management as w;
use crate::messages::text_terminal::TextTerminalStatus;

impl ToWire for d::SwitchState {
    type Wire = OnOff;

    fn to_wire(&self) -> Option<OnOff> {
        match self {
            d::SwitchState::On => Some(OnOff::On),
            d::SwitchState::Off => Some(OnOff::Off),
            d::SwitchState::NotAvailable => None,
        }
    }
}

wire_enum!(d::EncryptionState => w::EncryptionState,
    same [Ready, NotReady, NotInitialized, Initialized, Undefined]);
wire_enum!(d::CertificateState => w::CertificateState,
    same [Unknown, Primary, Secondary, NotReady], absent [NotSupported]);

pub(super) fn write_text_terminal(property: &d::TextTerminalProperty, out: &mut TextTerminalStatus) {
    match property {
        d::TextTerminalProperty::Keyboard(v) => out.keyboard = v.to_wire(),
        d::TextTerminalProperty::KeyLock(v) => out.key_lock = v.to_wire(),
        d::TextTerminalProperty::DisplaySizeX(v) => out.display_size_x = non_negative(*v),
        d::TextTerminalProperty::DisplaySizeY(v) => out.display_size_y = non_negative(*v),
    }
}

pub(super) fn write_key_management(
    property: &d::KeyManagementProperty,
    out: &mut w::KeyManagementStatus,
) {
    match property {
        d::KeyManagementProperty::EncryptionState(v) => out.encryption_state = v.to_wire(),
        d::KeyManagementProperty::CertificateState(v) => out.certificate_state = v.to_wire(),
    }
}

pub(super) fn write_keyboard(property: &d::KeyboardProperty, out: &mut w::KeyboardStatus) {
    match property {
        d::KeyboardProperty::AutoBeep(d::AutoBeepMode::NotSupported) => out.auto_beep = None,
        d::KeyboardProperty::AutoBeep(d::AutoBeepMode::Available { active, inactive }) => {
            out.auto_beep = Some(w::AutoBeep {
                active_available: *active,
                inactive_available: *inactive,
            })
        }
    }
}
