use super::{non_zero, ToWire};
use crate::domain::status::auxiliaries as d;
use crate::messages::auxiliaries as w;

wire_enum!(d::DoorState => w::Door,
    same [Closed, Open, Locked, Bolted, Tampered], absent [NotAvailable]);
wire_enum!(d::OperatorSwitchState => w::OperatorSwitch,
    same [Run, Maintenance, Supervisor], absent [NotAvailable]);
wire_enum!(d::SwitchState => w::OnOff, same [On, Off], absent [NotAvailable]);
wire_enum!(d::PresenceState => w::Presence, same [Present, NotPresent], absent [NotAvailable]);
wire_enum!(d::AmbientLightState => w::AmbientLight,
    same [VeryDark, Dark, MediumLight, Light, VeryLight], absent [NotAvailable]);
wire_enum!(d::ConsumerDisplayState => w::ConsumerDisplay,
    same [Off, On, DisplayError], absent [NotAvailable]);
wire_enum!(d::HandsetState => w::Handset, same [OnTheHook, OffTheHook], absent [NotAvailable]);
wire_enum!(d::VandalShieldState => w::VandalShield,
    same [Closed, Open, Locked, Service, Keyboard, PartiallyOpen, Jammed, Tampered],
    absent [NotAvailable]);
wire_enum!(d::OpenClosedState => w::OpenClosed, same [Closed, Open], absent [NotAvailable]);
wire_enum!(d::AudioSignal => w::AudioSignal,
    same [Keypress, Exclamation, Warning, Error, Critical]);
wire_enum!(d::AudioControlState => w::AudioControl,
    same [PublicAudioManual, PublicAudioAuto, PublicAudioSemiAuto,
          PrivateAudioManual, PrivateAudioAuto, PrivateAudioSemiAuto],
    absent [NotAvailable]);

/// rate 與 signal 是各自的 property；兩者皆無時不送 audio
fn write_audio(out: &mut w::AuxiliariesStatus, update: impl FnOnce(&mut w::Audio)) {
    let audio = out.audio.get_or_insert_with(Default::default);
    update(audio);
    if *audio == w::Audio::default() {
        out.audio = None;
    }
}

impl ToWire for d::UpsStatus {
    type Wire = w::Ups;

    fn to_wire(&self) -> Option<w::Ups> {
        Some(w::Ups {
            // good 與 low 同時成立時以 good 為準
            low: !self.good && self.low,
            engaged: self.engaged,
            powering: self.powering,
            recovered: self.recovered,
        })
    }
}

fn door_slot(out: &mut w::AuxiliariesStatus, door: d::DoorKind) -> &mut Option<w::Door> {
    match door {
        d::DoorKind::FrontCabinet => &mut out.cabinet_front_door,
        d::DoorKind::LeftCabinet => &mut out.cabinet_left_door,
        d::DoorKind::RightCabinet => &mut out.cabinet_right_door,
        d::DoorKind::RearCabinet => &mut out.cabinet_rear_door,
        d::DoorKind::Safe => &mut out.safe_door,
    }
}

fn switch_slot(out: &mut w::AuxiliariesStatus, sensor: d::SwitchSensor) -> &mut Option<w::OnOff> {
    match sensor {
        d::SwitchSensor::Tamper => &mut out.tamper_sensor,
        d::SwitchSensor::InternalTamper => &mut out.internal_tamper_sensor,
        d::SwitchSensor::Seismic => &mut out.seismic_sensor,
        d::SwitchSensor::Heat => &mut out.heat_sensor,
        d::SwitchSensor::BootSwitch => &mut out.boot_switch_sensor,
        d::SwitchSensor::OperatorCallButton => &mut out.operator_call_button_sensor,
        d::SwitchSensor::FasciaMicrophone => &mut out.fascia_microphone_sensor,
        d::SwitchSensor::Heating => &mut out.heating,
        d::SwitchSensor::ConsumerDisplayBacklight => &mut out.consumer_display_backlight,
        d::SwitchSensor::SignageDisplay => &mut out.signage_display,
        d::SwitchSensor::AudibleAlarm => &mut out.audible_alarm,
    }
}

fn presence_slot(out: &mut w::AuxiliariesStatus, sensor: d::PresenceSensor) -> &mut Option<w::Presence> {
    match sensor {
        d::PresenceSensor::Proximity => &mut out.proximity_sensor,
        d::PresenceSensor::EnhancedAudio => &mut out.enhanced_audio_sensor,
        d::PresenceSensor::HeadsetMicrophone => &mut out.headset_microphone_sensor,
    }
}

pub(super) fn write(property: &d::AuxiliariesProperty, out: &mut w::AuxiliariesStatus) {
    match property {
        d::AuxiliariesProperty::Door { door, state } => *door_slot(out, *door) = state.to_wire(),
        d::AuxiliariesProperty::OperatorSwitch(v) => out.operator_switch = v.to_wire(),
        d::AuxiliariesProperty::Switch { sensor, state } => *switch_slot(out, *sensor) = state.to_wire(),
        d::AuxiliariesProperty::Presence { sensor, state } => {
            *presence_slot(out, *sensor) = state.to_wire()
        }
        d::AuxiliariesProperty::AmbientLight(v) => out.ambient_light_sensor = v.to_wire(),
        d::AuxiliariesProperty::ConsumerDisplay(v) => out.consumer_display_sensor = v.to_wire(),
        d::AuxiliariesProperty::Handset(v) => out.handset_sensor = v.to_wire(),
        d::AuxiliariesProperty::VandalShield(v) => out.vandal_shield = v.to_wire(),
        d::AuxiliariesProperty::OpenClosedIndicator(v) => out.open_closed_indicator = v.to_wire(),
        d::AuxiliariesProperty::AudioRate(v) => write_audio(out, |audio| audio.rate = v.to_wire()),
        d::AuxiliariesProperty::AudioSignal(v) => {
            write_audio(out, |audio| audio.signal = v.and_then(|s| s.to_wire()))
        }
        d::AuxiliariesProperty::Ups(v) => out.ups = v.and_then(|ups| ups.to_wire()),
        d::AuxiliariesProperty::Volume(v) => out.volume = non_zero(*v),
        d::AuxiliariesProperty::MicrophoneVolume(v) => out.microphone_volume = non_zero(*v),
        d::AuxiliariesProperty::EnhancedAudioControl(v) => out.enhanced_audio_control = v.to_wire(),
        d::AuxiliariesProperty::EnhancedMicrophoneControl(v) => {
            out.enhanced_microphone_control = v.to_wire()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::changed_payload;
    use super::*;
    use crate::domain::status::StatusChange;
    use serde_json::json;

    fn payload(property: d::AuxiliariesProperty) -> Option<serde_json::Value> {
        changed_payload(&StatusChange::Auxiliaries(property)).map(|p| serde_json::to_value(p).unwrap())
    }

    #[test]
    fn test_safe_door_change() {
        let value = payload(d::AuxiliariesProperty::Door {
            door: d::DoorKind::Safe,
            state: d::DoorState::Bolted,
        });
        assert_eq!(value, Some(json!({"auxiliaries": {"safeDoor": "bolted"}})));
    }

    #[test]
    fn test_heating_switch_lands_in_heating() {
        let value = payload(d::AuxiliariesProperty::Switch {
            sensor: d::SwitchSensor::Heating,
            state: d::SwitchState::On,
        });
        assert_eq!(value, Some(json!({"auxiliaries": {"heating": "on"}})));
    }

    #[test]
    fn test_not_available_sends_nothing() {
        assert_eq!(
            payload(d::AuxiliariesProperty::Presence {
                sensor: d::PresenceSensor::Proximity,
                state: d::PresenceState::NotAvailable,
            }),
            None
        );
        assert_eq!(payload(d::AuxiliariesProperty::Volume(0)), None);
        assert_eq!(payload(d::AuxiliariesProperty::Ups(None)), None);
    }

    #[test]
    fn test_ups_low_ignored_when_good() {
        let ups = d::UpsStatus {
            good: true,
            low: true,
            engaged: true,
            ..Default::default()
        };
        let value = payload(d::AuxiliariesProperty::Ups(Some(ups))).unwrap();
        assert_eq!(
            value["auxiliaries"]["ups"],
            json!({"low": false, "engaged": true, "powering": false, "recovered": false})
        );

        let ups = d::UpsStatus {
            low: true,
            ..Default::default()
        };
        let value = payload(d::AuxiliariesProperty::Ups(Some(ups))).unwrap();
        assert_eq!(value["auxiliaries"]["ups"]["low"], json!(true));
    }

    #[test]
    fn test_audio_rate_and_signal_are_separate() {
        let value = payload(d::AuxiliariesProperty::AudioSignal(Some(d::AudioSignal::Warning)));
        assert_eq!(value, Some(json!({"auxiliaries": {"audio": {"signal": "warning"}}})));

        let value = payload(d::AuxiliariesProperty::AudioRate(d::SwitchState::On));
        assert_eq!(value, Some(json!({"auxiliaries": {"audio": {"rate": "on"}}})));

        assert_eq!(payload(d::AuxiliariesProperty::AudioRate(d::SwitchState::NotAvailable)), None);
        assert_eq!(payload(d::AuxiliariesProperty::AudioSignal(None)), None);
    }

    #[test]
    fn test_rate_change_does_not_resend_signal() {
        let mut status = d::AuxiliariesStatus::default();
        status.apply(&d::AuxiliariesProperty::AudioSignal(Some(d::AudioSignal::Warning)));
        let change = d::AuxiliariesProperty::AudioRate(d::SwitchState::On);
        status.apply(&change);
        assert_eq!(status.audio.signal, Some(d::AudioSignal::Warning));
        assert_eq!(payload(change), Some(json!({"auxiliaries": {"audio": {"rate": "on"}}})));
    }

    #[test]
    fn test_full_status_carries_rate_and_signal() {
        let status = crate::domain::status::DeviceStatus {
            auxiliaries: Some(d::AuxiliariesStatus {
                audio: d::AudioStatus {
                    rate: d::SwitchState::Off,
                    signal: Some(d::AudioSignal::Keypress),
                },
                ..Default::default()
            }),
            ..Default::default()
        };
        let value = serde_json::to_value(super::super::full_payload(&status)).unwrap();
        assert_eq!(value["auxiliaries"]["audio"], json!({"rate": "off", "signal": "keypress"}));
    }
}
