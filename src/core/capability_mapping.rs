//! Internal capabilities → `Common.Capabilities` wire objects.

use crate::core::discovery::SupportedMessages;
use crate::domain::capabilities as d;
use crate::domain::status::cash::OutputPosition;
use crate::domain::status::vendor::AccessLevel;
use crate::messages::card_reader as card;
use crate::messages::cash_dispenser as dispenser;
use crate::messages::cash_management as cash;
use crate::messages::common::{self as w, InterfaceInfo, MessageVersions};
use crate::messages::key_management as keys;
use crate::messages::printer as prt;
use crate::messages::text_terminal as terminal;
use crate::messages::vendor;
use crate::messages::{InterfaceName, MessageKind};
use std::collections::BTreeMap;

pub fn common(caps: &d::CommonCapabilities) -> w::CommonCapabilities {
    w::CommonCapabilities {
        service_version: caps.service_version.clone(),
        device_information: caps
            .device_information
            .iter()
            .map(|info| w::DeviceInformation {
                model_name: info.model_name.clone(),
                serial_number: info.serial_number.clone(),
                revision_number: info.revision_number.clone(),
                model_description: info.model_description.clone(),
            })
            .collect(),
        power_save_control: caps.power_save_control,
        anti_fraud_module: caps.anti_fraud_module,
        synchronizable_commands: caps.synchronizable_commands.clone(),
    }
}

/// One entry per declared interface, listing only the supported messages.
pub fn interfaces(caps: &d::CommonCapabilities, supported: &SupportedMessages) -> Vec<InterfaceInfo> {
    caps.interfaces
        .iter()
        .map(|(interface, support)| {
            let mut commands = BTreeMap::new();
            let mut events = BTreeMap::new();
            for (name, message) in supported {
                let Some((prefix, short)) = name.split_once('.') else {
                    continue;
                };
                if InterfaceName::from_prefix(prefix) != Some(*interface) {
                    continue;
                }
                let versions = MessageVersions {
                    versions: message.versions.clone(),
                };
                match message.kind {
                    MessageKind::Command => commands.insert(short.to_string(), versions),
                    _ => events.insert(short.to_string(), versions),
                };
            }
            InterfaceInfo {
                name: *interface,
                commands,
                events,
                maximum_requests: support.maximum_requests,
                authentication_required: support.authentication_required.clone(),
            }
        })
        .collect()
}

fn tracks(set: &std::collections::BTreeSet<d::Track>) -> card::Tracks {
    card::Tracks {
        track1: set.contains(&d::Track::Track1),
        track2: set.contains(&d::Track::Track2),
        track3: set.contains(&d::Track::Track3),
        watermark: set.contains(&d::Track::Watermark),
    }
}

fn power_option(option: d::PowerOption) -> Option<card::PowerOption> {
    match option {
        d::PowerOption::NotSupported => None,
        d::PowerOption::Exit => Some(card::PowerOption::Exit),
        d::PowerOption::Retain => Some(card::PowerOption::Retain),
        d::PowerOption::ExitThenRetain => Some(card::PowerOption::ExitThenRetain),
        d::PowerOption::Transport => Some(card::PowerOption::Transport),
    }
}

pub fn card_reader(caps: &d::CardReaderCapabilities) -> card::CardReaderCapabilities {
    card::CardReaderCapabilities {
        device_type: match caps.device_type {
            d::CardReaderType::Motor => card::CardReaderType::Motor,
            d::CardReaderType::Swipe => card::CardReaderType::Swipe,
            d::CardReaderType::Dip => card::CardReaderType::Dip,
            d::CardReaderType::LatchedDip => card::CardReaderType::LatchedDip,
            d::CardReaderType::Contactless => card::CardReaderType::Contactless,
            d::CardReaderType::IntelligentContactless => card::CardReaderType::IntelligentContactless,
            d::CardReaderType::Permanent => card::CardReaderType::Permanent,
        },
        read_tracks: tracks(&caps.read_tracks),
        write_tracks: tracks(&caps.write_tracks),
        security_type: match caps.security_type {
            d::SecurityType::NotSupported => None,
            d::SecurityType::Mm => Some(card::SecurityType::Mm),
            d::SecurityType::Cim86 => Some(card::SecurityType::Cim86),
        },
        power_on_option: power_option(caps.power_on_option),
        power_off_option: power_option(caps.power_off_option),
        flux_sensor_programmable: caps.flux_sensor_programmable,
        read_write_access_following_exit: caps.read_write_access_following_exit,
        card_taken_sensor: caps.card_taken_sensor,
    }
}

pub fn cash_dispenser(caps: &d::CashDispenserCapabilities) -> dispenser::CashDispenserCapabilities {
    let has = |p: OutputPosition| caps.output_positions.contains(&p);
    dispenser::CashDispenserCapabilities {
        dispenser_type: match caps.dispenser_type {
            d::DispenserType::TellerBill => dispenser::DispenserType::TellerBill,
            d::DispenserType::SelfServiceBill => dispenser::DispenserType::SelfServiceBill,
            d::DispenserType::TellerCoin => dispenser::DispenserType::TellerCoin,
            d::DispenserType::SelfServiceCoin => dispenser::DispenserType::SelfServiceCoin,
        },
        max_dispense_items: caps.max_dispense_items,
        shutter_control: caps.shutter_control,
        intermediate_stacker: caps.intermediate_stacker,
        items_taken_sensor: caps.items_taken_sensor,
        positions: dispenser::OutputPositions {
            left: has(OutputPosition::Left),
            right: has(OutputPosition::Right),
            center: has(OutputPosition::Center),
            top: has(OutputPosition::Top),
            bottom: has(OutputPosition::Bottom),
            front: has(OutputPosition::Front),
            rear: has(OutputPosition::Rear),
        },
    }
}

pub fn cash_management(caps: &d::CashManagementCapabilities) -> cash::CashManagementCapabilities {
    let has = |t: d::ItemInfoType| caps.item_info_types.contains(&t);
    cash::CashManagementCapabilities {
        safe_door: caps.safe_door,
        cash_box: caps.cash_box,
        exchange_type: cash::ExchangeType {
            by_hand: caps.exchange_by_hand,
        },
        item_info_types: cash::ItemInfoTypes {
            serial_number: has(d::ItemInfoType::SerialNumber),
            signature: has(d::ItemInfoType::Signature),
            image_file: has(d::ItemInfoType::ImageFile),
        },
        classification_list: caps.classification_list,
    }
}

pub fn key_management(caps: &d::KeyManagementCapabilities) -> keys::KeyManagementCapabilities {
    let key_attributes = caps
        .key_attributes
        .iter()
        .map(|(usage, algorithms)| {
            let algorithms = algorithms
                .iter()
                .map(|(algorithm, modes)| {
                    let modes = modes
                        .iter()
                        .map(|(mode, restricted)| {
                            (
                                mode.clone(),
                                keys::KeyAttribute {
                                    restricted: restricted.clone(),
                                },
                            )
                        })
                        .collect();
                    (algorithm.clone(), modes)
                })
                .collect();
            (usage.clone(), algorithms)
        })
        .collect();

    keys::KeyManagementCapabilities {
        key_num: caps.max_keys,
        // ZKA 衍生演算法一律不支援
        derivation_algorithms: keys::DerivationAlgorithms { chip_zka: false },
        key_check_modes: keys::KeyCheckModes {
            kcv_self: caps.key_check_modes.contains(&d::KeyCheckMode::KcvSelf),
            kcv_zero: caps.key_check_modes.contains(&d::KeyCheckMode::KcvZero),
        },
        hsm_vendor: caps.hsm_vendor.clone(),
        des_key_length: keys::DesKeyLength {
            single: caps.des_key_lengths.contains(&d::DesKeyLength::Single),
            double: caps.des_key_lengths.contains(&d::DesKeyLength::Double),
            triple: caps.des_key_lengths.contains(&d::DesKeyLength::Triple),
        },
        key_block_import_formats: keys::KeyBlockImportFormats {
            a: caps.key_block_import_formats.contains(&d::KeyBlockFormat::A),
            b: caps.key_block_import_formats.contains(&d::KeyBlockFormat::B),
            c: caps.key_block_import_formats.contains(&d::KeyBlockFormat::C),
            d: caps.key_block_import_formats.contains(&d::KeyBlockFormat::D),
        },
        key_import_through_parts: caps.key_import_through_parts,
        symmetric_key_management_methods: keys::SymmetricKeyManagementMethods {
            fixed_key: caps.symmetric_key_methods.contains(&d::SymmetricKeyMethod::FixedKey),
            master_key: caps.symmetric_key_methods.contains(&d::SymmetricKeyMethod::MasterKey),
            tdes_dukpt: caps.symmetric_key_methods.contains(&d::SymmetricKeyMethod::TripleDesDukpt),
        },
        key_attributes,
    }
}

pub fn keyboard(caps: &d::KeyboardCapabilities) -> keys::KeyboardCapabilities {
    let has = |c: d::AutoBeepCapability| caps.auto_beep.contains(&c);
    keys::KeyboardCapabilities {
        auto_beep: keys::AutoBeepCapabilities {
            active_available: has(d::AutoBeepCapability::ActiveAvailable),
            active_selectable: has(d::AutoBeepCapability::ActiveSelectable),
            inactive_available: has(d::AutoBeepCapability::InactiveAvailable),
            inactive_selectable: has(d::AutoBeepCapability::InactiveSelectable),
        },
        ets_caps: caps
            .ets
            .iter()
            .map(|ets| keys::EtsCaps {
                x_pos: ets.x_pos,
                y_pos: ets.y_pos,
                x_size: ets.x_size,
                y_size: ets.y_size,
                maximum_touch_frames: ets.maximum_touch_frames,
                maximum_touch_keys: ets.maximum_touch_keys,
                float: keys::EtsFloat {
                    x: ets.float_x,
                    y: ets.float_y,
                },
            })
            .collect(),
    }
}

pub fn text_terminal(caps: &d::TextTerminalCapabilities) -> terminal::TextTerminalCapabilities {
    terminal::TextTerminalCapabilities {
        terminal_type: match caps.terminal_type {
            d::TextTerminalType::Fixed => terminal::TextTerminalType::Fixed,
            d::TextTerminalType::Removable => terminal::TextTerminalType::Removable,
        },
        resolutions: caps
            .resolutions
            .iter()
            .map(|&(size_x, size_y)| terminal::Resolution { size_x, size_y })
            .collect(),
        key_lock: caps.key_lock,
        cursor: caps.cursor,
        forms: caps.forms,
    }
}

pub fn printer(caps: &d::PrinterCapabilities) -> prt::PrinterCapabilities {
    let has = |t: d::PrinterType| caps.types.contains(&t);
    prt::PrinterCapabilities {
        printer_type: prt::PrinterTypes {
            receipt: has(d::PrinterType::Receipt),
            passbook: has(d::PrinterType::Passbook),
            journal: has(d::PrinterType::Journal),
            document: has(d::PrinterType::Document),
            scanner: has(d::PrinterType::Scanner),
        },
        retract_bins: caps.retract_bins,
        max_retract: caps.max_retract.clone(),
        media_taken: caps.media_taken,
    }
}

pub fn vendor_application(caps: &d::VendorApplicationCapabilities) -> vendor::VendorApplicationCapabilities {
    let has = |level: AccessLevel| caps.supported_access_levels.contains(&level);
    vendor::VendorApplicationCapabilities {
        supported_access_levels: vendor::SupportedAccessLevels {
            basic: has(AccessLevel::Basic),
            intermediate: has(AccessLevel::Intermediate),
            full: has(AccessLevel::Full),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::discovery::SupportedMessage;
    use std::collections::BTreeSet;

    #[test]
    fn test_interfaces_split_commands_and_events() {
        let caps = d::CommonCapabilities {
            interfaces: BTreeMap::from([(
                InterfaceName::Printer,
                d::InterfaceSupport::new(["RetractMedia"], ["MediaAutoRetractedEvent"]),
            )]),
            ..Default::default()
        };
        let supported = SupportedMessages::from([
            (
                "Printer.RetractMedia".to_string(),
                SupportedMessage {
                    kind: MessageKind::Command,
                    versions: vec!["2.0".to_string()],
                },
            ),
            (
                "Printer.MediaAutoRetractedEvent".to_string(),
                SupportedMessage {
                    kind: MessageKind::Unsolicited,
                    versions: vec!["2.0".to_string()],
                },
            ),
        ]);
        let value = serde_json::to_value(interfaces(&caps, &supported)).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "name": "printer",
                "commands": {"RetractMedia": {"versions": ["2.0"]}},
                "events": {"MediaAutoRetractedEvent": {"versions": ["2.0"]}}
            }])
        );
    }

    #[test]
    fn test_key_management_flags_and_attributes() {
        let caps = d::KeyManagementCapabilities {
            max_keys: 32,
            key_check_modes: BTreeSet::from([d::KeyCheckMode::KcvZero]),
            des_key_lengths: BTreeSet::from([d::DesKeyLength::Double, d::DesKeyLength::Triple]),
            key_block_import_formats: BTreeSet::from([d::KeyBlockFormat::D]),
            symmetric_key_methods: BTreeSet::from([d::SymmetricKeyMethod::MasterKey]),
            key_attributes: BTreeMap::from([(
                "K0".to_string(),
                BTreeMap::from([("T".to_string(), BTreeMap::from([("D".to_string(), None)]))]),
            )]),
            ..Default::default()
        };
        let value = serde_json::to_value(key_management(&caps)).unwrap();
        assert_eq!(value["keyNum"], 32);
        assert_eq!(value["keyCheckModes"], serde_json::json!({"self": false, "zero": true}));
        assert_eq!(
            value["desKeyLength"],
            serde_json::json!({"single": false, "double": true, "triple": true})
        );
        assert_eq!(
            value["keyBlockImportFormats"],
            serde_json::json!({"A": false, "B": false, "C": false, "D": true})
        );
        assert_eq!(value["symmetricKeyManagementMethods"]["masterKey"], true);
        assert_eq!(value["derivationAlgorithms"], serde_json::json!({"chipZka": false}));
        assert_eq!(value["keyAttributes"], serde_json::json!({"K0": {"T": {"D": {}}}}));
        assert!(value.get("hsmVendor").is_none());
    }

    #[test]
    fn test_keyboard_auto_beep_and_touch_frames() {
        let caps = d::KeyboardCapabilities {
            auto_beep: BTreeSet::from([
                d::AutoBeepCapability::ActiveAvailable,
                d::AutoBeepCapability::InactiveSelectable,
            ]),
            ets: vec![d::EtsCapability {
                x_size: 800,
                y_size: 600,
                maximum_touch_frames: 4,
                float_y: true,
                ..Default::default()
            }],
        };
        let value = serde_json::to_value(keyboard(&caps)).unwrap();
        assert_eq!(
            value["autoBeep"],
            serde_json::json!({
                "activeAvailable": true,
                "activeSelectable": false,
                "inactiveAvailable": false,
                "inactiveSelectable": true
            })
        );
        assert_eq!(value["etsCaps"][0]["xSize"], 800);
        assert_eq!(value["etsCaps"][0]["float"], serde_json::json!({"x": false, "y": true}));
    }

    #[test]
    fn test_access_levels_as_flags() {
        let caps = d::VendorApplicationCapabilities {
            supported_access_levels: BTreeSet::from([AccessLevel::Basic, AccessLevel::Full]),
        };
        let wire = vendor_application(&caps);
        assert!(wire.supported_access_levels.basic);
        assert!(!wire.supported_access_levels.intermediate);
        assert!(wire.supported_access_levels.full);
    }
}
