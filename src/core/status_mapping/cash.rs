use super::ToWire;
use crate::domain::status::cash as d;
use crate::messages::cash_acceptor as acceptor;
use crate::messages::cash_dispenser as dispenser;
use crate::messages::cash_management as w;
use crate::messages::StatusPayload;

wire_enum!(d::UnitsState => w::UnitsState,
    same [Ok, Attention, Stop, Unknown], absent [NotSupported]);
wire_enum!(d::ShutterState => w::Shutter,
    same [Closed, Open, JammedOpen, JammedPartiallyOpen, JammedClosed, JammedUnknown, Unknown],
    absent [NotSupported]);
wire_enum!(d::PositionStatus => w::PositionStatus,
    same [Empty, NotEmpty, Unknown], absent [NotSupported]);
wire_enum!(d::TransportState => w::Transport,
    same [Ok, Inoperative, Unknown], absent [NotSupported]);
wire_enum!(d::TransportStatus => w::TransportStatus,
    same [Empty, NotEmpty, NotEmptyCustomer, Unknown], absent [NotSupported]);
wire_enum!(d::DispenserStacker => dispenser::IntermediateStacker,
    same [Empty, NotEmpty, NotEmptyCustomer, NotEmptyUnknown, Unknown], absent [NotSupported]);
wire_enum!(d::AcceptorStacker => acceptor::IntermediateStacker,
    same [Empty, NotEmpty, Full, Unknown], absent [NotSupported]);
wire_enum!(d::StackerItems => acceptor::StackerItems,
    same [CustomerAccess, NoCustomerAccess, AccessUnknown, NoItems], absent [NotSupported]);
wire_enum!(d::BanknoteReaderState => acceptor::BanknoteReader,
    same [Ok, Inoperable, Unknown], absent [NotSupported]);

fn output_position(position: d::OutputPosition) -> w::CashPosition {
    match position {
        d::OutputPosition::Default => w::CashPosition::OutDefault,
        d::OutputPosition::Left => w::CashPosition::OutLeft,
        d::OutputPosition::Right => w::CashPosition::OutRight,
        d::OutputPosition::Center => w::CashPosition::OutCenter,
        d::OutputPosition::Top => w::CashPosition::OutTop,
        d::OutputPosition::Bottom => w::CashPosition::OutBottom,
        d::OutputPosition::Front => w::CashPosition::OutFront,
        d::OutputPosition::Rear => w::CashPosition::OutRear,
    }
}

fn input_position(position: d::InputPosition) -> w::CashPosition {
    match position {
        d::InputPosition::Default => w::CashPosition::InDefault,
        d::InputPosition::Left => w::CashPosition::InLeft,
        d::InputPosition::Right => w::CashPosition::InRight,
        d::InputPosition::Center => w::CashPosition::InCenter,
        d::InputPosition::Top => w::CashPosition::InTop,
        d::InputPosition::Bottom => w::CashPosition::InBottom,
        d::InputPosition::Front => w::CashPosition::InFront,
        d::InputPosition::Rear => w::CashPosition::InRear,
    }
}

fn cash_position(position: d::CashPosition) -> w::CashPosition {
    match position {
        d::CashPosition::Input(p) => input_position(p),
        d::CashPosition::Output(p) => output_position(p),
    }
}

/// Wire form of a position change with only the changed field set.
/// 值不支援時仍送出該位置，欄位留空
fn mapped_change(change: &d::CashPositionProperty, position: w::CashPosition) -> w::CashPositionStatus {
    let mut status = w::CashPositionStatus::empty(position);
    match change {
        d::CashPositionProperty::Shutter(v) => status.shutter = v.to_wire(),
        d::CashPositionProperty::PositionStatus(v) => status.position_status = v.to_wire(),
        d::CashPositionProperty::Transport(v) => status.transport = v.to_wire(),
        d::CashPositionProperty::TransportStatus(v) => status.transport_status = v.to_wire(),
    }
    status
}

/// 同一個位置的多個屬性合併到同一筆
fn merge_into(positions: &mut Vec<w::CashPositionStatus>, update: w::CashPositionStatus) {
    match positions.iter_mut().find(|p| p.position == update.position) {
        Some(existing) => {
            existing.shutter = update.shutter.or(existing.shutter);
            existing.position_status = update.position_status.or(existing.position_status);
            existing.transport = update.transport.or(existing.transport);
            existing.transport_status = update.transport_status.or(existing.transport_status);
        }
        None => positions.push(update),
    }
}

pub(super) fn write_management(property: &d::CashManagementProperty, payload: &mut StatusPayload) {
    match property {
        d::CashManagementProperty::Dispenser(v) => {
            payload
                .cash_management
                .get_or_insert_with(Default::default)
                .dispenser = v.to_wire()
        }
        d::CashManagementProperty::Acceptor(v) => {
            payload
                .cash_management
                .get_or_insert_with(Default::default)
                .acceptor = v.to_wire()
        }
        d::CashManagementProperty::OutputPositions { positions, change } => {
            for position in positions {
                let update = mapped_change(change, output_position(*position));
                let status = payload.cash_dispenser.get_or_insert_with(Default::default);
                merge_into(status.positions.get_or_insert_with(Vec::new), update);
            }
        }
        d::CashManagementProperty::InputPositions { positions, change } => {
            for position in positions {
                let update = mapped_change(change, cash_position(*position));
                let status = payload.cash_acceptor.get_or_insert_with(Default::default);
                merge_into(status.positions.get_or_insert_with(Vec::new), update);
            }
        }
    }
}

pub(super) fn write_dispenser(
    property: &d::CashDispenserProperty,
    out: &mut dispenser::CashDispenserStatus,
) {
    match property {
        d::CashDispenserProperty::IntermediateStacker(v) => out.intermediate_stacker = v.to_wire(),
    }
}

pub(super) fn write_acceptor(property: &d::CashAcceptorProperty, out: &mut acceptor::CashAcceptorStatus) {
    match property {
        d::CashAcceptorProperty::IntermediateStacker(v) => out.intermediate_stacker = v.to_wire(),
        d::CashAcceptorProperty::StackerItems(v) => out.stacker_items = v.to_wire(),
        d::CashAcceptorProperty::BanknoteReader(v) => out.banknote_reader = v.to_wire(),
        d::CashAcceptorProperty::DropBox(v) => out.drop_box = Some(*v),
    }
}

#[cfg(test)]
mod tests {
    use super::super::{changed_payload, full_payload};
    use super::*;
    use crate::domain::status::{DeviceStatus, StatusChange};
    use serde_json::json;
    use std::collections::BTreeSet;

    #[test]
    fn test_output_position_change_one_entry_per_position() {
        let change = StatusChange::CashManagement(d::CashManagementProperty::OutputPositions {
            positions: BTreeSet::from([d::OutputPosition::Left, d::OutputPosition::Default]),
            change: d::CashPositionProperty::Shutter(d::ShutterState::JammedClosed),
        });
        let value = serde_json::to_value(changed_payload(&change).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({"cashDispenser": {"positions": [
                {"position": "outDefault", "shutter": "jammedClosed"},
                {"position": "outLeft", "shutter": "jammedClosed"}
            ]}})
        );
    }

    #[test]
    fn test_input_position_goes_to_acceptor() {
        let change = StatusChange::CashManagement(d::CashManagementProperty::InputPositions {
            positions: BTreeSet::from([d::CashPosition::Input(d::InputPosition::Center)]),
            change: d::CashPositionProperty::TransportStatus(d::TransportStatus::NotEmptyCustomer),
        });
        let value = serde_json::to_value(changed_payload(&change).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({"cashAcceptor": {"positions": [
                {"position": "inCenter", "transportStatus": "notEmptyCustomer"}
            ]}})
        );
    }

    #[test]
    fn test_not_supported_value_still_names_the_position() {
        let change = StatusChange::CashManagement(d::CashManagementProperty::OutputPositions {
            positions: BTreeSet::from([d::OutputPosition::Left]),
            change: d::CashPositionProperty::Transport(d::TransportState::NotSupported),
        });
        let value = serde_json::to_value(changed_payload(&change).unwrap()).unwrap();
        assert_eq!(value, json!({"cashDispenser": {"positions": [{"position": "outLeft"}]}}));
    }

    #[test]
    fn test_empty_position_set_sends_nothing() {
        let change = StatusChange::CashManagement(d::CashManagementProperty::OutputPositions {
            positions: BTreeSet::new(),
            change: d::CashPositionProperty::Shutter(d::ShutterState::Open),
        });
        assert!(changed_payload(&change).is_none());
    }

    #[test]
    fn test_full_status_merges_position_fields() {
        let mut management = d::CashManagementStatus::default();
        management.output_positions.insert(
            d::OutputPosition::Center,
            d::CashPositionStatus {
                shutter: d::ShutterState::Closed,
                position_status: d::PositionStatus::Empty,
                ..Default::default()
            },
        );
        let status = DeviceStatus {
            cash_management: Some(management),
            ..Default::default()
        };
        let value = serde_json::to_value(full_payload(&status)).unwrap();
        assert_eq!(
            value["cashDispenser"]["positions"],
            json!([{"position": "outCenter", "shutter": "closed", "positionStatus": "empty"}])
        );
        assert!(value.get("cashManagement").is_none());
    }
}
