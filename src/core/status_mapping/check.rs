use super::ToWire;
use crate::domain::status::check as d;
use crate::messages::check as w;
use crate::messages::mixed_media::{MixedMediaStatus, Modes};

// Attention 在 wire 上是 "state"
wire_enum!(d::AcceptorState => w::Acceptor,
    same [Ok, Stop, Unknown], map [Attention => State]);
wire_enum!(d::MediaState => w::Media,
    same [Present, NotPresent, Jammed, Unknown, Position], absent [NotSupported]);
wire_enum!(d::SupplyState => w::Supply,
    same [Full, Low, Out, Unknown], absent [NotSupported]);
wire_enum!(d::ScannerState => w::Scanner,
    same [Ok, Fading, Inoperative, Unknown], absent [NotSupported]);
wire_enum!(d::StackerState => w::Stacker,
    same [Empty, NotEmpty, Full, Inoperative, Unknown], absent [NotSupported]);
wire_enum!(d::MediaFeederState => w::MediaFeeder,
    same [Empty, NotEmpty, Inoperative, Unknown], absent [NotSupported]);
wire_enum!(d::ShutterState => w::Shutter,
    same [Closed, Open, Jammed, Unknown], absent [NotSupported]);
wire_enum!(d::PositionStatus => w::PositionStatus,
    same [Empty, NotEmpty, Unknown], absent [NotSupported]);
wire_enum!(d::TransportState => w::Transport,
    same [Ok, Inoperative, Unknown], absent [NotSupported]);
wire_enum!(d::TransportMediaStatus => w::TransportMediaStatus,
    same [Empty, NotEmpty, Unknown], absent [NotSupported]);
wire_enum!(d::JammedShutterPosition => w::JammedShutterPosition,
    same [NotJammed, Open, PartiallyOpen, Closed, Unknown], absent [NotSupported]);

fn position_slot(positions: &mut w::CheckPositions, position: d::CheckPosition) -> &mut Option<w::CheckPositionStatus> {
    match position {
        d::CheckPosition::Input => &mut positions.input,
        d::CheckPosition::Output => &mut positions.output,
        d::CheckPosition::Refused => &mut positions.refused,
    }
}

fn write_position(change: &d::CheckPositionProperty, out: &mut w::CheckPositionStatus) {
    match change {
        d::CheckPositionProperty::Shutter(v) => out.shutter = v.to_wire(),
        d::CheckPositionProperty::PositionStatus(v) => out.position_status = v.to_wire(),
        d::CheckPositionProperty::Transport(v) => out.transport = v.to_wire(),
        d::CheckPositionProperty::TransportMediaStatus(v) => out.transport_media_status = v.to_wire(),
        d::CheckPositionProperty::JammedShutterPosition(v) => out.jammed_shutter_position = v.to_wire(),
    }
}

pub(super) fn write(property: &d::CheckProperty, out: &mut w::CheckStatus) {
    match property {
        d::CheckProperty::Acceptor(v) => out.acceptor = v.to_wire(),
        d::CheckProperty::Media(v) => out.media = v.to_wire(),
        d::CheckProperty::Toner(v) => out.toner = v.to_wire(),
        d::CheckProperty::Ink(v) => out.ink = v.to_wire(),
        d::CheckProperty::FrontImageScanner(v) => out.front_image_scanner = v.to_wire(),
        d::CheckProperty::BackImageScanner(v) => out.back_image_scanner = v.to_wire(),
        d::CheckProperty::MicrReader(v) => out.micr_reader = v.to_wire(),
        d::CheckProperty::Stacker(v) => out.stacker = v.to_wire(),
        d::CheckProperty::Rebuncher(v) => out.rebuncher = v.to_wire(),
        d::CheckProperty::MediaFeeder(v) => out.media_feeder = v.to_wire(),
        d::CheckProperty::Positions { positions, change } => {
            let mut update = w::CheckPositionStatus::default();
            write_position(change, &mut update);
            if update == w::CheckPositionStatus::default() {
                return;
            }
            let wire_positions = out.positions.get_or_insert_with(Default::default);
            for position in positions {
                let slot = position_slot(wire_positions, *position).get_or_insert_with(Default::default);
                write_position(change, slot);
            }
            if out.positions.as_ref() == Some(&w::CheckPositions::default()) {
                out.positions = None;
            }
        }
    }
}

pub(super) fn write_mixed_media(property: &d::MixedMediaProperty, out: &mut MixedMediaStatus) {
    match property {
        d::MixedMediaProperty::Modes(modes) => {
            out.modes = Some(Modes {
                cash_accept: modes.contains(&d::MixedMode::CashAccept),
                check_accept: modes.contains(&d::MixedMode::CheckAccept),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::changed_payload;
    use super::*;
    use crate::domain::status::StatusChange;
    use serde_json::json;
    use std::collections::BTreeSet;

    #[test]
    fn test_acceptor_attention_is_state_on_the_wire() {
        assert_eq!(d::AcceptorState::Attention.to_wire(), Some(w::Acceptor::State));
    }

    #[test]
    fn test_position_change_copied_to_each_flag() {
        let change = StatusChange::Check(d::CheckProperty::Positions {
            positions: BTreeSet::from([d::CheckPosition::Input, d::CheckPosition::Refused]),
            change: d::CheckPositionProperty::JammedShutterPosition(d::JammedShutterPosition::PartiallyOpen),
        });
        let value = serde_json::to_value(changed_payload(&change).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({"check": {"positions": {
                "input": {"jammedShutterPosition": "partiallyOpen"},
                "refused": {"jammedShutterPosition": "partiallyOpen"}
            }}})
        );
    }

    #[test]
    fn test_unsupported_position_property_sends_nothing() {
        let change = StatusChange::Check(d::CheckProperty::Positions {
            positions: BTreeSet::from([d::CheckPosition::Output]),
            change: d::CheckPositionProperty::Shutter(d::ShutterState::NotSupported),
        });
        assert!(changed_payload(&change).is_none());
    }

    #[test]
    fn test_mixed_media_modes() {
        let change = StatusChange::MixedMedia(d::MixedMediaProperty::Modes(BTreeSet::from([
            d::MixedMode::CheckAccept,
        ])));
        let value = serde_json::to_value(changed_payload(&change).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({"mixedMedia": {"modes": {"cashAccept": false, "checkAccept": true}}})
        );
    }
}
