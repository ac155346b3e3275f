use super::{non_negative, ToWire};
use crate::domain::status::printer as d;
use crate::messages::printer as w;

wire_enum!(d::MediaState => w::Media,
    same [Unknown, Present, NotPresent, Jammed, Entering, Retracted], absent [NotSupported]);
wire_enum!(d::SupplyState => w::Supply,
    same [Full, Low, Out, Unknown], absent [NotSupported]);
wire_enum!(d::LampState => w::Lamp,
    same [Ok, Fading, Inop, Unknown], absent [NotSupported]);
wire_enum!(d::BlackMarkMode => w::BlackMarkMode,
    same [On, Off, Unknown], absent [NotSupported]);
wire_enum!(d::RetractBinState => w::RetractBinState,
    same [Ok, Full, High, Missing, Unknown]);
wire_enum!(d::PaperSupplyState => w::PaperSupply,
    same [Unknown, Full, Low, Out, Jammed], absent [NotSupported]);
wire_enum!(d::PaperTypeState => w::PaperType,
    same [Unknown, Single, Dual], absent [NotSupported]);

fn insert<T>(map: &mut w::SourceMap<T>, source: &d::PaperSource, value: T) {
    match source {
        d::PaperSource::Upper => map.upper = Some(value),
        d::PaperSource::Lower => map.lower = Some(value),
        d::PaperSource::External => map.external = Some(value),
        d::PaperSource::Aux => map.aux = Some(value),
        d::PaperSource::Aux2 => map.aux2 = Some(value),
        d::PaperSource::Park => map.park = Some(value),
        d::PaperSource::Custom(name) => {
            map.extended.insert(name.clone(), value);
        }
    }
}

pub(super) fn write(property: &d::PrinterProperty, out: &mut w::PrinterStatus) {
    match property {
        d::PrinterProperty::Media(v) => out.media = v.to_wire(),
        d::PrinterProperty::Paper { source, state } => {
            if let (Some(source), Some(state)) = (source, state.to_wire()) {
                insert(out.paper.get_or_insert_with(Default::default), source, state);
            }
        }
        d::PrinterProperty::PaperType { source, state } => {
            if let (Some(source), Some(state)) = (source, state.to_wire()) {
                insert(out.paper_type.get_or_insert_with(Default::default), source, state);
            }
        }
        d::PrinterProperty::Toner(v) => out.toner = v.to_wire(),
        d::PrinterProperty::Ink(v) => out.ink = v.to_wire(),
        d::PrinterProperty::Lamp(v) => out.lamp = v.to_wire(),
        d::PrinterProperty::RetractBin { bin, change } => {
            // 完整狀態以索引對應 bin；變動事件再由 keep_changed_bin 壓成一筆
            let bins = out.retract_bins.get_or_insert_with(Vec::new);
            if bins.len() <= *bin {
                bins.resize(*bin + 1, w::RetractBin::default());
            }
            match change {
                d::RetractBinProperty::State(v) => bins[*bin].state = v.to_wire(),
                d::RetractBinProperty::Count(v) => bins[*bin].count = Some(*v),
            }
        }
        d::PrinterProperty::MediaOnStacker(v) => out.media_on_stacker = non_negative(*v),
        d::PrinterProperty::BlackMarkMode(v) => out.black_mark_mode = v.to_wire(),
    }
}

/// A status changed event carries one entry: the bin whose property changed.
pub(super) fn keep_changed_bin(out: &mut w::PrinterStatus) {
    if let Some(bins) = out.retract_bins.as_mut() {
        bins.retain(|bin| bin.state.is_some() || bin.count.is_some());
    }
}
