use super::ToWire;
use crate::domain::status::card_reader as d;
use crate::messages::card_reader as w;

wire_enum!(d::MediaState => w::Media,
    same [Unknown, Present, NotPresent, Jammed, Entering, Latched], absent [NotSupported]);
wire_enum!(d::SecurityState => w::Security,
    same [NotReady, Open], absent [NotSupported]);
wire_enum!(d::ChipPowerState => w::ChipPower,
    same [Unknown, Online, Busy, PoweredOff, NoDevice, HardwareError, NoCard], absent [NotSupported]);
wire_enum!(d::ModuleState => w::ModuleState,
    same [Ok, Inoperable, Unknown], absent [NotSupported]);

pub(super) fn write(property: &d::CardReaderProperty, out: &mut w::CardReaderStatus) {
    match property {
        d::CardReaderProperty::Media(v) => out.media = v.to_wire(),
        d::CardReaderProperty::Security(v) => out.security = v.to_wire(),
        d::CardReaderProperty::ChipPower(v) => out.chip_power = v.to_wire(),
        d::CardReaderProperty::ChipModule(v) => out.chip_module = v.to_wire(),
        d::CardReaderProperty::MagWriteModule(v) => out.mag_write_module = v.to_wire(),
        d::CardReaderProperty::FrontImageModule(v) => out.front_image_module = v.to_wire(),
        d::CardReaderProperty::BackImageModule(v) => out.back_image_module = v.to_wire(),
    }
}
