use super::ToWire;
use crate::domain::status::vendor as d;
use crate::messages::vendor as w;

wire_enum!(d::VendorModeDeviceState => w::VendorModeDevice, same [Online, Offline]);
wire_enum!(d::VendorModeServiceState => w::VendorModeService,
    same [EnterPending, Active, ExitPending, Inactive]);
wire_enum!(d::AccessLevel => w::AccessLevel, same [NotActive, Basic, Intermediate, Full]);

pub(super) fn write_vendor_mode(property: &d::VendorModeProperty, out: &mut w::VendorModeStatus) {
    match property {
        d::VendorModeProperty::Device(v) => out.device = v.to_wire(),
        d::VendorModeProperty::Service(v) => out.service = v.to_wire(),
    }
}

pub(super) fn write_vendor_application(
    property: &d::VendorApplicationProperty,
    out: &mut w::VendorApplicationStatus,
) {
    match property {
        d::VendorApplicationProperty::AccessLevel(v) => out.access_level = v.to_wire(),
    }
}
