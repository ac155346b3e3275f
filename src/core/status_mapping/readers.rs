use super::ToWire;
use crate::domain::status::readers as d;
use crate::messages::barcode_reader as barcode;
use crate::messages::biometric as bio;

wire_enum!(d::ScannerState => barcode::Scanner, same [On, Off, Inoperative, Unknown]);
wire_enum!(d::SubjectState => bio::Subject,
    same [Present, NotPresent, Unknown], absent [NotSupported]);
wire_enum!(d::DataPersistence => bio::DataPersistence,
    same [Persist, Clear], absent [NotSupported]);

pub(super) fn write_barcode_reader(
    property: &d::BarcodeReaderProperty,
    out: &mut barcode::BarcodeReaderStatus,
) {
    match property {
        d::BarcodeReaderProperty::Scanner(v) => out.scanner = v.to_wire(),
    }
}

pub(super) fn write_biometric(property: &d::BiometricProperty, out: &mut bio::BiometricStatus) {
    match property {
        d::BiometricProperty::Subject(v) => out.subject = v.to_wire(),
        d::BiometricProperty::Capture(v) => out.capture = Some(*v),
        d::BiometricProperty::DataPersistence(v) => out.data_persistence = v.to_wire(),
        d::BiometricProperty::RemainingStorage(v) => out.remaining_storage = Some(*v),
    }
}
