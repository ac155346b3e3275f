use super::ToWire;
use crate::domain::status::camera as d;
use crate::messages::camera as w;

wire_enum!(d::CameraMediaState => w::MediaState, same [Ok, High, Full, Unknown]);
wire_enum!(d::CameraState => w::CameraState, same [Ok, Unknown], map [Inoperable => Inop]);

fn insert<T>(map: &mut Option<w::LocationMap<T>>, location: &d::CameraLocation, value: T) {
    let map = map.get_or_insert_with(Default::default);
    match location {
        d::CameraLocation::Room => map.room = Some(value),
        d::CameraLocation::Person => map.person = Some(value),
        d::CameraLocation::ExitSlot => map.exit_slot = Some(value),
        d::CameraLocation::Custom(name) => {
            map.extended.insert(name.clone(), value);
        }
    }
}

pub(super) fn write(property: &d::CameraProperty, out: &mut w::CameraStatus) {
    match property {
        d::CameraProperty::Media {
            location: Some(location),
            state,
        } => {
            if let Some(state) = state.to_wire() {
                insert(&mut out.media, location, state);
            }
        }
        d::CameraProperty::Cameras {
            location: Some(location),
            state,
        } => {
            if let Some(state) = state.to_wire() {
                insert(&mut out.cameras, location, state);
            }
        }
        d::CameraProperty::Pictures {
            location: Some(location),
            count,
        } => insert(&mut out.pictures, location, *count),
        // 沒有位置就不送
        _ => {}
    }
}
