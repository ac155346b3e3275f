use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CameraLocation {
    Room,
    Person,
    ExitSlot,
    Custom(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMediaState {
    Ok,
    High,
    Full,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraState {
    Ok,
    Inoperable,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CameraStatus {
    pub media: BTreeMap<CameraLocation, CameraMediaState>,
    pub cameras: BTreeMap<CameraLocation, CameraState>,
    pub pictures: BTreeMap<CameraLocation, u32>,
}

/// `location` 為 None 表示裝置沒有標示位置，這種變動不會送出事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraProperty {
    Media {
        location: Option<CameraLocation>,
        state: CameraMediaState,
    },
    Cameras {
        location: Option<CameraLocation>,
        state: CameraState,
    },
    Pictures {
        location: Option<CameraLocation>,
        count: u32,
    },
}

impl CameraStatus {
    pub fn apply(&mut self, property: &CameraProperty) {
        match property {
            CameraProperty::Media {
                location: Some(location),
                state,
            } => {
                self.media.insert(location.clone(), *state);
            }
            CameraProperty::Cameras {
                location: Some(location),
                state,
            } => {
                self.cameras.insert(location.clone(), *state);
            }
            CameraProperty::Pictures {
                location: Some(location),
                count,
            } => {
                self.pictures.insert(location.clone(), *count);
            }
            _ => {}
        }
    }

    pub fn properties(&self) -> Vec<CameraProperty> {
        let media = self.media.iter().map(|(location, state)| CameraProperty::Media {
            location: Some(location.clone()),
            state: *state,
        });
        let cameras = self.cameras.iter().map(|(location, state)| CameraProperty::Cameras {
            location: Some(location.clone()),
            state: *state,
        });
        let pictures = self.pictures.iter().map(|(location, count)| CameraProperty::Pictures {
            location: Some(location.clone()),
            count: *count,
        });
        media.chain(cameras).chain(pictures).collect()
    }
}
