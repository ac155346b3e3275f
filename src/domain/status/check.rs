use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AcceptorState {
    Ok,
    Attention,
    Stop,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaState {
    Present,
    NotPresent,
    Jammed,
    #[default]
    Unknown,
    Position,
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupplyState {
    Full,
    Low,
    Out,
    Unknown,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScannerState {
    Ok,
    Fading,
    Inoperative,
    Unknown,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackerState {
    Empty,
    NotEmpty,
    Full,
    Inoperative,
    Unknown,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaFeederState {
    Empty,
    NotEmpty,
    Inoperative,
    Unknown,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckPosition {
    Input,
    Output,
    Refused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShutterState {
    Closed,
    Open,
    Jammed,
    Unknown,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionStatus {
    Empty,
    NotEmpty,
    Unknown,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportState {
    Ok,
    Inoperative,
    Unknown,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMediaStatus {
    Empty,
    NotEmpty,
    Unknown,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JammedShutterPosition {
    #[default]
    NotSupported,
    NotJammed,
    Open,
    PartiallyOpen,
    Closed,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckPositionStatus {
    pub shutter: ShutterState,
    pub position_status: PositionStatus,
    pub transport: TransportState,
    pub transport_media_status: TransportMediaStatus,
    pub jammed_shutter_position: JammedShutterPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckPositionProperty {
    Shutter(ShutterState),
    PositionStatus(PositionStatus),
    Transport(TransportState),
    TransportMediaStatus(TransportMediaStatus),
    JammedShutterPosition(JammedShutterPosition),
}

impl CheckPositionStatus {
    pub fn apply(&mut self, property: &CheckPositionProperty) {
        match *property {
            CheckPositionProperty::Shutter(v) => self.shutter = v,
            CheckPositionProperty::PositionStatus(v) => self.position_status = v,
            CheckPositionProperty::Transport(v) => self.transport = v,
            CheckPositionProperty::TransportMediaStatus(v) => self.transport_media_status = v,
            CheckPositionProperty::JammedShutterPosition(v) => self.jammed_shutter_position = v,
        }
    }

    pub fn properties(&self) -> [CheckPositionProperty; 5] {
        [
            CheckPositionProperty::Shutter(self.shutter),
            CheckPositionProperty::PositionStatus(self.position_status),
            CheckPositionProperty::Transport(self.transport),
            CheckPositionProperty::TransportMediaStatus(self.transport_media_status),
            CheckPositionProperty::JammedShutterPosition(self.jammed_shutter_position),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckStatus {
    pub acceptor: AcceptorState,
    pub media: MediaState,
    pub toner: SupplyState,
    pub ink: SupplyState,
    pub front_image_scanner: ScannerState,
    pub back_image_scanner: ScannerState,
    pub micr_reader: ScannerState,
    pub stacker: StackerState,
    pub rebuncher: StackerState,
    pub media_feeder: MediaFeederState,
    pub positions: BTreeMap<CheckPosition, CheckPositionStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckProperty {
    Acceptor(AcceptorState),
    Media(MediaState),
    Toner(SupplyState),
    Ink(SupplyState),
    FrontImageScanner(ScannerState),
    BackImageScanner(ScannerState),
    MicrReader(ScannerState),
    Stacker(StackerState),
    Rebuncher(StackerState),
    MediaFeeder(MediaFeederState),
    Positions {
        positions: BTreeSet<CheckPosition>,
        change: CheckPositionProperty,
    },
}

impl CheckStatus {
    pub fn apply(&mut self, property: &CheckProperty) {
        match property {
            CheckProperty::Acceptor(v) => self.acceptor = *v,
            CheckProperty::Media(v) => self.media = *v,
            CheckProperty::Toner(v) => self.toner = *v,
            CheckProperty::Ink(v) => self.ink = *v,
            CheckProperty::FrontImageScanner(v) => self.front_image_scanner = *v,
            CheckProperty::BackImageScanner(v) => self.back_image_scanner = *v,
            CheckProperty::MicrReader(v) => self.micr_reader = *v,
            CheckProperty::Stacker(v) => self.stacker = *v,
            CheckProperty::Rebuncher(v) => self.rebuncher = *v,
            CheckProperty::MediaFeeder(v) => self.media_feeder = *v,
            CheckProperty::Positions { positions, change } => {
                for position in positions {
                    self.positions.entry(*position).or_default().apply(change);
                }
            }
        }
    }

    pub fn properties(&self) -> Vec<CheckProperty> {
        let mut properties = vec![
            CheckProperty::Acceptor(self.acceptor),
            CheckProperty::Media(self.media),
            CheckProperty::Toner(self.toner),
            CheckProperty::Ink(self.ink),
            CheckProperty::FrontImageScanner(self.front_image_scanner),
            CheckProperty::BackImageScanner(self.back_image_scanner),
            CheckProperty::MicrReader(self.micr_reader),
            CheckProperty::Stacker(self.stacker),
            CheckProperty::Rebuncher(self.rebuncher),
            CheckProperty::MediaFeeder(self.media_feeder),
        ];
        for (position, status) in &self.positions {
            properties.extend(status.properties().into_iter().map(|change| {
                CheckProperty::Positions {
                    positions: BTreeSet::from([*position]),
                    change,
                }
            }));
        }
        properties
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MixedMode {
    CashAccept,
    CheckAccept,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MixedMediaStatus {
    pub modes: BTreeSet<MixedMode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MixedMediaProperty {
    Modes(BTreeSet<MixedMode>),
}

impl MixedMediaStatus {
    pub fn apply(&mut self, property: &MixedMediaProperty) {
        match property {
            MixedMediaProperty::Modes(modes) => self.modes = modes.clone(),
        }
    }

    pub fn properties(&self) -> Vec<MixedMediaProperty> {
        vec![MixedMediaProperty::Modes(self.modes.clone())]
    }
}
