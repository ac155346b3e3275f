//! CashManagement, CashDispenser and CashAcceptor status.

use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputPosition {
    Default,
    Left,
    Right,
    Center,
    Top,
    Bottom,
    Front,
    Rear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputPosition {
    Default,
    Left,
    Right,
    Center,
    Top,
    Bottom,
    Front,
    Rear,
}

/// 收納機可以回報入口和出口兩種位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CashPosition {
    Input(InputPosition),
    Output(OutputPosition),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitsState {
    Ok,
    Attention,
    Stop,
    Unknown,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShutterState {
    Closed,
    Open,
    JammedOpen,
    JammedPartiallyOpen,
    JammedClosed,
    JammedUnknown,
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
pub enum TransportStatus {
    Empty,
    NotEmpty,
    NotEmptyCustomer,
    Unknown,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CashPositionStatus {
    pub shutter: ShutterState,
    pub position_status: PositionStatus,
    pub transport: TransportState,
    pub transport_status: TransportStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashPositionProperty {
    Shutter(ShutterState),
    PositionStatus(PositionStatus),
    Transport(TransportState),
    TransportStatus(TransportStatus),
}

impl CashPositionStatus {
    pub fn apply(&mut self, property: &CashPositionProperty) {
        match *property {
            CashPositionProperty::Shutter(v) => self.shutter = v,
            CashPositionProperty::PositionStatus(v) => self.position_status = v,
            CashPositionProperty::Transport(v) => self.transport = v,
            CashPositionProperty::TransportStatus(v) => self.transport_status = v,
        }
    }

    pub fn properties(&self) -> [CashPositionProperty; 4] {
        [
            CashPositionProperty::Shutter(self.shutter),
            CashPositionProperty::PositionStatus(self.position_status),
            CashPositionProperty::Transport(self.transport),
            CashPositionProperty::TransportStatus(self.transport_status),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CashManagementStatus {
    pub dispenser: UnitsState,
    pub acceptor: UnitsState,
    pub output_positions: BTreeMap<OutputPosition, CashPositionStatus>,
    pub input_positions: BTreeMap<CashPosition, CashPositionStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CashManagementProperty {
    Dispenser(UnitsState),
    Acceptor(UnitsState),
    /// 同一個變動套用到集合裡的每個出鈔口
    OutputPositions {
        positions: BTreeSet<OutputPosition>,
        change: CashPositionProperty,
    },
    InputPositions {
        positions: BTreeSet<CashPosition>,
        change: CashPositionProperty,
    },
}

impl CashManagementStatus {
    pub fn apply(&mut self, property: &CashManagementProperty) {
        match property {
            CashManagementProperty::Dispenser(v) => self.dispenser = *v,
            CashManagementProperty::Acceptor(v) => self.acceptor = *v,
            CashManagementProperty::OutputPositions { positions, change } => {
                for position in positions {
                    self.output_positions.entry(*position).or_default().apply(change);
                }
            }
            CashManagementProperty::InputPositions { positions, change } => {
                for position in positions {
                    self.input_positions.entry(*position).or_default().apply(change);
                }
            }
        }
    }

    pub fn properties(&self) -> Vec<CashManagementProperty> {
        let mut properties = vec![
            CashManagementProperty::Dispenser(self.dispenser),
            CashManagementProperty::Acceptor(self.acceptor),
        ];
        for (position, status) in &self.output_positions {
            properties.extend(status.properties().into_iter().map(|change| {
                CashManagementProperty::OutputPositions {
                    positions: BTreeSet::from([*position]),
                    change,
                }
            }));
        }
        for (position, status) in &self.input_positions {
            properties.extend(status.properties().into_iter().map(|change| {
                CashManagementProperty::InputPositions {
                    positions: BTreeSet::from([*position]),
                    change,
                }
            }));
        }
        properties
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispenserStacker {
    Empty,
    NotEmpty,
    NotEmptyCustomer,
    NotEmptyUnknown,
    Unknown,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CashDispenserStatus {
    pub intermediate_stacker: DispenserStacker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashDispenserProperty {
    IntermediateStacker(DispenserStacker),
}

impl CashDispenserStatus {
    pub fn apply(&mut self, property: &CashDispenserProperty) {
        match *property {
            CashDispenserProperty::IntermediateStacker(v) => self.intermediate_stacker = v,
        }
    }

    pub fn properties(&self) -> Vec<CashDispenserProperty> {
        vec![CashDispenserProperty::IntermediateStacker(self.intermediate_stacker)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AcceptorStacker {
    Empty,
    NotEmpty,
    Full,
    Unknown,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackerItems {
    CustomerAccess,
    NoCustomerAccess,
    AccessUnknown,
    NoItems,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BanknoteReaderState {
    Ok,
    Inoperable,
    Unknown,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CashAcceptorStatus {
    pub intermediate_stacker: AcceptorStacker,
    pub stacker_items: StackerItems,
    pub banknote_reader: BanknoteReaderState,
    pub drop_box: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashAcceptorProperty {
    IntermediateStacker(AcceptorStacker),
    StackerItems(StackerItems),
    BanknoteReader(BanknoteReaderState),
    DropBox(bool),
}

impl CashAcceptorStatus {
    pub fn apply(&mut self, property: &CashAcceptorProperty) {
        match *property {
            CashAcceptorProperty::IntermediateStacker(v) => self.intermediate_stacker = v,
            CashAcceptorProperty::StackerItems(v) => self.stacker_items = v,
            CashAcceptorProperty::BanknoteReader(v) => self.banknote_reader = v,
            CashAcceptorProperty::DropBox(v) => self.drop_box = v,
        }
    }

    pub fn properties(&self) -> Vec<CashAcceptorProperty> {
        vec![
            CashAcceptorProperty::IntermediateStacker(self.intermediate_stacker),
            CashAcceptorProperty::StackerItems(self.stacker_items),
            CashAcceptorProperty::BanknoteReader(self.banknote_reader),
            CashAcceptorProperty::DropBox(self.drop_box),
        ]
    }
}
