use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaState {
    #[default]
    Unknown,
    Present,
    NotPresent,
    Jammed,
    Entering,
    Retracted,
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
pub enum LampState {
    Ok,
    Fading,
    Inop,
    Unknown,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlackMarkMode {
    On,
    Off,
    Unknown,
    #[default]
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetractBinState {
    Ok,
    Full,
    High,
    Missing,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetractBinStatus {
    pub state: RetractBinState,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetractBinProperty {
    State(RetractBinState),
    Count(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PaperSource {
    Upper,
    Lower,
    External,
    Aux,
    Aux2,
    Park,
    Custom(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaperSupplyState {
    #[default]
    Unknown,
    Full,
    Low,
    Out,
    Jammed,
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaperTypeState {
    #[default]
    Unknown,
    Single,
    Dual,
    NotSupported,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterStatus {
    pub media: MediaState,
    pub paper: BTreeMap<PaperSource, PaperSupplyState>,
    pub paper_type: BTreeMap<PaperSource, PaperTypeState>,
    pub toner: SupplyState,
    pub ink: SupplyState,
    pub lamp: LampState,
    pub retract_bins: Vec<RetractBinStatus>,
    /// 負值代表不支援
    pub media_on_stacker: i32,
    pub black_mark_mode: BlackMarkMode,
}

impl Default for PrinterStatus {
    fn default() -> Self {
        Self {
            media: MediaState::default(),
            paper: BTreeMap::new(),
            paper_type: BTreeMap::new(),
            toner: SupplyState::default(),
            ink: SupplyState::default(),
            lamp: LampState::default(),
            retract_bins: Vec::new(),
            media_on_stacker: -1,
            black_mark_mode: BlackMarkMode::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrinterProperty {
    Media(MediaState),
    /// `source` 為 None 時不會送出事件
    Paper {
        source: Option<PaperSource>,
        state: PaperSupplyState,
    },
    PaperType {
        source: Option<PaperSource>,
        state: PaperTypeState,
    },
    Toner(SupplyState),
    Ink(SupplyState),
    Lamp(LampState),
    RetractBin {
        bin: usize,
        change: RetractBinProperty,
    },
    MediaOnStacker(i32),
    BlackMarkMode(BlackMarkMode),
}

impl PrinterStatus {
    pub fn apply(&mut self, property: &PrinterProperty) {
        match property {
            PrinterProperty::Media(v) => self.media = *v,
            PrinterProperty::Paper { source, state } => {
                if let Some(source) = source {
                    self.paper.insert(source.clone(), *state);
                }
            }
            PrinterProperty::PaperType { source, state } => {
                if let Some(source) = source {
                    self.paper_type.insert(source.clone(), *state);
                }
            }
            PrinterProperty::Toner(v) => self.toner = *v,
            PrinterProperty::Ink(v) => self.ink = *v,
            PrinterProperty::Lamp(v) => self.lamp = *v,
            PrinterProperty::RetractBin { bin, change } => {
                if self.retract_bins.len() <= *bin {
                    self.retract_bins.resize(*bin + 1, RetractBinStatus::default());
                }
                let status = &mut self.retract_bins[*bin];
                match *change {
                    RetractBinProperty::State(v) => status.state = v,
                    RetractBinProperty::Count(v) => status.count = v,
                }
            }
            PrinterProperty::MediaOnStacker(v) => self.media_on_stacker = *v,
            PrinterProperty::BlackMarkMode(v) => self.black_mark_mode = *v,
        }
    }

    pub fn properties(&self) -> Vec<PrinterProperty> {
        let mut properties = vec![
            PrinterProperty::Media(self.media),
            PrinterProperty::Toner(self.toner),
            PrinterProperty::Ink(self.ink),
            PrinterProperty::Lamp(self.lamp),
            PrinterProperty::MediaOnStacker(self.media_on_stacker),
            PrinterProperty::BlackMarkMode(self.black_mark_mode),
        ];
        properties.extend(self.paper.iter().map(|(source, state)| PrinterProperty::Paper {
            source: Some(source.clone()),
            state: *state,
        }));
        properties.extend(
            self.paper_type
                .iter()
                .map(|(source, state)| PrinterProperty::PaperType {
                    source: Some(source.clone()),
                    state: *state,
                }),
        );
        for (bin, status) in self.retract_bins.iter().enumerate() {
            properties.push(PrinterProperty::RetractBin {
                bin,
                change: RetractBinProperty::State(status.state),
            });
            properties.push(PrinterProperty::RetractBin {
                bin,
                change: RetractBinProperty::Count(status.count),
            });
        }
        properties
    }
}
