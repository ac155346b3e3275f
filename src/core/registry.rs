//! Static table of every message the framework implements.

use crate::messages::{InterfaceName, MessageKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageInfo {
    pub name: &'static str,
    pub kind: MessageKind,
    pub versions: &'static [&'static str],
}

impl MessageInfo {
    const fn new(name: &'static str, kind: MessageKind, versions: &'static [&'static str]) -> Self {
        Self {
            name,
            kind,
            versions,
        }
    }

    pub fn interface(&self) -> Option<InterfaceName> {
        InterfaceName::of_message(self.name)
    }

    /// Name without the interface prefix.
    pub fn short_name(&self) -> &'static str {
        self.name.split_once('.').map_or(self.name, |(_, short)| short)
    }

    /// 回覆時使用的版本 (最新的那個)
    pub fn current_version(&self) -> Option<&'static str> {
        self.versions.last().copied()
    }
}

const V1: &[&str] = &["1.0"];
const V2: &[&str] = &["2.0"];

const MESSAGES: &[MessageInfo] = &[
    MessageInfo::new("Common.Capabilities", MessageKind::Command, V1),
    MessageInfo::new("Common.Status", MessageKind::Command, V1),
    MessageInfo::new("Common.GetTransactionState", MessageKind::Command, V1),
    MessageInfo::new("Common.SetTransactionState", MessageKind::Command, V1),
    MessageInfo::new("Common.Cancel", MessageKind::Command, V1),
    MessageInfo::new("Common.PowerSaveControl", MessageKind::Command, V1),
    MessageInfo::new("Common.StatusChangedEvent", MessageKind::Unsolicited, V1),
    MessageInfo::new("Common.ErrorEvent", MessageKind::Unsolicited, V1),
    MessageInfo::new("Common.NonceClearedEvent", MessageKind::Unsolicited, V1),
    MessageInfo::new("CardReader.ResetCount", MessageKind::Command, V1),
    MessageInfo::new("CardReader.SetKey", MessageKind::Command, V1),
    MessageInfo::new("CashDispenser.Count", MessageKind::Command, V1),
    MessageInfo::new("CashDispenser.GetMixTypes", MessageKind::Command, V1),
    MessageInfo::new("CashDispenser.Dispense", MessageKind::Command, V1),
    MessageInfo::new("CashDispenser.DelayedDispenseEvent", MessageKind::Event, V1),
    MessageInfo::new("Check.MediaInEnd", MessageKind::Command, V1),
    MessageInfo::new("Check.SupplyReplenish", MessageKind::Command, V1),
    MessageInfo::new("Printer.RetractMedia", MessageKind::Command, V2),
    MessageInfo::new("Printer.MediaAutoRetractedEvent", MessageKind::Unsolicited, V2),
    MessageInfo::new("TextTerminal.Reset", MessageKind::Command, V2),
    MessageInfo::new("VendorApplication.StartLocalApplication", MessageKind::Command, V1),
    MessageInfo::new("ServicePublisher.GetServices", MessageKind::Command, V2),
];

#[derive(Debug, Clone, Copy)]
pub struct MessageRegistry {
    messages: &'static [MessageInfo],
}

impl Default for MessageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageRegistry {
    pub const fn new() -> Self {
        Self { messages: MESSAGES }
    }

    pub fn get(&self, name: &str) -> Option<&'static MessageInfo> {
        self.messages.iter().find(|m| m.name == name)
    }

    pub fn is_command(&self, name: &str) -> bool {
        self.get(name).is_some_and(|m| m.kind == MessageKind::Command)
    }

    pub fn version_of(&self, name: &str) -> Option<&'static str> {
        self.get(name).and_then(MessageInfo::current_version)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static MessageInfo> {
        self.messages.iter()
    }
}
