//! Which registered messages the device actually supports.

use crate::core::registry::{MessageInfo, MessageRegistry};
use crate::domain::capabilities::CommonCapabilities;
use crate::messages::{InterfaceName, MessageKind};
use std::collections::BTreeMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedMessage {
    pub kind: MessageKind,
    pub versions: Vec<String>,
}

/// Full message name → supported type and versions.
pub type SupportedMessages = BTreeMap<String, SupportedMessage>;

fn lookup(
    registry: &MessageRegistry,
    interface: InterfaceName,
    short_name: &str,
    accepts: impl Fn(MessageKind) -> bool,
) -> Option<&'static MessageInfo> {
    let full_name = format!("{}.{}", interface.prefix(), short_name);
    match registry.get(&full_name) {
        Some(info) if accepts(info.kind) => Some(info),
        Some(info) => {
            warn!("{} 宣告的類型不符，實際為 {:?}，略過", full_name, info.kind);
            None
        }
        None => {
            warn!("未知的訊息 {}，略過", full_name);
            None
        }
    }
}

pub fn supported_messages(capabilities: &CommonCapabilities, registry: &MessageRegistry) -> SupportedMessages {
    let mut supported = SupportedMessages::new();

    for (interface, support) in &capabilities.interfaces {
        let commands = support
            .commands
            .iter()
            .filter_map(|name| lookup(registry, *interface, name, |kind| kind == MessageKind::Command));
        let events = support.events.iter().filter_map(|name| {
            lookup(registry, *interface, name, |kind| {
                matches!(kind, MessageKind::Event | MessageKind::Unsolicited)
            })
        });

        for info in commands.chain(events) {
            supported.insert(
                info.name.to_string(),
                SupportedMessage {
                    kind: info.kind,
                    versions: info.versions.iter().map(|v| v.to_string()).collect(),
                },
            );
        }
    }

    debug!("支援的訊息: {} 個", supported.len());
    supported
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::capabilities::InterfaceSupport;

    fn capabilities(interface: InterfaceName, support: InterfaceSupport) -> CommonCapabilities {
        CommonCapabilities {
            interfaces: BTreeMap::from([(interface, support)]),
            ..Default::default()
        }
    }

    #[test]
    fn test_known_commands_and_events_included() {
        let caps = capabilities(
            InterfaceName::Printer,
            InterfaceSupport::new(["RetractMedia"], ["MediaAutoRetractedEvent"]),
        );
        let supported = supported_messages(&caps, &MessageRegistry::new());
        assert_eq!(supported.len(), 2);
        assert_eq!(supported["Printer.RetractMedia"].kind, MessageKind::Command);
        assert_eq!(supported["Printer.RetractMedia"].versions, vec!["2.0".to_string()]);
        assert_eq!(
            supported["Printer.MediaAutoRetractedEvent"].kind,
            MessageKind::Unsolicited
        );
    }

    #[test]
    fn test_unknown_and_mismatched_declarations_skipped() {
        let caps = capabilities(
            InterfaceName::Printer,
            InterfaceSupport::new(["Print", "MediaAutoRetractedEvent"], ["RetractMedia"]),
        );
        let supported = supported_messages(&caps, &MessageRegistry::new());
        assert!(supported.is_empty());
    }

    #[test]
    fn test_interface_prefix_applied() {
        let caps = capabilities(InterfaceName::CashDispenser, InterfaceSupport::new(["Reset"], Vec::<String>::new()));
        assert!(supported_messages(&caps, &MessageRegistry::new()).is_empty());

        let caps = capabilities(InterfaceName::TextTerminal, InterfaceSupport::new(["Reset"], Vec::<String>::new()));
        assert!(supported_messages(&caps, &MessageRegistry::new()).contains_key("TextTerminal.Reset"));
    }
}
