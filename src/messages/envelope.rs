use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Header `type` of a wire message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKind {
    Command,
    Acknowledge,
    Event,
    Completion,
    Unsolicited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AcknowledgeStatus {
    Ok,
    InvalidMessage,
    #[serde(rename = "invalidRequestID")]
    InvalidRequestId,
    TooManyRequests,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// 毫秒，只用在 command；0 或沒有代表不限時
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AcknowledgeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

impl Header {
    fn new(kind: MessageKind, name: &str, request_id: Option<i64>) -> Self {
        Self {
            kind,
            name: name.to_string(),
            request_id,
            version: None,
            timeout: None,
            status: None,
            error_description: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub header: Header,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Envelope {
    pub fn command(name: &str, request_id: i64, payload: Value) -> Self {
        Self {
            header: Header::new(MessageKind::Command, name, Some(request_id)),
            payload: Some(payload),
        }
    }

    pub fn acknowledge(
        name: &str,
        request_id: i64,
        status: AcknowledgeStatus,
        error_description: Option<String>,
    ) -> Self {
        let mut header = Header::new(MessageKind::Acknowledge, name, Some(request_id));
        header.status = Some(status);
        header.error_description = error_description;
        Self {
            header,
            payload: None,
        }
    }

    pub fn event(name: &str, request_id: i64, payload: Value) -> Self {
        Self {
            header: Header::new(MessageKind::Event, name, Some(request_id)),
            payload: Some(payload),
        }
    }

    pub fn completion(name: &str, request_id: i64, payload: Value) -> Self {
        Self {
            header: Header::new(MessageKind::Completion, name, Some(request_id)),
            payload: Some(payload),
        }
    }

    pub fn unsolicited(name: &str, payload: Value) -> Self {
        Self {
            header: Header::new(MessageKind::Unsolicited, name, None),
            payload: Some(payload),
        }
    }

    pub fn with_version(mut self, version: Option<&str>) -> Self {
        self.header.version = version.map(str::to_string);
        self
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.header.timeout = Some(timeout_ms);
        self
    }

    pub fn kind(&self) -> MessageKind {
        self.header.kind
    }

    pub fn name(&self) -> &str {
        &self.header.name
    }

    pub fn request_id(&self) -> Option<i64> {
        self.header.request_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_command_header() {
        let text = r#"{"header":{"type":"command","name":"Printer.RetractMedia","requestId":7,"version":"2.0","timeout":5000},"payload":{"mediaControl":"unit1"}}"#;
        let envelope: Envelope = serde_json::from_str(text).unwrap();
        assert_eq!(envelope.kind(), MessageKind::Command);
        assert_eq!(envelope.name(), "Printer.RetractMedia");
        assert_eq!(envelope.request_id(), Some(7));
        assert_eq!(envelope.header.timeout, Some(5000));
        assert_eq!(envelope.payload, Some(json!({"mediaControl": "unit1"})));
    }

    #[test]
    fn test_acknowledge_wire_shape() {
        let ack = Envelope::acknowledge(
            "Common.Status",
            3,
            AcknowledgeStatus::InvalidRequestId,
            Some("duplicate".to_string()),
        );
        let value = serde_json::to_value(&ack).unwrap();
        assert_eq!(
            value,
            json!({"header": {"type": "acknowledge", "name": "Common.Status", "requestId": 3,
                               "status": "invalidRequestID", "errorDescription": "duplicate"}})
        );
    }

    #[test]
    fn test_unsolicited_has_no_request_id() {
        let msg = Envelope::unsolicited("Common.StatusChangedEvent", json!({}));
        let value = serde_json::to_value(&msg).unwrap();
        assert!(value["header"].get("requestId").is_none());
        assert_eq!(value["header"]["type"], "unsolicited");
    }
}
