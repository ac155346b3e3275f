use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompletionCode {
    Success,
    CommandErrorCode,
    Canceled,
    DeviceNotReady,
    HardwareError,
    InternalError,
    InvalidCommand,
    #[serde(rename = "invalidRequestID")]
    InvalidRequestId,
    TimeOut,
    UnsupportedCommand,
    InvalidData,
    UserError,
    UnsupportedData,
    FraudAttempt,
    SequenceError,
    AuthorisationRequired,
    NoCommandNonce,
    InvalidToken,
    InvalidTokenNonce,
    #[serde(rename = "invalidTokenHMAC")]
    InvalidTokenHmac,
    InvalidTokenFormat,
    InvalidTokenKeyNoValue,
    NotEnoughSpace,
}

/// 沒有額外欄位的 payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoPayload {}

/// Completion payload: completionCode、errorDescription 加上 command 自己的欄位。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion<T> {
    pub completion_code: CompletionCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> Completion<T> {
    pub fn success(payload: T) -> Self {
        Self {
            completion_code: CompletionCode::Success,
            error_description: None,
            payload,
        }
    }

    pub fn with_code(completion_code: CompletionCode, error_description: Option<String>, payload: T) -> Self {
        Self {
            completion_code,
            error_description,
            payload,
        }
    }
}

impl<T: Default> Completion<T> {
    pub fn failed(completion_code: CompletionCode, error_description: impl Into<String>) -> Self {
        Self::with_code(completion_code, Some(error_description.into()), T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        #[serde(skip_serializing_if = "Option::is_none")]
        result: Option<String>,
    }

    #[test]
    fn test_flattened_payload() {
        let completion = Completion::success(Sample {
            result: Some("unit1".to_string()),
        });
        assert_eq!(
            serde_json::to_value(&completion).unwrap(),
            json!({"completionCode": "success", "result": "unit1"})
        );
    }

    #[test]
    fn test_failed_completion_has_description_only() {
        let completion: Completion<NoPayload> =
            Completion::failed(CompletionCode::InvalidRequestId, "bad id");
        assert_eq!(
            serde_json::to_value(&completion).unwrap(),
            json!({"completionCode": "invalidRequestID", "errorDescription": "bad id"})
        );
    }
}
