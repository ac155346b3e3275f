use crate::messages::CompletionCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("WebSocket error: {0}")]
    WebSocketError(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid message: {message}")]
    InvalidMessage { message: String },

    #[error("{message}")]
    InvalidData { message: String },

    #[error("{message}")]
    UnsupportedData { message: String },

    #[error("{message}")]
    UnsupportedCommand { message: String },

    #[error("{message}")]
    InvalidCommand { message: String },

    #[error("{message}")]
    SequenceError { message: String },

    #[error("{message}")]
    AuthorisationRequired { message: String },

    #[error("Hardware error: {message}")]
    HardwareError { message: String },

    #[error("User error: {message}")]
    UserError { message: String },

    #[error("Fraud attempt: {message}")]
    FraudAttempt { message: String },

    #[error("Device not ready: {message}")]
    DeviceNotReady { message: String },

    #[error("Not enough space: {message}")]
    NotEnoughSpace { message: String },

    #[error("Command timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    #[error("Command canceled: {message}")]
    Canceled { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },

    #[error("Connection closed")]
    ConnectionClosed,
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Protocol,
    Command,
    Device,
    Transport,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ServiceError {
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    pub fn unsupported_command(message: impl Into<String>) -> Self {
        Self::UnsupportedCommand {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// 將錯誤統一映射為 completion code，取代每個 handler 各自的 switch
    pub fn completion_code(&self) -> CompletionCode {
        match self {
            Self::InvalidData { .. } | Self::InvalidMessage { .. } => CompletionCode::InvalidData,
            Self::UnsupportedData { .. } => CompletionCode::UnsupportedData,
            Self::UnsupportedCommand { .. } => CompletionCode::UnsupportedCommand,
            Self::InvalidCommand { .. } => CompletionCode::InvalidCommand,
            Self::SequenceError { .. } => CompletionCode::SequenceError,
            Self::AuthorisationRequired { .. } => CompletionCode::AuthorisationRequired,
            Self::HardwareError { .. } => CompletionCode::HardwareError,
            Self::UserError { .. } => CompletionCode::UserError,
            Self::FraudAttempt { .. } => CompletionCode::FraudAttempt,
            Self::DeviceNotReady { .. } => CompletionCode::DeviceNotReady,
            Self::NotEnoughSpace { .. } => CompletionCode::NotEnoughSpace,
            Self::Timeout { .. } => CompletionCode::TimeOut,
            Self::Canceled { .. } => CompletionCode::Canceled,
            _ => CompletionCode::InternalError,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::InvalidMessage { .. } | Self::SerializationError(_) => ErrorCategory::Protocol,
            Self::InvalidData { .. }
            | Self::UnsupportedData { .. }
            | Self::UnsupportedCommand { .. }
            | Self::InvalidCommand { .. }
            | Self::SequenceError { .. }
            | Self::AuthorisationRequired { .. }
            | Self::Timeout { .. }
            | Self::Canceled { .. } => ErrorCategory::Command,
            Self::HardwareError { .. }
            | Self::UserError { .. }
            | Self::FraudAttempt { .. }
            | Self::DeviceNotReady { .. }
            | Self::NotEnoughSpace { .. } => ErrorCategory::Device,
            Self::IoError(_) | Self::WebSocketError(_) | Self::ConnectionClosed => {
                ErrorCategory::Transport
            }
            Self::InternalError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Command | ErrorCategory::Protocol => ErrorSeverity::Low,
            ErrorCategory::Transport => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Device => ErrorSeverity::High,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("設定檔有誤: {}", self),
            ErrorCategory::Protocol => format!("收到無法解析的訊息: {}", self),
            ErrorCategory::Command => format!("指令執行失敗: {}", self),
            ErrorCategory::Device => format!("裝置回報錯誤: {}", self),
            ErrorCategory::Transport => format!("連線發生問題: {}", self),
            ErrorCategory::Internal => format!("服務內部錯誤: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingConfigError { .. } => "Add the missing field to the [service] or [device] section",
            Self::InvalidConfigValueError { .. } | Self::ConfigError { .. } => {
                "Check the configuration file against config/service.example.toml"
            }
            Self::IoError(_) => "Check that the port is free and the configuration path exists",
            Self::WebSocketError(_) | Self::ConnectionClosed => "Reconnect the client and resend the command",
            Self::Timeout { .. } => "Increase the command timeout or check the device",
            Self::HardwareError { .. } | Self::DeviceNotReady { .. } => {
                "Check the device hardware and reset it if required"
            }
            Self::NotEnoughSpace { .. } => "Empty the device storage before retrying",
            Self::FraudAttempt { .. } => "Inspect the terminal before putting it back into service",
            _ => "See the service log for details",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_code_mapping() {
        assert_eq!(
            ServiceError::invalid_data("bad").completion_code(),
            CompletionCode::InvalidData
        );
        assert_eq!(
            ServiceError::unsupported_command("nope").completion_code(),
            CompletionCode::UnsupportedCommand
        );
        assert_eq!(
            ServiceError::Timeout { timeout_ms: 10 }.completion_code(),
            CompletionCode::TimeOut
        );
        assert_eq!(
            ServiceError::InvalidCommand {
                message: "not now".to_string()
            }
            .completion_code(),
            CompletionCode::InvalidCommand
        );
        assert_eq!(
            ServiceError::NotEnoughSpace {
                message: "image store full".to_string()
            }
            .completion_code(),
            CompletionCode::NotEnoughSpace
        );
        assert_eq!(
            ServiceError::ConnectionClosed.completion_code(),
            CompletionCode::InternalError
        );
    }

    #[test]
    fn test_description_is_the_message() {
        let err = ServiceError::invalid_data("Unsupported position");
        assert_eq!(err.to_string(), "Unsupported position");
    }

    #[test]
    fn test_severity_by_category() {
        let config = ServiceError::MissingConfigError {
            field: "service.port".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.severity(), ErrorSeverity::High);
        assert_eq!(ServiceError::internal("x").severity(), ErrorSeverity::Critical);
    }
}
