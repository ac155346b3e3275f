use crate::adapters::simulator::SimulatorOptions;
use crate::core::handlers::cash_dispenser::output_position;
use crate::core::handlers::vendor_application::access_level;
use crate::core::ConfigProvider;
use crate::domain::model::{CashUnit, CashUnitKind};
use crate::messages::cash_dispenser::OutputPosition;
use crate::messages::vendor::AccessLevel;
use crate::messages::InterfaceName;
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_uri_path,
    validate_ws_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub service: ServiceSection,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub device: DeviceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSection {
    pub name: String,
    pub vendor_name: Option<String>,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,
    /// 0 代表沒有預設逾時
    #[serde(default)]
    pub default_timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// 模擬裝置的設定；省略的欄位沿用 `SimulatorOptions::default()`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub interfaces: Option<Vec<InterfaceName>>,
    pub retract_bins: Option<u32>,
    pub max_retract: Option<u32>,
    pub output_positions: Option<Vec<OutputPosition>>,
    pub access_levels: Option<Vec<AccessLevel>>,
    pub power_save_control: Option<bool>,
    pub dispense_delay_ms: Option<u32>,
    pub cash_units: Option<Vec<CashUnitConfig>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashUnitConfig {
    pub id: String,
    /// cashIn, cashOut, recycling, retract 或 reject
    pub kind: String,
    pub currency: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub count: u32,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5846
}

fn default_base_path() -> String {
    "/xfs4iot/v1.0".to_string()
}

fn default_max_in_flight() -> usize {
    16
}

fn default_log_level() -> String {
    "info".to_string()
}

impl CashUnitConfig {
    fn to_cash_unit(&self, index: usize) -> Result<CashUnit> {
        let kind = match self.kind.as_str() {
            "cashIn" => CashUnitKind::CashIn,
            "cashOut" => CashUnitKind::CashOut,
            "recycling" => CashUnitKind::Recycling,
            "retract" => CashUnitKind::Retract,
            "reject" => CashUnitKind::Reject,
            other => {
                return Err(ServiceError::InvalidConfigValueError {
                    field: format!("device.cash_units[{}].kind", index),
                    value: other.to_string(),
                    reason: "Valid kinds: cashIn, cashOut, recycling, retract, reject".to_string(),
                })
            }
        };
        Ok(CashUnit {
            id: self.id.clone(),
            kind,
            currency: self.currency.clone(),
            value: self.value,
            count: self.count,
        })
    }
}

impl ServiceConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ServiceError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${XFS_PORT})；未設定的保留原字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ServiceError::internal(e.to_string()))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 服務在 URI 裡的 path，例如 `/xfs4iot/v1.0/simulator`
    pub fn service_path(&self) -> String {
        format!("{}/{}", self.service.base_path, self.service.name)
    }

    pub fn simulator_options(&self) -> Result<SimulatorOptions> {
        let mut options = SimulatorOptions::default();
        let device = &self.device;

        if let Some(interfaces) = &device.interfaces {
            options.interfaces = interfaces.iter().copied().collect();
            // Common 一定要有
            options.interfaces.insert(InterfaceName::Common);
        }
        if let Some(bins) = device.retract_bins {
            options.retract_bins = bins;
        }
        if let Some(max) = device.max_retract {
            options.max_retract = max;
        }
        if let Some(positions) = &device.output_positions {
            options.output_positions = positions.iter().copied().map(output_position).collect();
        }
        if let Some(levels) = &device.access_levels {
            options.access_levels = levels.iter().copied().map(access_level).collect();
        }
        if let Some(enabled) = device.power_save_control {
            options.power_save_control = enabled;
        }
        if let Some(delay) = device.dispense_delay_ms {
            options.dispense_delay_ms = delay;
        }
        if let Some(units) = &device.cash_units {
            options.cash_units = units
                .iter()
                .enumerate()
                .map(|(i, unit)| unit.to_cash_unit(i))
                .collect::<Result<Vec<_>>>()?;
        }
        Ok(options)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("service.name", &self.service.name)?;
        validate_non_empty_string("service.host", &self.service.host)?;
        validate_range("service.port", self.service.port, 1, u16::MAX)?;
        validate_uri_path("service.base_path", &self.service.base_path)?;
        validate_positive_number("service.max_in_flight", self.service.max_in_flight, 1)?;
        validate_ws_url("service_uri", &self.service_uri())?;

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ServiceError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: other.to_string(),
                    reason: "Valid levels: trace, debug, info, warn, error".to_string(),
                })
            }
        }

        for (i, unit) in self.device.cash_units.iter().flatten().enumerate() {
            validate_non_empty_string(&format!("device.cash_units[{}].id", i), &unit.id)?;
            unit.to_cash_unit(i)?;
        }

        Ok(())
    }
}

impl ConfigProvider for ServiceConfig {
    fn service_name(&self) -> &str {
        &self.service.name
    }

    fn vendor_name(&self) -> Option<&str> {
        self.service.vendor_name.as_deref()
    }

    fn bind_address(&self) -> String {
        format!("{}:{}", self.service.host, self.service.port)
    }

    fn service_uri(&self) -> String {
        format!(
            "ws://{}:{}{}",
            self.service.host,
            self.service.port,
            self.service_path()
        )
    }

    fn max_in_flight(&self) -> usize {
        self.service.max_in_flight
    }

    fn default_timeout_ms(&self) -> u64 {
        self.service.default_timeout_ms
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status::cash::OutputPosition as Position;
    use crate::domain::status::vendor::AccessLevel as Level;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_minimal_config() {
        let config = ServiceConfig::from_toml_str(
            r#"
[service]
name = "printer"
"#,
        )
        .unwrap();

        assert_eq!(config.service.port, 5846);
        assert_eq!(config.service_uri(), "ws://127.0.0.1:5846/xfs4iot/v1.0/printer");
        assert_eq!(config.bind_address(), "127.0.0.1:5846");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_device_section_builds_simulator_options() {
        let config = ServiceConfig::from_toml_str(
            r#"
[service]
name = "sim"

[device]
interfaces = ["printer", "cashDispenser"]
retract_bins = 3
output_positions = ["outDefault", "outLeft"]
access_levels = ["basic"]

[[device.cash_units]]
id = "unit9"
kind = "recycling"
currency = "USD"
value = 10.0
count = 5
"#,
        )
        .unwrap();

        let options = config.simulator_options().unwrap();
        assert!(options.interfaces.contains(&InterfaceName::Common));
        assert!(options.interfaces.contains(&InterfaceName::Printer));
        assert!(!options.interfaces.contains(&InterfaceName::CardReader));
        assert_eq!(options.retract_bins, 3);
        assert!(options.output_positions.contains(&Position::Left));
        assert_eq!(options.access_levels.len(), 1);
        assert!(options.access_levels.contains(&Level::Basic));
        assert_eq!(options.cash_units.len(), 1);
        assert_eq!(options.cash_units[0].kind, CashUnitKind::Recycling);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("XFS_TEST_SERVICE_PORT", "6001");

        let config = ServiceConfig::from_toml_str(
            r#"
[service]
name = "sim"
port = ${XFS_TEST_SERVICE_PORT}
"#,
        )
        .unwrap();
        assert_eq!(config.service.port, 6001);

        std::env::remove_var("XFS_TEST_SERVICE_PORT");
    }

    #[test]
    fn test_config_validation() {
        let mut config = ServiceConfig::from_toml_str("[service]\nname = \"sim\"\n").unwrap();
        config.service.max_in_flight = 0;
        assert!(config.validate().is_err());

        let mut config = ServiceConfig::from_toml_str("[service]\nname = \"sim\"\n").unwrap();
        config.service.port = 0;
        assert!(config.validate().is_err());

        let mut config = ServiceConfig::from_toml_str("[service]\nname = \"sim\"\n").unwrap();
        config.service.host = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = ServiceConfig::from_toml_str("[service]\nname = \"sim\"\n").unwrap();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_cash_unit_kind_is_rejected() {
        let config = ServiceConfig::from_toml_str(
            r#"
[service]
name = "sim"

[[device.cash_units]]
id = "unit1"
kind = "coins"
currency = "EUR"
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ServiceError::InvalidConfigValueError { .. })
        ));
        assert!(config.simulator_options().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[service]\nname = \"file-test\"\nport = 7000\n")
            .unwrap();

        let config = ServiceConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.service.name, "file-test");
        assert_eq!(config.service.port, 7000);
    }
}
