use crate::config::toml_config::ServiceConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = r#"
[service]
name = "simulator"
"#;

#[derive(Debug, Clone, Parser)]
#[command(name = "xfs4iot-sp")]
#[command(about = "XFS4IoT service provider backed by a simulated device")]
pub struct CliConfig {
    #[arg(long, short, help = "Path to the service TOML file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Override [service].port")]
    pub port: Option<u16>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Load and validate the configuration, then exit")]
    pub dry_run: bool,
}

impl CliConfig {
    /// 讀設定檔 (沒有指定時用內建的 simulator 設定)，再套用命令列覆寫
    pub fn load(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_file(path)?,
            None => ServiceConfig::from_toml_str(DEFAULT_CONFIG)?,
        };
        if let Some(port) = self.port {
            config.service.port = port;
        }
        if self.verbose {
            config.logging.level = "debug".to_string();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;

    #[test]
    fn test_defaults_without_config_file() {
        let cli = CliConfig::parse_from(["xfs4iot-sp", "--port", "6100"]);
        let config = cli.load().unwrap();
        assert_eq!(config.service.name, "simulator");
        assert_eq!(config.service_uri(), "ws://127.0.0.1:6100/xfs4iot/v1.0/simulator");
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let cli = CliConfig::parse_from(["xfs4iot-sp", "--config", "/nonexistent/service.toml"]);
        assert!(cli.load().is_err());
    }
}
