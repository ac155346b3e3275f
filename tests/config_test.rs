use anyhow::Result;
use tempfile::TempDir;
use xfs4iot_framework::core::ConfigProvider;
use xfs4iot_framework::domain::status::cash::OutputPosition;
use xfs4iot_framework::messages::InterfaceName;
use xfs4iot_framework::utils::error::ServiceError;
use xfs4iot_framework::utils::validation::Validate;
use xfs4iot_framework::ServiceConfig;

/// 範例設定檔必須能載入並通過驗證
#[test]
fn test_example_config_is_valid() -> Result<()> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/service.example.toml");
    let config = ServiceConfig::from_file(path)?;
    config.validate()?;

    assert_eq!(config.service_uri(), "ws://127.0.0.1:5846/xfs4iot/v1.0/simulator");
    assert_eq!(config.vendor_name(), Some("Example Bank"));

    let options = config.simulator_options()?;
    assert!(options.interfaces.contains(&InterfaceName::Printer));
    assert!(options.output_positions.contains(&OutputPosition::Center));
    assert_eq!(options.cash_units.len(), 3);
    Ok(())
}

#[test]
fn test_config_written_to_temp_dir() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("service.toml");
    std::fs::write(
        &path,
        r#"
[service]
name = "printer"
host = "0.0.0.0"
port = 6000
base_path = "/xfs4iot/v2.0"
default_timeout_ms = 30000

[logging]
level = "debug"
json = true
"#,
    )?;

    let config = ServiceConfig::from_file(&path)?;
    config.validate()?;
    assert_eq!(config.bind_address(), "0.0.0.0:6000");
    assert_eq!(config.service_path(), "/xfs4iot/v2.0/printer");
    assert_eq!(config.default_timeout_ms(), 30_000);
    assert!(config.logging.json);
    Ok(())
}

#[test]
fn test_bad_base_path_fails_validation() -> Result<()> {
    let config = ServiceConfig::from_toml_str("[service]\nname = \"sim\"\nbase_path = \"xfs4iot/\"\n")?;
    assert!(matches!(
        config.validate(),
        Err(ServiceError::InvalidConfigValueError { .. })
    ));
    Ok(())
}

#[test]
fn test_missing_service_section_is_config_error() {
    let err = ServiceConfig::from_toml_str("[logging]\nlevel = \"info\"\n").unwrap_err();
    assert!(matches!(err, ServiceError::ConfigError { .. }));
}

#[test]
fn test_unknown_interface_name_is_rejected() {
    let result = ServiceConfig::from_toml_str(
        r#"
[service]
name = "sim"

[device]
interfaces = ["teleporter"]
"#,
    );
    assert!(result.is_err());
}
