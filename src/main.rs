use clap::Parser;
use std::sync::Arc;
use xfs4iot_framework::core::notifier::DeviceNotifier;
use xfs4iot_framework::core::ConfigProvider;
use xfs4iot_framework::utils::error::ErrorSeverity;
use xfs4iot_framework::utils::{logger, validation::Validate};
use xfs4iot_framework::{
    CliConfig, Server, ServiceConfig, ServiceError, ServiceProvider, SimulatedDevice,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let config = match cli.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger(&config.logging.level);
    } else {
        logger::init_cli_logger(cli.verbose || config.logging.level == "debug");
    }

    tracing::info!("🚀 Starting XFS4IoT service provider");
    if cli.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if cli.dry_run {
        display_config_summary(&config);
        return;
    }

    if let Err(e) = serve(config).await {
        tracing::error!(
            "❌ Service stopped: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn serve(config: ServiceConfig) -> Result<(), ServiceError> {
    let options = config.simulator_options()?;
    let (notifier, notifications) = DeviceNotifier::channel();
    let device = Arc::new(SimulatedDevice::new(options).with_notifier(notifier));

    let mut provider = ServiceProvider::new(device, notifications, &config)?;
    provider.spawn_notifications();

    let server = Server::bind(
        &config.bind_address(),
        &config.service_path(),
        provider.dispatcher(),
        provider.events(),
    )
    .await?;

    println!("✅ Listening on {}", config.service_uri());
    server
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("無法監聽 Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await?;

    tracing::info!("👋 Service provider stopped");
    Ok(())
}

fn display_config_summary(config: &ServiceConfig) {
    println!("🔍 DRY RUN - configuration is valid");
    println!("  Service URI:   {}", config.service_uri());
    println!("  Max in-flight: {}", config.max_in_flight());
    println!("  Timeout (ms):  {}", config.default_timeout_ms());
    match config.simulator_options() {
        Ok(options) => {
            println!("  Interfaces:    {:?}", options.interfaces);
            println!("  Retract bins:  {}", options.retract_bins);
            println!("  Cash units:    {}", options.cash_units.len());
        }
        Err(e) => println!("  Device:        {}", e),
    }
}
