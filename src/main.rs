use anyhow::Context;
use clap::Parser;
use std::io::Write;
use scoped_kit::utils::error::ErrorSeverity;
use scoped_kit::utils::{logger, validation::Validate};
use scoped_kit::{CliConfig, ScenarioEngine};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting scoped-kit CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let engine = ScenarioEngine::new(config);

    match engine.run_and_render() {
        Ok(output) => {
            writeln!(std::io::stdout().lock(), "{}", output)
                .context("failed to write report to stdout")?;
            tracing::info!("✅ Scenario completed");
        }
        Err(e) => {
            tracing::error!(
                "❌ Scenario failed: {} (Category: {:?}, Severity: {:?})",
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

    Ok(())
}
