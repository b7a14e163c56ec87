use clap::Parser;
use pjv_exercises::app::commands;
use pjv_exercises::config::LogFormat;
use pjv_exercises::utils::logger;
use pjv_exercises::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(),
    }

    tracing::info!("Starting pjv");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    if let Err(e) = commands::run(&config, stdin.lock(), &mut stdout) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
