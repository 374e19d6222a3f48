use clap::Parser;
use courses_updater::utils::{logger, validation::Validate};
use courses_updater::{CliConfig, LocalStorage};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting update-courses");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let result = match config.validate() {
        Ok(()) => courses_updater::rewrite(LocalStorage::new("."), config).await,
        Err(e) => Err(e),
    };

    // 成功或失敗都正常結束，不另設退出碼
    match result {
        Ok(report) => {
            tracing::info!(
                "✅ Replaced {} span(s) in {}",
                report.total_matches(),
                report.path
            );
            println!("Successfully updated {}", report.file_name());
        }
        Err(e) => {
            tracing::error!("❌ Rewrite failed: {} (Category: {:?})", e, e.category());
            println!("Error: {}", e);
        }
    }
}
