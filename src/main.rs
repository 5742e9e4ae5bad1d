use allowlist_migrate::utils::{logger, validation::Validate};
use allowlist_migrate::{CliConfig, Console, EtlEngine, LocalStorage, MigrationPipeline};
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        return Err(e).context("invalid command line");
    }

    let storage = LocalStorage::new(config.dir.clone());
    let console = Console::new(BufReader::new(io::stdin()), io::stdout());
    let pipeline = MigrationPipeline::new(storage, config, console);
    let mut engine = EtlEngine::new(pipeline);

    if let Err(e) = engine.run().await {
        tracing::error!(
            "Migration failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
        return Err(e).context("allowlist migration failed");
    }

    Ok(())
}
