use clap::Parser;
use secret_santa::core::Notifier;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{
    CliConfig, ConsoleNotifier, ExchangeEngine, ExchangePipeline, LocalFileSource, SmtpNotifier,
};

async fn run_exchange<N: Notifier>(config: CliConfig, notifier: N) -> secret_santa::Result<String> {
    let source = LocalFileSource::new(config.participants_path.clone());
    let pipeline = ExchangePipeline::new(source, notifier, config);
    let engine = ExchangeEngine::new(pipeline);
    engine.run().await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting secret-santa CLI");

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let result = if config.debug {
        tracing::info!("🔍 Debug mode: pairs will be printed, not emailed");
        run_exchange(config.clone(), ConsoleNotifier).await
    } else {
        match SmtpNotifier::from_config(&config) {
            Ok(notifier) => run_exchange(config.clone(), notifier).await,
            Err(e) => Err(e),
        }
    };

    match result {
        Ok(summary) => {
            tracing::info!("✅ Secret santa draw completed: {}", summary);
            println!("\nHappy Holidays!");
        }
        Err(e) => {
            tracing::error!("❌ Secret santa draw failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
