use clap::Parser;
use fit_stats::utils::{logger, validation::Validate};
use fit_stats::{CliConfig, LocalStorage, SummaryPipeline, TrackerEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting fit-stats");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    let storage = LocalStorage::new(
        config
            .output_path
            .clone()
            .unwrap_or_else(|| "./output".to_string()),
    );
    let pipeline = SummaryPipeline::new(storage, config);
    let engine = TrackerEngine::new(pipeline);

    match engine.run().await {
        Ok(destination) => {
            tracing::info!("Workout summary completed: {}", destination);
        }
        Err(e) => {
            tracing::error!(
                "Summary run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                fit_stats::utils::error::ErrorSeverity::Low => 0,
                fit_stats::utils::error::ErrorSeverity::Medium => 2,
                fit_stats::utils::error::ErrorSeverity::High => 1,
                fit_stats::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
