use clap::Parser;
use restock_watch::adapters::{aws_notifiers, dry_run_notifiers};
use restock_watch::utils::logger::{self, LogFormat};
use restock_watch::{AvailabilityChecker, CliArgs, HttpPageFetcher, RunConfig};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    logger::init_logger(LogFormat::for_cli(args.json_logs), args.verbose);
    tracing::info!("Starting restock-watch");

    // Nothing touches the network before the configuration is known to be good.
    let config = match RunConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };
    tracing::debug!("Run config: {:?}", config);

    let notifiers = if args.dry_run {
        tracing::info!("Dry run: notifications will only be logged");
        dry_run_notifiers(&config)
    } else {
        aws_notifiers(&config).await
    };

    let checker = AvailabilityChecker::new(config, HttpPageFetcher::new()).with_notifiers(notifiers);

    match checker.run().await {
        Ok(outcome) => {
            let verdict = if outcome.is_available() {
                "available"
            } else {
                "unavailable"
            };
            println!("✅ {} is {}", outcome.product, verdict);
        }
        Err(e) => {
            tracing::error!(
                "❌ Check failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
