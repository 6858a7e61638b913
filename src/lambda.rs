#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use restock_watch::adapters::aws_notifiers;
#[cfg(feature = "lambda")]
use restock_watch::domain::model::ChannelReport;
#[cfg(feature = "lambda")]
use restock_watch::utils::logger::{self, LogFormat};
#[cfg(feature = "lambda")]
use restock_watch::{AvailabilityChecker, HttpPageFetcher, RunConfig};
#[cfg(feature = "lambda")]
use serde::Serialize;

#[cfg(feature = "lambda")]
#[derive(Serialize)]
pub struct Response {
    pub message: String,
    pub product: String,
    pub available: bool,
    pub channels: Vec<ChannelReport>,
}

/// Scheduled events carry nothing the check needs, so the payload is ignored.
#[cfg(feature = "lambda")]
async fn function_handler(_event: LambdaEvent<serde_json::Value>) -> Result<Response, Error> {
    tracing::info!("Starting availability check");

    let config = RunConfig::from_env().map_err(|e| {
        tracing::error!("Configuration validation failed: {}", e);
        Box::new(e) as Box<dyn std::error::Error + Send + Sync>
    })?;

    let notifiers = aws_notifiers(&config).await;
    let checker = AvailabilityChecker::new(config, HttpPageFetcher::new()).with_notifiers(notifiers);

    let outcome = checker.run().await.map_err(|e| {
        tracing::error!(
            "Check failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        Box::new(e) as Box<dyn std::error::Error + Send + Sync>
    })?;

    let available = outcome.is_available();
    let response = Response {
        message: if available {
            format!("{} is available", outcome.product)
        } else {
            format!("{} is unavailable", outcome.product)
        },
        product: outcome.product,
        available,
        channels: outcome.channels,
    };

    tracing::info!("Availability check completed successfully");
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_logger(LogFormat::for_lambda(), false);

    run(service_fn(function_handler)).await
}
