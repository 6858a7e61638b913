use crate::config::RunConfig;
use crate::core::detect::{scan, DetectionRules};
use crate::core::html::PageDocument;
use crate::core::{
    Channel, ChannelReport, ChannelStatus, Notification, Notifier, PageSource, RunOutcome,
};
use crate::utils::error::{CheckError, Result};
use chrono::Utc;

/// Runs one fetch, check and notify cycle.
///
/// Every enabled channel is attempted even when an earlier one fails; the
/// outcome of each is logged and the run is reported as failed afterwards.
pub struct AvailabilityChecker<P: PageSource> {
    config: RunConfig,
    source: P,
    notifiers: Vec<Box<dyn Notifier>>,
}

impl<P: PageSource> AvailabilityChecker<P> {
    pub fn new(config: RunConfig, source: P) -> Self {
        Self {
            config,
            source,
            notifiers: Vec::new(),
        }
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifiers.push(notifier);
        self
    }

    pub fn with_notifiers(mut self, notifiers: Vec<Box<dyn Notifier>>) -> Self {
        self.notifiers.extend(notifiers);
        self
    }

    /// Returns the outcome when every step succeeded, otherwise the first
    /// fetch/parse error or a notification error naming the failed channels.
    pub async fn run(&self) -> Result<RunOutcome> {
        let outcome = self.check().await?;

        let failures: Vec<String> = outcome
            .failures()
            .map(|(channel, reason)| format!("{}: {}", channel, reason))
            .collect();

        if !failures.is_empty() {
            let channels: Vec<String> = outcome.failures().map(|(c, _)| c.to_string()).collect();
            return Err(CheckError::NotificationError {
                channel: channels.join(" and "),
                message: failures.join("; "),
            });
        }

        Ok(outcome)
    }

    /// Like [`run`](Self::run) but hands back the per-channel outcome even when a
    /// notifier failed. Fetch and parse failures are still errors.
    pub async fn check(&self) -> Result<RunOutcome> {
        tracing::info!("Checking {} at {}", self.config.product, self.config.page);

        let body = self.source.fetch(&self.config.page).await.map_err(|e| {
            tracing::error!("Unable to fetch page: {}", e);
            e
        })?;

        let document = PageDocument::parse(&body);
        let availability =
            scan(&document, &DetectionRules::from_config(&self.config)).map_err(|e| {
                tracing::error!("Unable to scan the document: {}", e);
                e
            })?;

        let channels = if availability.is_available() {
            tracing::info!("{} appears to be available", self.config.product);
            self.dispatch().await
        } else {
            tracing::info!(
                "{} is unavailable ({} sold out label(s), {} control(s))",
                self.config.product,
                availability.sold_out_count,
                availability.control_count
            );
            self.notifiers
                .iter()
                .map(|notifier| ChannelReport {
                    channel: notifier.channel(),
                    status: ChannelStatus::Skipped,
                })
                .collect()
        };

        let outcome = RunOutcome {
            product: self.config.product.clone(),
            availability,
            channels,
        };

        tracing::info!(
            "Checked {}. Email [Enabled: {}]: {} SMS [Enabled: {}]: {}",
            outcome.product,
            self.config.email,
            outcome.sent(Channel::Email),
            self.config.sms,
            outcome.sent(Channel::Sms)
        );

        Ok(outcome)
    }

    async fn dispatch(&self) -> Vec<ChannelReport> {
        if self.notifiers.is_empty() {
            tracing::warn!("No notification channel is enabled");
        }

        let notification = Notification::availability(&self.config, Utc::now());
        let mut reports = Vec::with_capacity(self.notifiers.len());

        for notifier in &self.notifiers {
            let channel = notifier.channel();
            let status = match notifier.send(&notification).await {
                Ok(()) => {
                    tracing::info!("Sent {} notification", channel);
                    ChannelStatus::Sent
                }
                Err(e) => {
                    tracing::error!("Error whilst sending {}: {}", channel, e);
                    ChannelStatus::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            reports.push(ChannelReport { channel, status });
        }

        reports
    }
}
