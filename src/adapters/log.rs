use crate::core::{Channel, Notification, Notifier};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Stands in for a real channel on dry runs.
#[derive(Debug, Clone)]
pub struct LogNotifier {
    channel: Channel,
    destination: String,
}

impl LogNotifier {
    pub fn new(channel: Channel, destination: String) -> Self {
        Self {
            channel,
            destination,
        }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    fn channel(&self) -> Channel {
        self.channel
    }

    async fn send(&self, notification: &Notification) -> Result<()> {
        tracing::info!(
            "[dry run] {} to {}: {} | {}",
            self.channel,
            self.destination,
            notification.subject,
            notification.body
        );
        Ok(())
    }
}
