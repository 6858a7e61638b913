use crate::core::{Channel, Notification, Notifier};
use crate::utils::error::{CheckError, Result};
use async_trait::async_trait;
use aws_sdk_sns::error::DisplayErrorContext;
use aws_sdk_sns::Client as SnsClient;

/// Publishes the notification body straight to a phone number.
#[derive(Debug, Clone)]
pub struct SnsSmsNotifier {
    client: SnsClient,
    phone_number: String,
}

impl SnsSmsNotifier {
    pub fn new(client: SnsClient, phone_number: String) -> Self {
        Self {
            client,
            phone_number,
        }
    }
}

#[async_trait]
impl Notifier for SnsSmsNotifier {
    fn channel(&self) -> Channel {
        Channel::Sms
    }

    async fn send(&self, notification: &Notification) -> Result<()> {
        tracing::debug!("Publishing SMS to {}", self.phone_number);
        let output = self
            .client
            .publish()
            .message(&notification.body)
            .phone_number(&self.phone_number)
            .send()
            .await
            .map_err(|e| CheckError::NotificationError {
                channel: Channel::Sms.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        tracing::info!(
            "Return from sms send: message id {}",
            output.message_id().unwrap_or("<none>")
        );
        Ok(())
    }
}
