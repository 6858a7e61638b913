use crate::domain::model::{Channel, Notification};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of the raw product page.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// One notification channel. Implementations report failures as errors and
/// leave the decision about the run to the caller.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn channel(&self) -> Channel;
    async fn send(&self, notification: &Notification) -> Result<()>;
}
