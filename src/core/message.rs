use crate::config::RunConfig;
use crate::domain::model::Notification;
use chrono::{DateTime, Utc};

pub const BODY_FOOTER: &str = "Generated by automated AWS Lambda service.";

impl Notification {
    /// The "back in stock" message shared by every channel.
    pub fn availability(config: &RunConfig, generated_at: DateTime<Utc>) -> Self {
        Self {
            subject: config.email_subject(),
            body: format!(
                "{} is available for purchase on {}. This was generated on {}\n\n{}",
                config.product,
                config.page,
                generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                BODY_FOOTER
            ),
            generated_at,
        }
    }
}
