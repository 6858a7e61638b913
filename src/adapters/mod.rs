// Adapters layer: concrete implementations of the domain ports (page fetching, notification channels).

pub mod email;
pub mod http;
pub mod log;
pub mod sms;

pub use email::SesEmailNotifier;
pub use http::HttpPageFetcher;
pub use log::LogNotifier;
pub use sms::SnsSmsNotifier;

use crate::config::RunConfig;
use crate::core::{Channel, Notifier};
use aws_config::{BehaviorVersion, SdkConfig};

pub fn enabled_channels(config: &RunConfig) -> Vec<Channel> {
    let mut channels = Vec::new();
    if config.email {
        channels.push(Channel::Email);
    }
    if config.sms {
        channels.push(Channel::Sms);
    }
    channels
}

/// Loads the ambient AWS configuration only when a channel needs it.
pub async fn aws_notifiers(config: &RunConfig) -> Vec<Box<dyn Notifier>> {
    if !config.has_channels() {
        return Vec::new();
    }

    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    notifiers_from_sdk_config(config, &sdk_config)
}

pub fn notifiers_from_sdk_config(config: &RunConfig, sdk_config: &SdkConfig) -> Vec<Box<dyn Notifier>> {
    enabled_channels(config)
        .into_iter()
        .map(|channel| -> Box<dyn Notifier> {
            match channel {
                Channel::Email => Box::new(SesEmailNotifier::new(
                    aws_sdk_sesv2::Client::new(sdk_config),
                    config.send_email_from.clone(),
                    config.send_email_to.clone(),
                )),
                Channel::Sms => Box::new(SnsSmsNotifier::new(
                    aws_sdk_sns::Client::new(sdk_config),
                    config.send_sms_to.clone(),
                )),
            }
        })
        .collect()
}

pub fn dry_run_notifiers(config: &RunConfig) -> Vec<Box<dyn Notifier>> {
    enabled_channels(config)
        .into_iter()
        .map(|channel| -> Box<dyn Notifier> {
            let destination = match channel {
                Channel::Email => config.send_email_to.clone(),
                Channel::Sms => config.send_sms_to.clone(),
            };
            Box::new(LogNotifier::new(channel, destination))
        })
        .collect()
}
