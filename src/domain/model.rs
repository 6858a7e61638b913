use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Sms,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Email => write!(f, "email"),
            Channel::Sms => write!(f, "sms"),
        }
    }
}

/// Counts gathered from the page. The product counts as available only when no
/// label reads as sold out and at least one control is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub sold_out_count: usize,
    pub control_count: usize,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        self.sold_out_count == 0 && self.control_count > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub subject: String,
    pub body: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ChannelStatus {
    Sent,
    /// Enabled, but the product was not available.
    Skipped,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelReport {
    pub channel: Channel,
    #[serde(flatten)]
    pub status: ChannelStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub product: String,
    pub availability: Availability,
    pub channels: Vec<ChannelReport>,
}

impl RunOutcome {
    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }

    pub fn status_of(&self, channel: Channel) -> Option<&ChannelStatus> {
        self.channels
            .iter()
            .find(|report| report.channel == channel)
            .map(|report| &report.status)
    }

    pub fn sent(&self, channel: Channel) -> bool {
        matches!(self.status_of(channel), Some(ChannelStatus::Sent))
    }

    pub fn failures(&self) -> impl Iterator<Item = (Channel, &str)> {
        self.channels.iter().filter_map(|report| match &report.status {
            ChannelStatus::Failed { reason } => Some((report.channel, reason.as_str())),
            _ => None,
        })
    }
}
