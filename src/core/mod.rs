pub mod checker;
pub mod detect;
pub mod html;
pub mod message;

pub use crate::domain::model::{
    Availability, Channel, ChannelReport, ChannelStatus, Notification, RunOutcome,
};
pub use crate::domain::ports::{Notifier, PageSource};
pub use crate::utils::error::Result;
