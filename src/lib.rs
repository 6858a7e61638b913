pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{HttpPageFetcher, LogNotifier, SesEmailNotifier, SnsSmsNotifier};
pub use config::RunConfig;
pub use core::checker::AvailabilityChecker;
pub use domain::model::{Availability, Channel, ChannelStatus, Notification, RunOutcome};
pub use utils::error::{CheckError, Result};
