#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{
    parse_bool, validate_non_empty_string, validate_required_when, validate_tag_name, validate_url,
    Validate,
};
use std::env;

pub const PAGE: &str = "PAGE";
pub const PRODUCT: &str = "PRODUCT";
pub const SOLD_OUT_STRING: &str = "SOLD_OUT_STRING";
pub const ADD_TO_CARD_STRING: &str = "ADD_TO_CARD_STRING";
pub const EMAIL: &str = "EMAIL";
pub const SMS: &str = "SMS";
pub const SEND_EMAIL_TO: &str = "SEND_EMAIL_TO";
pub const SEND_SMS_TO: &str = "SEND_SMS_TO";
pub const SEND_EMAIL_FROM: &str = "SEND_EMAIL_FROM";
pub const LABEL_TAG: &str = "LABEL_TAG";
pub const CONTROL_TAG: &str = "CONTROL_TAG";

pub const DEFAULT_EMAIL_FROM: &str = "sender@example.com";
pub const DEFAULT_LABEL_TAG: &str = "span";
pub const DEFAULT_CONTROL_TAG: &str = "button";

/// Settings for a single check, read once per invocation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub page: String,
    pub product: String,
    pub sold_out_string: String,
    /// Required, but availability never looks at it.
    pub add_to_cart_string: String,
    pub email: bool,
    pub sms: bool,
    pub send_email_to: String,
    pub send_sms_to: String,
    pub send_email_from: String,
    pub label_tag: String,
    pub control_tag: String,
}

impl RunConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds and validates the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();
        let get_or = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let config = Self {
            page: get(PAGE),
            product: get(PRODUCT),
            sold_out_string: get(SOLD_OUT_STRING),
            add_to_cart_string: get(ADD_TO_CARD_STRING),
            email: parse_bool(EMAIL, &get(EMAIL))?,
            sms: parse_bool(SMS, &get(SMS))?,
            send_email_to: get(SEND_EMAIL_TO),
            send_sms_to: get(SEND_SMS_TO),
            send_email_from: get_or(SEND_EMAIL_FROM, DEFAULT_EMAIL_FROM),
            label_tag: get_or(LABEL_TAG, DEFAULT_LABEL_TAG),
            control_tag: get_or(CONTROL_TAG, DEFAULT_CONTROL_TAG),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn email_subject(&self) -> String {
        format!("{} is available again!", self.product)
    }

    pub fn has_channels(&self) -> bool {
        self.email || self.sms
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_url(PAGE, &self.page)?;
        validate_non_empty_string(PRODUCT, &self.product)?;
        validate_non_empty_string(SOLD_OUT_STRING, &self.sold_out_string)?;
        validate_non_empty_string(ADD_TO_CARD_STRING, &self.add_to_cart_string)?;
        validate_required_when(SEND_EMAIL_TO, &self.send_email_to, EMAIL, self.email)?;
        validate_required_when(SEND_SMS_TO, &self.send_sms_to, SMS, self.sms)?;
        validate_tag_name(LABEL_TAG, &self.label_tag)?;
        validate_tag_name(CONTROL_TAG, &self.control_tag)?;

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}
