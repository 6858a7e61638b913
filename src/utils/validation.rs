use crate::utils::error::{CheckError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CheckError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CheckError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Empty is "not set"; surrounding whitespace is kept since sentinels match exactly.
pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CheckError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_when(field_name: &str, value: &str, enabled_by: &str, enabled: bool) -> Result<()> {
    if enabled && value.is_empty() {
        return Err(CheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("required when {} is true", enabled_by),
        });
    }
    Ok(())
}

pub fn validate_tag_name(field_name: &str, tag: &str) -> Result<()> {
    if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(CheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: tag.to_string(),
            reason: "must be a plain element name such as span or button".to_string(),
        });
    }
    Ok(())
}

/// Boolean toggles accept the same spellings as Go's `strconv.ParseBool`,
/// the format the deployed environment files were written against.
pub fn parse_bool(field_name: &str, value: &str) -> Result<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        "" => Err(CheckError::MissingConfigError {
            field: field_name.to_string(),
        }),
        other => Err(CheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: other.to_string(),
            reason: "expected a boolean such as true or false".to_string(),
        }),
    }
}
