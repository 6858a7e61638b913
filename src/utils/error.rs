use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Missing configuration: {field} is not set")]
    MissingConfigError { field: String },

    #[error("Invalid configuration for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Page fetch status: {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Unable to build the document from body: {message}")]
    ParseError { message: String },

    #[error("Unable to send the {channel}: {message}")]
    NotificationError { channel: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Fetch,
    Parse,
    Notification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CheckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckError::MissingConfigError { .. } | CheckError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            CheckError::HttpError(_) | CheckError::UnexpectedStatus { .. } => ErrorCategory::Fetch,
            CheckError::ParseError { .. } => ErrorCategory::Parse,
            CheckError::NotificationError { .. } => ErrorCategory::Notification,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Critical,
            ErrorCategory::Parse => ErrorSeverity::High,
            ErrorCategory::Fetch | ErrorCategory::Notification => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::MissingConfigError { field } => {
                format!("Required setting {} is not set", field)
            }
            CheckError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting {} is invalid: {}", field, reason)
            }
            CheckError::HttpError(_) => "Unable to fetch the product page".to_string(),
            CheckError::UnexpectedStatus { status, .. } => {
                format!("The product page answered with status {}", status)
            }
            CheckError::ParseError { .. } => "The product page could not be read as HTML".to_string(),
            CheckError::NotificationError { channel, .. } => {
                format!("The {} notification could not be sent", channel)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check PAGE, PRODUCT, SOLD_OUT_STRING, EMAIL, SMS and the destination variables"
            }
            ErrorCategory::Fetch => "The page may be temporarily down; the next scheduled run will try again",
            ErrorCategory::Parse => "Make sure PAGE points to an HTML product page",
            ErrorCategory::Notification => {
                "Check the SES sender identity, SNS permissions and the destination addresses"
            }
        }
    }

    /// Process exit code for the CLI host.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
