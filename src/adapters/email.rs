use crate::core::{Channel, Notification, Notifier};
use crate::utils::error::{CheckError, Result};
use async_trait::async_trait;
use aws_sdk_sesv2::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use aws_sdk_sesv2::Client as SesClient;
use std::fmt;

/// Known SES rejection reasons, kept apart only so the logs say which one it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailRejection {
    MessageRejected,
    MailFromDomainNotVerified,
    ConfigurationSetMissing,
    ConfigurationSetSendingPaused,
    AccountSendingPaused,
    Other,
}

impl EmailRejection {
    /// Maps SES error codes (v1 and v2 spellings) onto a rejection kind.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("MessageRejected") => EmailRejection::MessageRejected,
            Some("MailFromDomainNotVerifiedException") | Some("MailFromDomainNotVerified") => {
                EmailRejection::MailFromDomainNotVerified
            }
            Some("ConfigurationSetDoesNotExistException")
            | Some("ConfigurationSetDoesNotExist")
            | Some("NotFoundException") => EmailRejection::ConfigurationSetMissing,
            Some("ConfigurationSetSendingPausedException")
            | Some("ConfigurationSetSendingPaused")
            | Some("SendingPausedException") => EmailRejection::ConfigurationSetSendingPaused,
            Some("AccountSendingPausedException")
            | Some("AccountSendingPaused")
            | Some("AccountSuspendedException") => EmailRejection::AccountSendingPaused,
            _ => EmailRejection::Other,
        }
    }
}

impl fmt::Display for EmailRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EmailRejection::MessageRejected => "message rejected",
            EmailRejection::MailFromDomainNotVerified => "sender domain not verified",
            EmailRejection::ConfigurationSetMissing => "configuration set does not exist",
            EmailRejection::ConfigurationSetSendingPaused => "configuration set sending paused",
            EmailRejection::AccountSendingPaused => "account sending paused",
            EmailRejection::Other => "email provider error",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone)]
pub struct SesEmailNotifier {
    client: SesClient,
    from: String,
    to: String,
}

impl SesEmailNotifier {
    pub fn new(client: SesClient, from: String, to: String) -> Self {
        Self { client, from, to }
    }
}

/// Plain-text UTF-8 email carrying the notification's subject and body.
pub fn email_content(notification: &Notification) -> Result<EmailContent> {
    let subject = utf8_content(&notification.subject)?;
    let text = utf8_content(&notification.body)?;

    let message = Message::builder()
        .subject(subject)
        .body(Body::builder().text(text).build())
        .build();

    Ok(EmailContent::builder().simple(message).build())
}

fn utf8_content(data: &str) -> Result<Content> {
    Content::builder()
        .charset("UTF-8")
        .data(data)
        .build()
        .map_err(|e| CheckError::NotificationError {
            channel: Channel::Email.to_string(),
            message: format!("Unable to build email content: {}", e),
        })
}

#[async_trait]
impl Notifier for SesEmailNotifier {
    fn channel(&self) -> Channel {
        Channel::Email
    }

    async fn send(&self, notification: &Notification) -> Result<()> {
        let content = email_content(notification)?;

        tracing::debug!("Sending email from {} to {}", self.from, self.to);
        let result = self
            .client
            .send_email()
            .from_email_address(&self.from)
            .destination(Destination::builder().to_addresses(&self.to).build())
            .content(content)
            .send()
            .await;

        match result {
            Ok(output) => {
                tracing::info!(
                    "Return from email send: message id {}",
                    output.message_id().unwrap_or("<none>")
                );
                Ok(())
            }
            Err(err) => {
                let details = DisplayErrorContext(&err).to_string();
                let service_error = err.into_service_error();
                let rejection = EmailRejection::from_code(service_error.code());
                tracing::error!(
                    "Error: {} ({})\nDetails: {}",
                    rejection,
                    service_error.code().unwrap_or("unknown"),
                    service_error.message().unwrap_or(&details)
                );
                Err(CheckError::NotificationError {
                    channel: Channel::Email.to_string(),
                    message: format!("{}: {}", rejection, details),
                })
            }
        }
    }
}
