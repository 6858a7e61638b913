use anyhow::Result;
use async_trait::async_trait;
use httpmock::prelude::*;
use restock_watch::core::Notifier;
use restock_watch::{
    AvailabilityChecker, Channel, ChannelStatus, CheckError, HttpPageFetcher, Notification,
    RunConfig,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
struct RecordingNotifier {
    channel: Channel,
    fail_with: Option<String>,
    sent: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    fn new(channel: Channel) -> Self {
        Self {
            channel,
            fail_with: None,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(channel: Channel, reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Self::new(channel)
        }
    }

    async fn sent(&self) -> Vec<Notification> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn channel(&self) -> Channel {
        self.channel
    }

    async fn send(&self, notification: &Notification) -> restock_watch::Result<()> {
        if let Some(reason) = &self.fail_with {
            return Err(CheckError::NotificationError {
                channel: self.channel.to_string(),
                message: reason.clone(),
            });
        }
        self.sent.lock().await.push(notification.clone());
        Ok(())
    }
}

fn config_for(page: String) -> RunConfig {
    let env = HashMap::from([
        ("PAGE", page),
        ("PRODUCT", "Widget".to_string()),
        ("SOLD_OUT_STRING", "Sold Out".to_string()),
        ("ADD_TO_CARD_STRING", "Add to cart".to_string()),
        ("EMAIL", "true".to_string()),
        ("SEND_EMAIL_TO", "me@example.com".to_string()),
        ("SMS", "true".to_string()),
        ("SEND_SMS_TO", "+15550100".to_string()),
    ]);
    RunConfig::from_lookup(|key| env.get(key).cloned()).unwrap()
}

fn product_page(content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head><title>Widget</title></head>
  <body>
    <h1>Widget</h1>
    <span class="price">$24.99</span>
    {}
  </body>
</html>"#,
        content
    )
}

fn checker_with(
    config: RunConfig,
    email: &RecordingNotifier,
    sms: &RecordingNotifier,
) -> AvailabilityChecker<HttpPageFetcher> {
    AvailabilityChecker::new(config, HttpPageFetcher::new())
        .with_notifier(Box::new(email.clone()))
        .with_notifier(Box::new(sms.clone()))
}

#[tokio::test]
async fn test_available_page_notifies_every_channel() -> Result<()> {
    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/products/widget");
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(product_page(r#"<button type="submit">Add to cart</button>"#));
    });

    let email = RecordingNotifier::new(Channel::Email);
    let sms = RecordingNotifier::new(Channel::Sms);
    let checker = checker_with(config_for(server.url("/products/widget")), &email, &sms);

    let outcome = checker.run().await?;

    page_mock.assert();
    assert!(outcome.is_available());
    assert!(outcome.sent(Channel::Email));
    assert!(outcome.sent(Channel::Sms));

    let emails = email.sent().await;
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].subject, "Widget is available again!");
    assert!(emails[0]
        .body
        .starts_with(&format!("Widget is available for purchase on {}.", server.url("/products/widget"))));

    let texts = sms.sent().await;
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0].body, emails[0].body);
    Ok(())
}

#[tokio::test]
async fn test_sold_out_page_sends_nothing() {
    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/products/widget");
        then.status(200).body(product_page(
            r#"<span>Sold Out</span>
               <button>Notify me</button>
               <button>Add to wishlist</button>
               <button>Share</button>"#,
        ));
    });

    let email = RecordingNotifier::new(Channel::Email);
    let sms = RecordingNotifier::new(Channel::Sms);
    let checker = checker_with(config_for(server.url("/products/widget")), &email, &sms);

    let outcome = checker.run().await.unwrap();

    page_mock.assert();
    assert!(!outcome.is_available());
    assert_eq!(outcome.availability.sold_out_count, 1);
    assert_eq!(outcome.availability.control_count, 3);
    assert_eq!(outcome.status_of(Channel::Email), Some(&ChannelStatus::Skipped));
    assert_eq!(outcome.status_of(Channel::Sms), Some(&ChannelStatus::Skipped));
    assert!(email.sent().await.is_empty());
    assert!(sms.sent().await.is_empty());
}

#[tokio::test]
async fn test_page_without_buttons_is_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products/widget");
        then.status(200)
            .body(product_page(r#"<span>In stock</span><a href="/cart/add">Add to cart</a>"#));
    });

    let email = RecordingNotifier::new(Channel::Email);
    let sms = RecordingNotifier::new(Channel::Sms);
    let checker = checker_with(config_for(server.url("/products/widget")), &email, &sms);

    let outcome = checker.run().await.unwrap();

    assert!(!outcome.is_available());
    assert_eq!(outcome.availability.sold_out_count, 0);
    assert_eq!(outcome.availability.control_count, 0);
    assert!(email.sent().await.is_empty());
    assert!(sms.sent().await.is_empty());
}

#[tokio::test]
async fn test_unavailable_page_fails_the_run() {
    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/products/widget");
        then.status(503).body("Service Unavailable");
    });

    let email = RecordingNotifier::new(Channel::Email);
    let sms = RecordingNotifier::new(Channel::Sms);
    let checker = checker_with(config_for(server.url("/products/widget")), &email, &sms);

    let err = checker.run().await.unwrap_err();

    page_mock.assert();
    assert!(matches!(err, CheckError::UnexpectedStatus { status: 503, .. }));
    assert_eq!(err.exit_code(), 2);
    assert!(email.sent().await.is_empty());
    assert!(sms.sent().await.is_empty());
}

#[tokio::test]
async fn test_sms_failure_is_reported_alongside_sent_email() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products/widget");
        then.status(200)
            .body(product_page("<button>Add to cart</button>"));
    });

    let email = RecordingNotifier::new(Channel::Email);
    let sms = RecordingNotifier::failing(Channel::Sms, "Invalid parameter: PhoneNumber");
    let checker = checker_with(config_for(server.url("/products/widget")), &email, &sms);

    let outcome = checker.check().await.unwrap();
    assert!(outcome.sent(Channel::Email));
    assert_eq!(
        outcome.status_of(Channel::Sms),
        Some(&ChannelStatus::Failed {
            reason: "Unable to send the sms: Invalid parameter: PhoneNumber".to_string()
        })
    );

    let err = checker.run().await.unwrap_err();
    match err {
        CheckError::NotificationError { channel, message } => {
            assert_eq!(channel, "sms");
            assert!(message.contains("Invalid parameter: PhoneNumber"));
        }
        other => panic!("expected a notification error, got {:?}", other),
    }
    // One email per run: check() and run() each dispatched once.
    assert_eq!(email.sent().await.len(), 2);
}

#[tokio::test]
async fn test_latin1_page_is_scanned_and_notifies() {
    let server = MockServer::start();
    let mut body = b"<html><body><span>Caf".to_vec();
    body.extend_from_slice(&[0xE9]);
    body.extend_from_slice(b"</span><button>Add to cart</button></body></html>");
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/fr/widget");
        then.status(200)
            .header("Content-Type", "text/html; charset=ISO-8859-1")
            .body(body.clone());
    });

    let email = RecordingNotifier::new(Channel::Email);
    let sms = RecordingNotifier::new(Channel::Sms);
    let checker = checker_with(config_for(server.url("/fr/widget")), &email, &sms);

    let outcome = checker.run().await.unwrap();

    page_mock.assert();
    assert!(outcome.is_available());
    assert_eq!(email.sent().await.len(), 1);
    assert_eq!(sms.sent().await.len(), 1);
}
