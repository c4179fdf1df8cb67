//! Integration tests for webhook delivery using mockito for HTTP mocking.

use formlink_contact::{
    validate, ContactFormFields, ContactSender, SubmissionError, WebhookClient, WebhookSender,
};
use mockito::{Matcher, Server};
use std::time::Duration;

fn fields() -> ContactFormFields {
    ContactFormFields {
        inquiry_type: "support".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john@example.com".to_string(),
        subject: "Need help".to_string(),
        message: "This is a test message".to_string(),
        ..Default::default()
    }
}

fn client(url: String, token: Option<&str>) -> WebhookClient {
    WebhookClient::new(url, token.map(str::to_string), Duration::from_secs(5))
}

#[test]
fn test_deliver_posts_json() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/contact")
        .match_header("content-type", "application/json")
        .match_header("authorization", "Bearer test-token")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "inquiryType": "support",
            "email": "john@example.com"
        })))
        .with_status(202)
        .create();

    let client = client(format!("{}/contact", server.url()), Some("test-token"));
    let body = serde_json::to_value(validate(&fields()).unwrap()).unwrap();

    client.deliver(&body).unwrap();
    mock.assert();
}

#[test]
fn test_deliver_without_token_sends_no_authorization() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/contact")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .create();

    let client = client(format!("{}/contact", server.url()), None);
    client.deliver(&serde_json::json!({})).unwrap();
    mock.assert();
}

#[test]
fn test_deliver_maps_error_status() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/contact")
        .with_status(503)
        .with_body("maintenance")
        .create();

    let client = client(format!("{}/contact", server.url()), None);
    let result = client.deliver(&serde_json::json!({}));

    mock.assert();
    assert_eq!(
        result,
        Err(SubmissionError::Rejected {
            status: 503,
            message: "maintenance".to_string(),
        })
    );
}

#[test]
fn test_deliver_connection_failure() {
    // Port 9 (discard) is not listening locally
    let client = client("http://127.0.0.1:9/contact".to_string(), None);
    let result = client.deliver(&serde_json::json!({}));

    assert!(matches!(
        result,
        Err(SubmissionError::HttpError(_)) | Err(SubmissionError::Timeout)
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_webhook_sender_delivers_request() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/hooks/contact")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "firstName": "John",
            "lastName": "Doe",
            "subject": "Need help"
        })))
        .with_status(200)
        .create_async()
        .await;

    let sender = WebhookSender::new(client(format!("{}/hooks/contact", server.url()), None));
    let request = validate(&fields()).unwrap();

    sender.send(&request).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_webhook_sender_reports_rejection() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", "/hooks/contact")
        .with_status(422)
        .with_body("invalid payload")
        .create_async()
        .await;

    let sender = WebhookSender::new(client(format!("{}/hooks/contact", server.url()), None));
    let request = validate(&fields()).unwrap();

    let error = sender.send(&request).await.unwrap_err();
    assert!(matches!(error, SubmissionError::Rejected { status: 422, .. }));
}
