//! # Mail Send Payload
//!
//! Wire types for SendGrid's v3 mail send body.

use relay_core::{EmailAddress, EmailMessage};
use serde::Serialize;

/// Body of `POST /v3/mail/send`
#[derive(Debug, Serialize)]
pub struct MailSendRequest {
    pub personalizations: Vec<Personalization>,
    pub from: MailAddress,
    pub reply_to: MailAddress,
    pub subject: String,
    pub content: Vec<MailContent>,
}

#[derive(Debug, Serialize)]
pub struct Personalization {
    pub to: Vec<MailAddress>,
    pub subject: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MailAddress {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MailContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}

impl From<&EmailAddress> for MailAddress {
    fn from(address: &EmailAddress) -> Self {
        Self {
            email: address.email.clone(),
            name: address.name.clone(),
        }
    }
}

impl From<&EmailMessage> for MailSendRequest {
    fn from(message: &EmailMessage) -> Self {
        Self {
            personalizations: vec![Personalization {
                to: vec![MailAddress::from(&message.to)],
                subject: message.subject.clone(),
            }],
            from: MailAddress::from(&message.from),
            reply_to: MailAddress::from(&message.reply_to),
            subject: message.subject.clone(),
            content: vec![MailContent {
                content_type: "text/html".to_string(),
                value: message.html_content.clone(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nameless_address_omits_name() {
        let message = EmailMessage::new(
            EmailAddress::email_only("jane@example.com"),
            EmailAddress::new("shop@example.com", "Shop"),
            "Your order",
            "<h1>Thanks</h1>",
        );
        let body = serde_json::to_value(MailSendRequest::from(&message)).unwrap();

        assert_eq!(
            body["personalizations"][0]["to"][0],
            serde_json::json!({"email": "jane@example.com"})
        );
        assert_eq!(body["from"]["name"], "Shop");
    }

    #[test]
    fn test_payload_shape() {
        let message = EmailMessage::new(
            EmailAddress::new("jane@example.com", "Jane"),
            EmailAddress::new("shop@example.com", "Shop"),
            "Your order",
            "<h1>Thanks</h1>",
        );
        let body = serde_json::to_value(MailSendRequest::from(&message)).unwrap();

        assert_eq!(body["personalizations"][0]["to"][0]["email"], "jane@example.com");
        assert_eq!(body["personalizations"][0]["subject"], "Your order");
        assert_eq!(body["from"]["name"], "Shop");
        assert_eq!(body["reply_to"], body["from"]);
        assert_eq!(body["content"][0]["type"], "text/html");
        assert_eq!(body["content"][0]["value"], "<h1>Thanks</h1>");
    }
}
