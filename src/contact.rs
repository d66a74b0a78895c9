#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod mailer;
#[cfg(feature = "ssr")]
pub mod relay;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const SENT_BADGE_DURATION: Duration = Duration::from_secs(3);
pub const SENT_MESSAGE: &str = "Email sent successfully";
pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again.";
pub const FALLBACK_ERROR: &str = "Failed to send message. Please try again.";

/// Body of `POST /api/contact`. Fields are optional so a missing one is a
/// validation error rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactRequest {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(
        rename = "messageId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub message_id: Option<String>,
}

impl ContactResponse {
    pub fn sent(message_id: Option<String>) -> Self {
        Self {
            success: true,
            message: SENT_MESSAGE.to_string(),
            message_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Failed to send email")]
    SendFailed,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn required(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn validate(request: &ContactRequest) -> Result<ContactSubmission, ContactError> {
    match (
        required(&request.name),
        required(&request.email),
        required(&request.message),
    ) {
        (Some(name), Some(email), Some(message)) => Ok(ContactSubmission {
            name,
            email,
            message,
        }),
        _ => Err(ContactError::MissingFields),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Flattens a user-supplied value for use in a mail header.
fn header_value(input: &str) -> String {
    input
        .split(|c: char| c == '\r' || c == '\n')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the notification mail for the site owner. Replies go straight to
/// the person who filled in the form.
pub fn compose(submission: &ContactSubmission, sender: &str, recipient: &str) -> OutgoingEmail {
    let name = escape_html(&submission.name);
    let email = escape_html(&submission.email);
    let message = escape_html(&submission.message)
        .replace("\r\n", "\n")
        .replace('\n', "<br>");
    let html = format!(
        "<h2>New Contact Form Submission</h2>\n\
         <p><strong>Name:</strong> {name}</p>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{message}</p>\n"
    );
    let text = format!(
        "New Contact Form Submission\n\nName: {}\nEmail: {}\n\n{}\n",
        submission.name, submission.email, submission.message
    );
    OutgoingEmail {
        from: format!("\"Contact Form\" <{sender}>"),
        to: recipient.to_string(),
        reply_to: header_value(&submission.email),
        subject: format!(
            "New Contact Form Message from {}",
            header_value(&submission.name)
        ),
        html,
        text,
    }
}

/// Current input values of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<&ContactFields> for ContactRequest {
    fn from(fields: &ContactFields) -> Self {
        ContactRequest::new(&fields.name, &fields.email, &fields.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    /// Waiting on the response for the given ticket.
    Submitting(u64),
    Sent,
    Failed(String),
}

/// Client-side state of the contact form.
///
/// Every submission gets a ticket; a response or timeout only applies while
/// its ticket is the outstanding one, so a reply that arrives after the
/// timeout fired is dropped.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub fields: ContactFields,
    status: FormStatus,
    next_ticket: u64,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            status: FormStatus::Idle,
            next_ticket: 1,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, FormStatus::Submitting(_))
    }

    pub fn is_sent(&self) -> bool {
        self.status == FormStatus::Sent
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Starts a submission, returning its ticket and the request to send.
    /// Returns `None` while a submission is in flight or the sent badge shows.
    pub fn submit(&mut self) -> Option<(u64, ContactRequest)> {
        if self.is_submitting() || self.is_sent() {
            return None;
        }
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.status = FormStatus::Submitting(ticket);
        Some((ticket, ContactRequest::from(&self.fields)))
    }

    /// Applies the outcome of a submission. Returns `false` for a stale ticket.
    pub fn resolve(&mut self, ticket: u64, result: Result<ContactResponse, String>) -> bool {
        if self.status != FormStatus::Submitting(ticket) {
            return false;
        }
        match result {
            Ok(_) => {
                self.fields = ContactFields::default();
                self.status = FormStatus::Sent;
            }
            Err(e) if e.trim().is_empty() => {
                self.status = FormStatus::Failed(FALLBACK_ERROR.to_string());
            }
            Err(e) => self.status = FormStatus::Failed(e),
        }
        true
    }

    pub fn time_out(&mut self, ticket: u64) -> bool {
        if self.status != FormStatus::Submitting(ticket) {
            return false;
        }
        self.status = FormStatus::Failed(TIMEOUT_MESSAGE.to_string());
        true
    }

    pub fn dismiss_sent(&mut self) {
        if self.is_sent() {
            self.status = FormStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        validate(&ContactRequest::new("Ada", "ada@example.com", "Hello")).expect("valid request")
    }

    #[test]
    fn test_validate_requires_every_field() {
        assert!(validate(&ContactRequest::new("Ada", "ada@example.com", "Hi")).is_ok());
        assert_eq!(
            validate(&ContactRequest::default()),
            Err(ContactError::MissingFields)
        );
        assert_eq!(
            validate(&ContactRequest::new("Ada", "", "Hi")),
            Err(ContactError::MissingFields)
        );
        assert_eq!(
            validate(&ContactRequest::new("Ada", "ada@example.com", "   \n")),
            Err(ContactError::MissingFields)
        );
        let missing_message = ContactRequest {
            message: None,
            ..ContactRequest::new("Ada", "ada@example.com", "")
        };
        assert_eq!(
            validate(&missing_message),
            Err(ContactError::MissingFields)
        );
        assert_eq!(
            ContactError::MissingFields.to_string(),
            "All fields are required"
        );
    }

    #[test]
    fn test_request_parses_with_missing_fields() {
        let req: ContactRequest =
            serde_json::from_str(r#"{"name":"Ada"}"#).expect("partial body parses");
        assert_eq!(req.name.as_deref(), Some("Ada"));
        assert_eq!(req.email, None);
    }

    #[test]
    fn test_response_wire_format() {
        let value = serde_json::to_value(ContactResponse::sent(Some("abc".into())))
            .expect("serializes");
        assert_eq!(
            value,
            serde_json::json!({
                "success": true,
                "message": "Email sent successfully",
                "messageId": "abc",
            })
        );
        let value = serde_json::to_value(ContactResponse::sent(None)).expect("serializes");
        assert!(value.get("messageId").is_none());
    }

    #[test]
    fn test_compose_addresses_and_subject() {
        let mail = compose(&submission(), "relay@example.com", "owner@example.com");
        assert_eq!(mail.from, "\"Contact Form\" <relay@example.com>");
        assert_eq!(mail.to, "owner@example.com");
        assert_eq!(mail.reply_to, "ada@example.com");
        assert_eq!(mail.subject, "New Contact Form Message from Ada");
        assert!(mail.html.contains("<p><strong>Name:</strong> Ada</p>"));
        assert!(mail.text.contains("Hello"));
    }

    #[test]
    fn test_compose_strips_header_newlines() {
        let sub = validate(&ContactRequest::new(
            "Eve\r\nBcc: victim@example.com",
            "eve@example.com\r\nCc: x@y",
            "hi\nthere",
        ))
        .expect("valid request");
        let mail = compose(&sub, "relay@example.com", "owner@example.com");
        for header in [&mail.subject, &mail.reply_to, &mail.from, &mail.to] {
            assert!(!header.contains('\r') && !header.contains('\n'), "{header:?}");
        }
        assert_eq!(
            mail.subject,
            "New Contact Form Message from Eve Bcc: victim@example.com"
        );
        assert_eq!(mail.reply_to, "eve@example.com Cc: x@y");
        // the body keeps its line breaks
        assert!(mail.html.contains("hi<br>there"));
    }

    #[test]
    fn test_compose_escapes_and_breaks_lines() {
        let sub = ContactSubmission {
            name: "<b>Eve</b>".to_string(),
            email: "eve@example.com".to_string(),
            message: "line one\nline <two> & three".to_string(),
        };
        let mail = compose(&sub, "relay@example.com", "owner@example.com");
        assert!(mail.html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
        assert!(mail
            .html
            .contains("line one<br>line &lt;two&gt; &amp; three"));
        assert!(!mail.html.contains("<b>Eve"));
    }

    #[test]
    fn test_form_success_clears_fields() {
        let mut form = ContactForm::new();
        form.fields.name = "Ada".to_string();
        let (ticket, request) = form.submit().expect("idle form submits");
        assert_eq!(request.name.as_deref(), Some("Ada"));
        assert!(form.is_submitting());
        assert!(form.submit().is_none());

        assert!(form.resolve(ticket, Ok(ContactResponse::sent(None))));
        assert!(form.is_sent());
        assert_eq!(form.fields, ContactFields::default());
        assert!(form.submit().is_none());

        form.dismiss_sent();
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn test_form_timeout_drops_late_response() {
        let mut form = ContactForm::new();
        form.fields.message = "still here".to_string();
        let (ticket, _) = form.submit().expect("submits");

        assert!(form.time_out(ticket));
        assert_eq!(form.error(), Some(TIMEOUT_MESSAGE));
        assert!(!form.resolve(ticket, Ok(ContactResponse::sent(None))));
        assert_eq!(form.error(), Some(TIMEOUT_MESSAGE));
        assert_eq!(form.fields.message, "still here");

        // a retry gets a fresh ticket, and the old timer no longer applies
        let (retry, _) = form.submit().expect("failed form can retry");
        assert_ne!(retry, ticket);
        assert!(!form.time_out(ticket));
        assert!(form.resolve(retry, Err("All fields are required".to_string())));
        assert_eq!(form.error(), Some("All fields are required"));
    }

    #[test]
    fn test_form_blank_error_uses_fallback() {
        let mut form = ContactForm::new();
        let (ticket, _) = form.submit().expect("submits");
        form.resolve(ticket, Err(String::new()));
        assert_eq!(form.error(), Some(FALLBACK_ERROR));
    }
}
