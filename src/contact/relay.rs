use std::sync::Arc;

use super::mailer::Mailer;
use super::{compose, validate, ContactError, ContactRequest, ContactResponse};

/// Validates contact submissions and hands them to the configured transport.
#[derive(Clone)]
pub struct ContactRelay {
    mailer: Arc<dyn Mailer>,
    sender: String,
    recipient: String,
}

impl ContactRelay {
    pub fn new(mailer: Arc<dyn Mailer>, sender: &str, recipient: &str) -> Self {
        Self {
            mailer,
            sender: sender.to_string(),
            recipient: recipient.to_string(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub async fn relay(&self, request: &ContactRequest) -> Result<ContactResponse, ContactError> {
        let submission = validate(request)?;
        let email = compose(&submission, &self.sender, &self.recipient);
        match self.mailer.send(&email).await {
            Ok(receipt) => {
                tracing::info!(message_id = %receipt.message_id, "contact message relayed");
                Ok(ContactResponse::sent(Some(receipt.message_id)))
            }
            Err(e) => {
                tracing::error!(error = %e, "email send error");
                Err(ContactError::SendFailed)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::contact::mailer::{MailError, SendReceipt};
    use crate::contact::OutgoingEmail;

    #[derive(Default)]
    pub struct RecordingMailer {
        pub sent: Mutex<Vec<OutgoingEmail>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: &OutgoingEmail) -> Result<SendReceipt, MailError> {
            let mut sent = self.sent.lock().expect("should be able to acquire lock");
            sent.push(email.clone());
            Ok(SendReceipt {
                message_id: format!("msg-{}", sent.len()),
            })
        }
    }

    pub struct FailingMailer;

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn send(&self, _email: &OutgoingEmail) -> Result<SendReceipt, MailError> {
            Err(MailError::Rejected("mailbox unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_relay_sends_composed_mail() {
        let mailer = Arc::new(RecordingMailer::default());
        let relay = ContactRelay::new(mailer.clone(), "relay@example.com", "owner@example.com");

        let res = relay
            .relay(&ContactRequest::new("Ada", "ada@example.com", "Hi there"))
            .await
            .unwrap();
        assert!(res.success);
        assert_eq!(res.message_id.as_deref(), Some("msg-1"));

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "owner@example.com");
        assert_eq!(sent[0].reply_to, "ada@example.com");
    }

    #[tokio::test]
    async fn test_relay_rejects_before_sending() {
        let mailer = Arc::new(RecordingMailer::default());
        let relay = ContactRelay::new(mailer.clone(), "relay@example.com", "owner@example.com");

        let err = relay
            .relay(&ContactRequest::new("Ada", "", "Hi"))
            .await
            .unwrap_err();
        assert_eq!(err, ContactError::MissingFields);
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_relay_reports_transport_failure() {
        let relay = ContactRelay::new(Arc::new(FailingMailer), "relay@example.com", "owner@example.com");
        let err = relay
            .relay(&ContactRequest::new("Ada", "ada@example.com", "Hi"))
            .await
            .unwrap_err();
        assert_eq!(err, ContactError::SendFailed);
    }
}
