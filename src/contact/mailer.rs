use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;

use super::OutgoingEmail;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("couldn't write message: {0}")]
    Io(#[from] std::io::Error),
    #[error("couldn't encode message: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("transport rejected message: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub message_id: String,
}

/// Delivers composed messages somewhere a human will read them.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<SendReceipt, MailError>;
}

fn next_message_id(counter: &AtomicU64) -> String {
    let n = counter.fetch_add(1, Ordering::Relaxed);
    format!("{}-{n:04}", Utc::now().format("%Y%m%dT%H%M%S%.3fZ"))
}

/// Writes messages to the server log only. Useful in development.
#[derive(Debug, Default)]
pub struct LogMailer {
    sent: AtomicU64,
}

impl LogMailer {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<SendReceipt, MailError> {
        let message_id = next_message_id(&self.sent);
        tracing::info!(
            message_id = %message_id,
            to = %email.to,
            reply_to = %email.reply_to,
            subject = %email.subject,
            "contact message logged"
        );
        tracing::debug!(body = %email.text);
        Ok(SendReceipt { message_id })
    }
}

/// Drops each message as a JSON file into a spool directory for an external
/// mail agent. Files are written under a temporary name and renamed, so a
/// reader never sees a partial message.
#[derive(Debug)]
pub struct SpoolMailer {
    dir: PathBuf,
    sent: AtomicU64,
}

impl SpoolMailer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            sent: AtomicU64::new(0),
        }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }
}

#[async_trait]
impl Mailer for SpoolMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<SendReceipt, MailError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let message_id = next_message_id(&self.sent);
        let body = serde_json::to_vec_pretty(email)?;

        let tmp = self.dir.join(format!(".{message_id}.tmp"));
        let path = self.dir.join(format!("{message_id}.json"));
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &path).await?;

        tracing::info!(message_id = %message_id, path = %path.display(), "contact message spooled");
        Ok(SendReceipt { message_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            from: "\"Contact Form\" <relay@example.com>".to_string(),
            to: "owner@example.com".to_string(),
            reply_to: "ada@example.com".to_string(),
            subject: "New Contact Form Message from Ada".to_string(),
            html: "<p>Hello</p>".to_string(),
            text: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_log_mailer_ids_are_unique() {
        let mailer = LogMailer::new();
        let a = mailer.send(&email()).await.unwrap();
        let b = mailer.send(&email()).await.unwrap();
        assert_ne!(a.message_id, b.message_id);
    }

    #[tokio::test]
    async fn test_spool_mailer_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let spool = dir.path().join("outbox");
        let mailer = SpoolMailer::new(&spool);

        let receipt = mailer.send(&email()).await.unwrap();

        assert_eq!(mailer.dir(), &spool);
        let path = mailer.dir().join(format!("{}.json", receipt.message_id));
        let written: OutgoingEmail =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(written, email());

        let leftovers = std::fs::read_dir(&spool)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn test_spool_mailer_fails_on_unwritable_dir() {
        let dir = tempfile::tempdir().unwrap();
        // a regular file where the spool directory should be
        let blocker = dir.path().join("outbox");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let mailer = SpoolMailer::new(&blocker);
        let err = mailer.send(&email()).await.unwrap_err();
        assert!(matches!(err, MailError::Io(_)));
    }
}
