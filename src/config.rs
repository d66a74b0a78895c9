use std::path::PathBuf;
use std::sync::Arc;

use crate::contact::mailer::{LogMailer, Mailer, SpoolMailer};
use crate::contact::relay::ContactRelay;
use crate::content::PROFILE;

pub const DEFAULT_SENDER: &str = "no-reply@localhost";

/// Contact relay settings, read from `CONTACT_*` environment variables.
/// Empty values count as unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub recipient: String,
    pub sender: String,
    pub spool_dir: Option<PathBuf>,
}

impl ContactConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            recipient: get("CONTACT_RECIPIENT").unwrap_or_else(|| PROFILE.email.to_string()),
            sender: get("CONTACT_SENDER").unwrap_or_else(|| DEFAULT_SENDER.to_string()),
            spool_dir: get("CONTACT_SPOOL_DIR").map(PathBuf::from),
        }
    }

    pub fn mailer(&self) -> Arc<dyn Mailer> {
        match &self.spool_dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "spooling contact messages");
                Arc::new(SpoolMailer::new(dir))
            }
            None => {
                tracing::warn!("CONTACT_SPOOL_DIR not set, contact messages are only logged");
                Arc::new(LogMailer::new())
            }
        }
    }

    pub fn relay(&self) -> ContactRelay {
        ContactRelay::new(self.mailer(), &self.sender, &self.recipient)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ContactConfig::from_lookup(lookup(&[]));
        assert_eq!(config.recipient, PROFILE.email);
        assert_eq!(config.sender, DEFAULT_SENDER);
        assert_eq!(config.spool_dir, None);
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let config = ContactConfig::from_lookup(lookup(&[
            ("CONTACT_RECIPIENT", "me@example.com"),
            ("CONTACT_SENDER", "  "),
            ("CONTACT_SPOOL_DIR", "/var/spool/contact"),
        ]));
        assert_eq!(config.recipient, "me@example.com");
        assert_eq!(config.sender, DEFAULT_SENDER);
        assert_eq!(
            config.spool_dir,
            Some(PathBuf::from("/var/spool/contact"))
        );
        assert_eq!(config.relay().recipient(), "me@example.com");
    }
}
