use async_trait::async_trait;

use studio_core::domain::EmailMessage;
use studio_core::domain::validation::Validator;
use studio_core::ports::{MailError, Mailer};

/// Transport that records outgoing mail in the log instead of delivering it.
///
/// Recipients are still validated so callers see the same failures a real
/// transport would report.
#[derive(Debug, Clone)]
pub struct LogMailer {
    from_email: String,
    from_name: String,
}

impl LogMailer {
    pub fn new(from_email: impl Into<String>, from_name: impl Into<String>) -> Self {
        Self {
            from_email: from_email.into(),
            from_name: from_name.into(),
        }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), MailError> {
        let recipients = std::iter::once(&message.to)
            .chain(&message.cc)
            .chain(&message.bcc);
        for address in recipients {
            Validator::new()
                .email("Recipient", address, 254)
                .finish()
                .map_err(|_| MailError::InvalidRecipient(address.clone()))?;
        }

        tracing::info!(
            from = %format!("{} <{}>", self.from_name, self.from_email),
            to = %message.to,
            cc = message.cc.len(),
            bcc = message.bcc.len(),
            subject = %message.subject,
            html = message.is_html,
            "Email sent"
        );
        tracing::debug!(body = %message.body, "Email body");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_valid_recipient() {
        let mailer = LogMailer::new("noreply@studio.test", "Studio");
        let message = EmailMessage::text("ama@example.com", "Ama", "Hi", "Hello");
        assert!(mailer.send(message).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_malformed_cc() {
        let mailer = LogMailer::new("noreply@studio.test", "Studio");
        let mut message = EmailMessage::text("ama@example.com", "Ama", "Hi", "Hello");
        message.cc.push("not-an-address".into());
        let err = mailer.send(message).await.unwrap_err();
        assert!(matches!(err, MailError::InvalidRecipient(addr) if addr == "not-an-address"));
    }
}
