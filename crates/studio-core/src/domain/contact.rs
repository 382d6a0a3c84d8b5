use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::Validator;
use crate::error::DomainError;
use crate::query::{Entity, Value};

/// A message sent through the public contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub is_replied: bool,
    pub replied_at: Option<DateTime<Utc>>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub admin_notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSubmissionField {
    Id,
    Email,
    Subject,
    SubmittedAt,
    IsRead,
    IsReplied,
}

impl Entity for ContactSubmission {
    type Field = ContactSubmissionField;
    const NAME: &'static str = "contact_submission";
    const ID: ContactSubmissionField = ContactSubmissionField::Id;

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn value_of(&self, field: ContactSubmissionField) -> Value {
        match field {
            ContactSubmissionField::Id => self.id.into(),
            ContactSubmissionField::Email => (&self.email).into(),
            ContactSubmissionField::Subject => (&self.subject).into(),
            ContactSubmissionField::SubmittedAt => self.submitted_at.into(),
            ContactSubmissionField::IsRead => self.is_read.into(),
            ContactSubmissionField::IsReplied => self.is_replied.into(),
        }
    }
}

impl ContactSubmission {
    /// Returns `true` if this call changed the read state.
    pub fn mark_read(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_read {
            return false;
        }
        self.is_read = true;
        self.read_at = Some(now);
        true
    }

    /// Returns `true` if this call changed the replied state.
    pub fn mark_replied(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_replied {
            return false;
        }
        self.is_replied = true;
        self.replied_at = Some(now);
        true
    }
}

/// Request metadata captured alongside a submission.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), DomainError> {
        Validator::new()
            .required("Full name", &self.full_name, 100)
            .email("Email", &self.email, 200)
            .optional("Phone", self.phone.as_deref(), 20)
            .optional("Company", self.company.as_deref(), 200)
            .required("Subject", &self.subject, 200)
            .required("Message", &self.message, 2000)
            .finish()
    }

    /// New unread, unreplied submission.
    pub fn to_submission(&self, client: ClientInfo, now: DateTime<Utc>) -> ContactSubmission {
        ContactSubmission {
            full_name: self.full_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.clone(),
            company: self.company.clone(),
            subject: self.subject.trim().to_owned(),
            message: self.message.clone(),
            submitted_at: now,
            ip_address: client.ip_address.map(|ip| truncate(ip, 100)),
            user_agent: client.user_agent.map(|ua| truncate(ua, 500)),
            ..ContactSubmission::default()
        }
    }
}

fn truncate(mut value: String, max_chars: usize) -> String {
    if let Some((index, _)) = value.char_indices().nth(max_chars) {
        value.truncate(index);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_and_replied_are_stamped_once() {
        let first = Utc::now();
        let mut submission = ContactSubmission::default();

        assert!(submission.mark_read(first));
        assert!(!submission.mark_read(first + chrono::Duration::hours(1)));
        assert_eq!(submission.read_at, Some(first));

        assert!(submission.mark_replied(first));
        assert!(!submission.mark_replied(first + chrono::Duration::hours(1)));
        assert_eq!(submission.replied_at, Some(first));
    }

    #[test]
    fn new_submission_starts_unread() {
        let form = ContactForm {
            full_name: "Ama Owusu".into(),
            email: "ama@example.com".into(),
            subject: "Website".into(),
            message: "Hi".into(),
            ..ContactForm::default()
        };
        let client = ClientInfo {
            ip_address: Some("10.0.0.1".into()),
            user_agent: Some("x".repeat(600)),
        };

        let submission = form.to_submission(client, Utc::now());

        assert!(!submission.is_read && !submission.is_replied);
        assert_eq!(submission.user_agent.map(|ua| ua.len()), Some(500));
    }
}
