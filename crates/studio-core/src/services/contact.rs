use std::sync::Arc;

use chrono::Utc;

use crate::domain::validation::Validator;
use crate::domain::{ClientInfo, ContactForm, ContactSubmission, ContactSubmissionField, EmailMessage};
use crate::error::DomainError;
use crate::ports::{Mailer, Repository};
use crate::query::{Filter, OrderBy, Page, PageRequest};

/// Sends the owner notification and the sender confirmation for a new
/// submission. Delivery failures are logged, never returned.
#[derive(Clone)]
pub struct ContactNotifier {
    mailer: Arc<dyn Mailer>,
    admin_email: String,
    site_name: String,
}

impl ContactNotifier {
    pub fn new(
        mailer: Arc<dyn Mailer>,
        admin_email: impl Into<String>,
        site_name: impl Into<String>,
    ) -> Self {
        Self {
            mailer,
            admin_email: admin_email.into(),
            site_name: site_name.into(),
        }
    }

    async fn notify(&self, submission: &ContactSubmission) {
        let messages = [
            EmailMessage::contact_notification(&self.admin_email, submission),
            EmailMessage::contact_confirmation(&self.site_name, submission),
        ];
        for message in messages {
            let to = message.to.clone();
            if let Err(err) = self.mailer.send(message).await {
                tracing::warn!(
                    error = %err,
                    submission_id = submission.id,
                    to = %to,
                    "Failed to send contact email"
                );
            }
        }
    }
}

#[derive(Clone)]
pub struct ContactService {
    submissions: Arc<dyn Repository<ContactSubmission>>,
    notifier: Option<ContactNotifier>,
}

impl ContactService {
    pub fn new(submissions: Arc<dyn Repository<ContactSubmission>>) -> Self {
        Self {
            submissions,
            notifier: None,
        }
    }

    pub fn with_notifier(mut self, notifier: ContactNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    fn newest_first() -> OrderBy<ContactSubmissionField> {
        OrderBy::desc(ContactSubmissionField::SubmittedAt)
    }

    /// Stores a new unread submission and sends the contact emails.
    pub async fn submit(
        &self,
        form: &ContactForm,
        client: ClientInfo,
    ) -> Result<ContactSubmission, DomainError> {
        form.validate()?;
        let submission = self
            .submissions
            .add(form.to_submission(client, Utc::now()))
            .await?;
        tracing::info!(submission_id = submission.id, "Contact form submitted");

        if let Some(notifier) = &self.notifier {
            notifier.notify(&submission).await;
        }
        Ok(submission)
    }

    pub async fn all_submissions(&self) -> Result<Vec<ContactSubmission>, DomainError> {
        Ok(self
            .submissions
            .list(None, Self::newest_first(), None)
            .await?)
    }

    pub async fn paged_submissions(
        &self,
        page: PageRequest,
        is_read: Option<bool>,
    ) -> Result<Page<ContactSubmission>, DomainError> {
        let filter = is_read.map(|read| Filter::eq(ContactSubmissionField::IsRead, read));
        Ok(self
            .submissions
            .get_paged(page, filter, Self::newest_first())
            .await?)
    }

    pub async fn submission_by_id(&self, id: i32) -> Result<Option<ContactSubmission>, DomainError> {
        Ok(self.submissions.get_by_id(id).await?)
    }

    /// `false` when the submission does not exist. Already-read submissions
    /// keep their original `read_at`.
    pub async fn mark_as_read(&self, id: i32) -> Result<bool, DomainError> {
        let Some(mut submission) = self.submissions.get_by_id(id).await? else {
            return Ok(false);
        };
        if submission.mark_read(Utc::now()) {
            self.submissions.update(submission).await?;
        }
        Ok(true)
    }

    pub async fn mark_as_replied(&self, id: i32) -> Result<bool, DomainError> {
        let Some(mut submission) = self.submissions.get_by_id(id).await? else {
            return Ok(false);
        };
        if submission.mark_replied(Utc::now()) {
            self.submissions.update(submission).await?;
        }
        Ok(true)
    }

    pub async fn update_admin_notes(
        &self,
        id: i32,
        notes: Option<String>,
    ) -> Result<bool, DomainError> {
        Validator::new()
            .optional("Admin notes", notes.as_deref(), 2000)
            .finish()?;
        let Some(mut submission) = self.submissions.get_by_id(id).await? else {
            return Ok(false);
        };
        submission.admin_notes = notes.filter(|n| !n.trim().is_empty());
        self.submissions.update(submission).await?;
        Ok(true)
    }

    pub async fn delete_submission(&self, id: i32) -> Result<bool, DomainError> {
        let Some(submission) = self.submissions.get_by_id(id).await? else {
            return Ok(false);
        };
        self.submissions.delete(submission).await?;
        tracing::info!(submission_id = id, "Contact submission deleted");
        Ok(true)
    }

    pub async fn unread_count(&self) -> Result<u64, DomainError> {
        Ok(self
            .submissions
            .count(Some(Filter::eq(ContactSubmissionField::IsRead, false)))
            .await?)
    }

    pub async fn recent_submissions(&self, count: u64) -> Result<Vec<ContactSubmission>, DomainError> {
        Ok(self
            .submissions
            .list(None, Self::newest_first(), Some(count))
            .await?)
    }
}
