use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use studio_core::DomainError;
use studio_core::domain::{ClientInfo, ContactForm, EmailMessage};
use studio_core::ports::{MailError, Mailer};
use studio_core::query::PageRequest;
use studio_core::services::{ContactNotifier, ContactService};
use studio_infra::Repositories;

#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<EmailMessage>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _message: EmailMessage) -> Result<(), MailError> {
        Err(MailError::Transport("smtp down".into()))
    }
}

fn form(subject: &str) -> ContactForm {
    ContactForm {
        full_name: "Efua Mensah".into(),
        email: "efua@example.com".into(),
        subject: subject.into(),
        message: "I need a website".into(),
        ..Default::default()
    }
}

fn client() -> ClientInfo {
    ClientInfo {
        ip_address: Some("203.0.113.9".into()),
        user_agent: Some("curl/8".into()),
    }
}

#[tokio::test]
async fn submission_is_stored_unread_and_both_emails_go_out() {
    let mailer = Arc::new(RecordingMailer::default());
    let service = ContactService::new(Repositories::in_memory().submissions)
        .with_notifier(ContactNotifier::new(mailer.clone(), "owner@studio.test", "Studio"));

    let submission = service.submit(&form("Quote"), client()).await.unwrap();
    assert!(!submission.is_read);
    assert!(!submission.is_replied);
    assert_eq!(submission.ip_address.as_deref(), Some("203.0.113.9"));

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].to, "owner@studio.test");
    assert_eq!(sent[0].subject, "New Contact Form: Quote");
    assert_eq!(sent[1].to, "efua@example.com");
    assert_eq!(sent[1].subject, "Thank you for contacting Studio");
}

#[tokio::test]
async fn mail_failure_does_not_fail_submission() {
    let service = ContactService::new(Repositories::in_memory().submissions)
        .with_notifier(ContactNotifier::new(Arc::new(FailingMailer), "owner@studio.test", "Studio"));

    let submission = service.submit(&form("Quote"), client()).await.unwrap();
    assert!(service.submission_by_id(submission.id).await.unwrap().is_some());
}

#[tokio::test]
async fn invalid_form_is_rejected() {
    let service = ContactService::new(Repositories::in_memory().submissions);
    let mut bad = form("Quote");
    bad.email = "nope".into();
    assert!(matches!(
        service.submit(&bad, ClientInfo::default()).await.unwrap_err(),
        DomainError::Validation(_)
    ));
}

#[tokio::test]
async fn inbox_workflow() {
    let service = ContactService::new(Repositories::in_memory().submissions);
    let first = service.submit(&form("One"), client()).await.unwrap();
    let second = service.submit(&form("Two"), client()).await.unwrap();
    assert_eq!(service.unread_count().await.unwrap(), 2);

    assert!(service.mark_as_read(first.id).await.unwrap());
    let read_at = service
        .submission_by_id(first.id)
        .await
        .unwrap()
        .unwrap()
        .read_at;
    assert!(read_at.is_some());
    // A second read keeps the original timestamp.
    assert!(service.mark_as_read(first.id).await.unwrap());
    let again = service.submission_by_id(first.id).await.unwrap().unwrap();
    assert_eq!(again.read_at, read_at);
    assert_eq!(service.unread_count().await.unwrap(), 1);

    assert!(service.mark_as_replied(second.id).await.unwrap());
    assert!(!service.mark_as_replied(999).await.unwrap());

    assert!(service
        .update_admin_notes(second.id, Some("Called back".into()))
        .await
        .unwrap());
    let noted = service.submission_by_id(second.id).await.unwrap().unwrap();
    assert!(noted.is_replied);
    assert_eq!(noted.admin_notes.as_deref(), Some("Called back"));

    assert!(service.update_admin_notes(second.id, Some("   ".into())).await.unwrap());
    let cleared = service.submission_by_id(second.id).await.unwrap().unwrap();
    assert_eq!(cleared.admin_notes, None);

    let unread = service
        .paged_submissions(PageRequest::new(1, 10).unwrap(), Some(false))
        .await
        .unwrap();
    assert_eq!(unread.total_count, 1);
    assert_eq!(unread.items[0].id, second.id);

    assert!(service.delete_submission(first.id).await.unwrap());
    assert!(!service.delete_submission(first.id).await.unwrap());
    assert_eq!(service.all_submissions().await.unwrap().len(), 1);
}
