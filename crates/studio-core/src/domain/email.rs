use serde::Serialize;

use super::contact::ContactSubmission;

/// An outgoing email, independent of transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub to_name: String,
    pub subject: String,
    pub body: String,
    pub is_html: bool,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
}

impl EmailMessage {
    pub fn text(
        to: impl Into<String>,
        to_name: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            to_name: to_name.into(),
            subject: subject.into(),
            body: body.into(),
            is_html: false,
            cc: Vec::new(),
            bcc: Vec::new(),
        }
    }

    /// Notification to the site owner about a new contact submission.
    pub fn contact_notification(admin_email: &str, submission: &ContactSubmission) -> Self {
        let mut body = format!(
            "New contact form submission\n\nFrom: {}\nEmail: {}\n",
            submission.full_name, submission.email
        );
        if let Some(phone) = &submission.phone {
            body.push_str(&format!("Phone: {phone}\n"));
        }
        if let Some(company) = &submission.company {
            body.push_str(&format!("Company: {company}\n"));
        }
        body.push_str(&format!(
            "Subject: {}\n\nMessage:\n{}\n",
            submission.subject, submission.message
        ));

        Self::text(
            admin_email,
            "Admin",
            format!("New Contact Form: {}", submission.subject),
            body,
        )
    }

    /// Acknowledgement sent back to whoever filled in the contact form.
    pub fn contact_confirmation(site_name: &str, submission: &ContactSubmission) -> Self {
        let body = format!(
            "Hello {name},\n\n\
             Thank you for reaching out to {site_name}. We have received your message \
             and will get back to you as soon as possible.\n\n\
             Our team typically responds within 24-48 hours during business days.\n\n\
             Best regards,\n{site_name} Team\n",
            name = submission.full_name,
        );

        Self::text(
            &submission.email,
            &submission.full_name,
            format!("Thank you for contacting {site_name}"),
            body,
        )
    }
}
