use sea_orm::Set;
use sea_orm::entity::prelude::*;

use studio_core::domain::{ContactSubmission, ContactSubmissionField};

use crate::database::mapping::{MappedEntity, identity};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub submitted_at: DateTimeWithTimeZone,
    pub is_read: bool,
    pub read_at: Option<DateTimeWithTimeZone>,
    pub is_replied: bool,
    pub replied_at: Option<DateTimeWithTimeZone>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub admin_notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl MappedEntity for Entity {
    type Domain = ContactSubmission;

    fn column(field: ContactSubmissionField) -> Column {
        match field {
            ContactSubmissionField::Id => Column::Id,
            ContactSubmissionField::Email => Column::Email,
            ContactSubmissionField::Subject => Column::Subject,
            ContactSubmissionField::SubmittedAt => Column::SubmittedAt,
            ContactSubmissionField::IsRead => Column::IsRead,
            ContactSubmissionField::IsReplied => Column::IsReplied,
        }
    }
}

impl From<Model> for ContactSubmission {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            email: model.email,
            phone: model.phone,
            company: model.company,
            subject: model.subject,
            message: model.message,
            submitted_at: model.submitted_at.into(),
            is_read: model.is_read,
            read_at: model.read_at.map(Into::into),
            is_replied: model.is_replied,
            replied_at: model.replied_at.map(Into::into),
            ip_address: model.ip_address,
            user_agent: model.user_agent,
            admin_notes: model.admin_notes,
        }
    }
}

impl From<ContactSubmission> for ActiveModel {
    fn from(submission: ContactSubmission) -> Self {
        Self {
            id: identity(submission.id),
            full_name: Set(submission.full_name),
            email: Set(submission.email),
            phone: Set(submission.phone),
            company: Set(submission.company),
            subject: Set(submission.subject),
            message: Set(submission.message),
            submitted_at: Set(submission.submitted_at.into()),
            is_read: Set(submission.is_read),
            read_at: Set(submission.read_at.map(Into::into)),
            is_replied: Set(submission.is_replied),
            replied_at: Set(submission.replied_at.map(Into::into)),
            ip_address: Set(submission.ip_address),
            user_agent: Set(submission.user_agent),
            admin_notes: Set(submission.admin_notes),
        }
    }
}
