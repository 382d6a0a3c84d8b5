use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::validation::Validator;
use crate::error::DomainError;
use crate::query::{Entity, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogComment {
    pub id: i32,
    pub post_id: i32,
    pub author_name: String,
    pub author_email: String,
    pub author_website: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub is_approved: bool,
    pub parent_comment_id: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogCommentField {
    Id,
    PostId,
    CreatedAt,
    IsApproved,
    ParentCommentId,
}

impl Entity for BlogComment {
    type Field = BlogCommentField;
    const NAME: &'static str = "blog_comment";
    const ID: BlogCommentField = BlogCommentField::Id;

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn value_of(&self, field: BlogCommentField) -> Value {
        match field {
            BlogCommentField::Id => self.id.into(),
            BlogCommentField::PostId => self.post_id.into(),
            BlogCommentField::CreatedAt => self.created_at.into(),
            BlogCommentField::IsApproved => self.is_approved.into(),
            BlogCommentField::ParentCommentId => self.parent_comment_id.into(),
        }
    }
}

/// A top-level comment with its replies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentThread {
    #[serde(flatten)]
    pub comment: BlogComment,
    pub replies: Vec<BlogComment>,
}

impl CommentThread {
    /// Groups a flat, already ordered list into threads. Replies whose parent
    /// is absent from `comments` are dropped.
    pub fn build(comments: Vec<BlogComment>) -> Vec<CommentThread> {
        let (roots, replies): (Vec<_>, Vec<_>) = comments
            .into_iter()
            .partition(|comment| comment.parent_comment_id.is_none());

        let mut threads: Vec<CommentThread> = roots
            .into_iter()
            .map(|comment| CommentThread {
                comment,
                replies: Vec::new(),
            })
            .collect();

        for reply in replies {
            if let Some(thread) = threads
                .iter_mut()
                .find(|thread| Some(thread.comment.id) == reply.parent_comment_id)
            {
                thread.replies.push(reply);
            }
        }
        threads
    }
}

/// Public comment submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogCommentForm {
    /// Taken from the route when posted to a post's comment endpoint.
    #[serde(default)]
    pub post_id: i32,
    pub author_name: String,
    pub author_email: String,
    #[serde(default)]
    pub author_website: Option<String>,
    pub content: String,
    #[serde(default)]
    pub parent_comment_id: Option<i32>,
}

impl BlogCommentForm {
    pub fn validate(&self) -> Result<(), DomainError> {
        Validator::new()
            .check(self.post_id > 0, "Post is required")
            .required("Name", &self.author_name, 100)
            .email("Email", &self.author_email, 200)
            .optional("Website", self.author_website.as_deref(), 500)
            .required("Comment", &self.content, 2000)
            .finish()
    }

    /// New comment awaiting moderation.
    pub fn to_comment(&self, now: DateTime<Utc>) -> BlogComment {
        BlogComment {
            id: 0,
            post_id: self.post_id,
            author_name: self.author_name.trim().to_owned(),
            author_email: self.author_email.trim().to_owned(),
            author_website: self.author_website.clone(),
            content: self.content.clone(),
            created_at: now,
            is_approved: false,
            parent_comment_id: self.parent_comment_id,
        }
    }
}
