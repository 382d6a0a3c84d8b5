//! Domain entities and the form models that edit them.

pub mod blog;
mod contact;
mod course;
mod email;
mod portfolio;
mod publish;
mod sitemap;
pub mod validation;

pub use blog::{
    BlogCategory, BlogCategoryField, BlogCategoryForm, BlogComment, BlogCommentField,
    BlogCommentForm, BlogPost, BlogPostField, BlogPostForm, BlogPostTag, BlogPostTagField,
    BlogTag, BlogTagField, BlogTagForm, CommentThread,
};
pub use contact::{ClientInfo, ContactForm, ContactSubmission, ContactSubmissionField};
pub use course::{
    Course, CourseField, CourseForm, CourseLesson, CourseLessonField, CourseLessonForm,
    DEFAULT_CURRENCY,
};
pub use email::EmailMessage;
pub use portfolio::{
    Portfolio, PortfolioCategory, PortfolioCategoryField, PortfolioCategoryForm, PortfolioField,
    PortfolioForm,
};
pub use publish::Publishable;
pub use sitemap::{ChangeFrequency, SitemapUrl};
