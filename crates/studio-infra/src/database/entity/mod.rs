//! SeaORM entities, one module per table.

pub mod blog_category;
pub mod blog_comment;
pub mod blog_post;
pub mod blog_post_tag;
pub mod blog_tag;
pub mod contact_submission;
pub mod course;
pub mod course_lesson;
pub mod portfolio;
pub mod portfolio_category;
