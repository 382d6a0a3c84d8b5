mod category;
mod comment;
mod post;
mod tag;

pub use category::{BlogCategory, BlogCategoryField, BlogCategoryForm, DEFAULT_CATEGORY_COLOR};
pub use comment::{BlogComment, BlogCommentField, BlogCommentForm, CommentThread};
pub use post::{BlogPost, BlogPostField, BlogPostForm};
pub use tag::{BlogPostTag, BlogPostTagField, BlogTag, BlogTagField, BlogTagForm};
