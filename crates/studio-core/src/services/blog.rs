use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use super::{Visibility, dedup_ids, require_slug};
use crate::domain::{
    BlogCategory, BlogCategoryField, BlogCategoryForm, BlogComment, BlogCommentField,
    BlogCommentForm, BlogPost, BlogPostField, BlogPostForm, BlogPostTag, BlogPostTagField,
    BlogTag, BlogTagField, BlogTagForm, CommentThread, Publishable,
};
use crate::error::DomainError;
use crate::ports::Repository;
use crate::query::{Entity, Filter, OrderBy, Page, PageRequest};

/// Posts with more views than this are candidates for the featured list.
const FEATURED_VIEW_THRESHOLD: i32 = 100;
const FEATURED_POST_LIMIT: u64 = 3;

/// Repositories the blog is built from.
#[derive(Clone)]
pub struct BlogRepositories {
    pub posts: Arc<dyn Repository<BlogPost>>,
    pub categories: Arc<dyn Repository<BlogCategory>>,
    pub comments: Arc<dyn Repository<BlogComment>>,
    pub tags: Arc<dyn Repository<BlogTag>>,
    pub post_tags: Arc<dyn Repository<BlogPostTag>>,
}

/// A post as shown in listings.
#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    #[serde(flatten)]
    pub post: BlogPost,
    pub category: Option<BlogCategory>,
    pub tags: Vec<BlogTag>,
}

/// A single post with everything its page needs.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetails {
    #[serde(flatten)]
    pub post: BlogPost,
    pub category: Option<BlogCategory>,
    pub tags: Vec<BlogTag>,
    /// Approved top-level comments, newest first, each with approved replies.
    pub comments: Vec<CommentThread>,
}

#[derive(Clone)]
pub struct BlogService {
    repos: BlogRepositories,
}

impl BlogService {
    pub fn new(repos: BlogRepositories) -> Self {
        Self { repos }
    }

    fn visibility(scope: Visibility) -> Option<Filter<BlogPostField>> {
        scope
            .published_only()
            .then(|| Filter::eq(BlogPostField::IsPublished, true))
    }

    fn newest_first() -> OrderBy<BlogPostField> {
        OrderBy::desc(BlogPostField::CreatedAt)
    }

    // --- posts ---

    pub async fn post_by_id(&self, id: i32) -> Result<Option<PostDetails>, DomainError> {
        match self.repos.posts.get_by_id(id).await? {
            Some(post) => Ok(Some(self.details(post).await?)),
            None => Ok(None),
        }
    }

    pub async fn post_by_slug(&self, slug: &str) -> Result<Option<PostDetails>, DomainError> {
        let slug = require_slug(slug)?;
        let post = self
            .repos
            .posts
            .first_or_default(Filter::eq(BlogPostField::Slug, slug))
            .await?;
        match post {
            Some(post) => Ok(Some(self.details(post).await?)),
            None => Ok(None),
        }
    }

    pub async fn all_posts(&self, scope: Visibility) -> Result<Vec<PostSummary>, DomainError> {
        let posts = self
            .repos
            .posts
            .list(Self::visibility(scope), Self::newest_first(), None)
            .await?;
        self.summarize(posts).await
    }

    pub async fn paged_posts(
        &self,
        page: PageRequest,
        category_id: Option<i32>,
        scope: Visibility,
    ) -> Result<Page<PostSummary>, DomainError> {
        let filter = Filter::all_of([
            Self::visibility(scope),
            category_id.map(|id| Filter::eq(BlogPostField::CategoryId, id)),
        ]);
        let page = self
            .repos
            .posts
            .get_paged(page, filter, Self::newest_first())
            .await?;
        self.summarize_page(page).await
    }

    pub async fn recent_posts(
        &self,
        count: u64,
        scope: Visibility,
    ) -> Result<Vec<PostSummary>, DomainError> {
        let posts = self
            .repos
            .posts
            .list(Self::visibility(scope), Self::newest_first(), Some(count))
            .await?;
        self.summarize(posts).await
    }

    /// Most viewed posts above the popularity threshold.
    pub async fn featured_posts(&self, scope: Visibility) -> Result<Vec<PostSummary>, DomainError> {
        let filter = Filter::all_of([
            Some(Filter::gt(BlogPostField::ViewCount, FEATURED_VIEW_THRESHOLD)),
            Self::visibility(scope),
        ]);
        let posts = self
            .repos
            .posts
            .list(
                filter,
                OrderBy::desc(BlogPostField::ViewCount),
                Some(FEATURED_POST_LIMIT),
            )
            .await?;
        self.summarize(posts).await
    }

    /// Case-insensitive search over title, summary and content.
    pub async fn search_posts(
        &self,
        term: &str,
        page: PageRequest,
        scope: Visibility,
    ) -> Result<Page<PostSummary>, DomainError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(DomainError::invalid("Search term is required"));
        }

        let matches_term = Filter::contains(BlogPostField::Title, term)
            .or(Filter::contains(BlogPostField::Summary, term))
            .or(Filter::contains(BlogPostField::Content, term));
        let filter = Filter::all_of([Some(matches_term), Self::visibility(scope)]);

        let page = self
            .repos
            .posts
            .get_paged(page, filter, Self::newest_first())
            .await?;
        self.summarize_page(page).await
    }

    /// Posts carrying the tag with `slug`; empty when no such tag exists.
    pub async fn posts_by_tag(
        &self,
        slug: &str,
        scope: Visibility,
    ) -> Result<Vec<PostSummary>, DomainError> {
        let Some(tag) = self.tag_by_slug(slug).await? else {
            return Ok(Vec::new());
        };

        let links = self
            .repos
            .post_tags
            .list(
                Some(Filter::eq(BlogPostTagField::TagId, tag.id)),
                OrderBy::asc(BlogPostTagField::Id),
                None,
            )
            .await?;
        if links.is_empty() {
            return Ok(Vec::new());
        }

        let filter = Filter::all_of([
            Some(Filter::is_in(
                BlogPostField::Id,
                links.iter().map(|link| link.post_id),
            )),
            Self::visibility(scope),
        ]);
        let posts = self
            .repos
            .posts
            .list(filter, Self::newest_first(), None)
            .await?;
        self.summarize(posts).await
    }

    pub async fn create_post(&self, form: &BlogPostForm) -> Result<BlogPost, DomainError> {
        form.validate()?;
        self.ensure_category(form.category_id).await?;
        let tag_ids = dedup_ids(&form.tag_ids);
        self.ensure_tags(&tag_ids).await?;

        let now = Utc::now();
        let mut post = form.to_post(now);
        post.stamp_publication(now);

        let post = self.repos.posts.add(post).await?;
        self.sync_tags(post.id, &tag_ids).await?;

        tracing::info!(post_id = post.id, slug = %post.slug, "Blog post created");
        Ok(post)
    }

    pub async fn update_post(&self, id: i32, form: &BlogPostForm) -> Result<BlogPost, DomainError> {
        form.validate()?;
        let mut post = self
            .repos
            .posts
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(BlogPost::NAME, id))?;
        self.ensure_category(form.category_id).await?;
        let tag_ids = dedup_ids(&form.tag_ids);
        self.ensure_tags(&tag_ids).await?;

        let now = Utc::now();
        form.apply_to(&mut post);
        post.updated_at = Some(now);
        post.stamp_publication(now);

        let post = self.repos.posts.update(post).await?;
        self.sync_tags(post.id, &tag_ids).await?;

        tracing::info!(post_id = post.id, "Blog post updated");
        Ok(post)
    }

    /// Deletes the post together with its comments and tag links.
    pub async fn delete_post(&self, id: i32) -> Result<bool, DomainError> {
        let Some(post) = self.repos.posts.get_by_id(id).await? else {
            return Ok(false);
        };

        let links = self
            .repos
            .post_tags
            .list(
                Some(Filter::eq(BlogPostTagField::PostId, id)),
                OrderBy::asc(BlogPostTagField::Id),
                None,
            )
            .await?;
        for link in links {
            self.repos.post_tags.delete(link).await?;
        }

        // Replies first: deleting a parent may already cascade to them.
        let comments = self
            .repos
            .comments
            .list(
                Some(Filter::eq(BlogCommentField::PostId, id)),
                OrderBy::asc(BlogCommentField::Id),
                None,
            )
            .await?;
        let (replies, roots): (Vec<_>, Vec<_>) = comments
            .into_iter()
            .partition(|comment| comment.parent_comment_id.is_some());
        for comment in replies.into_iter().chain(roots) {
            self.repos.comments.delete(comment).await?;
        }

        self.repos.posts.delete(post).await?;
        tracing::info!(post_id = id, "Blog post deleted");
        Ok(true)
    }

    pub async fn increment_view_count(&self, id: i32) -> Result<bool, DomainError> {
        let Some(mut post) = self.repos.posts.get_by_id(id).await? else {
            return Ok(false);
        };
        post.view_count = post.view_count.saturating_add(1);
        self.repos.posts.update(post).await?;
        Ok(true)
    }

    pub async fn post_count(&self, scope: Visibility) -> Result<u64, DomainError> {
        Ok(self.repos.posts.count(Self::visibility(scope)).await?)
    }

    // --- categories ---

    pub async fn all_categories(&self) -> Result<Vec<BlogCategory>, DomainError> {
        Ok(self.repos.categories.get_all().await?)
    }

    pub async fn category_by_id(&self, id: i32) -> Result<Option<BlogCategory>, DomainError> {
        Ok(self.repos.categories.get_by_id(id).await?)
    }

    pub async fn category_by_slug(&self, slug: &str) -> Result<Option<BlogCategory>, DomainError> {
        let slug = require_slug(slug)?;
        Ok(self
            .repos
            .categories
            .first_or_default(Filter::eq(BlogCategoryField::Slug, slug))
            .await?)
    }

    pub async fn create_category(&self, form: &BlogCategoryForm) -> Result<BlogCategory, DomainError> {
        form.validate()?;
        let category = self
            .repos
            .categories
            .add(form.to_category(Utc::now()))
            .await?;
        tracing::info!(category_id = category.id, slug = %category.slug, "Blog category created");
        Ok(category)
    }

    pub async fn update_category(
        &self,
        id: i32,
        form: &BlogCategoryForm,
    ) -> Result<BlogCategory, DomainError> {
        form.validate()?;
        let mut category = self
            .repos
            .categories
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(BlogCategory::NAME, id))?;
        form.apply_to(&mut category);
        Ok(self.repos.categories.update(category).await?)
    }

    /// Deletes the category; its posts become uncategorised.
    pub async fn delete_category(&self, id: i32) -> Result<bool, DomainError> {
        let Some(category) = self.repos.categories.get_by_id(id).await? else {
            return Ok(false);
        };

        let posts = self
            .repos
            .posts
            .list(
                Some(Filter::eq(BlogPostField::CategoryId, id)),
                OrderBy::asc(BlogPostField::Id),
                None,
            )
            .await?;
        for mut post in posts {
            post.category_id = None;
            self.repos.posts.update(post).await?;
        }

        self.repos.categories.delete(category).await?;
        tracing::info!(category_id = id, "Blog category deleted");
        Ok(true)
    }

    // --- comments ---

    pub async fn post_comments(
        &self,
        post_id: i32,
        approved_only: bool,
    ) -> Result<Vec<CommentThread>, DomainError> {
        let filter = Filter::all_of([
            Some(Filter::eq(BlogCommentField::PostId, post_id)),
            approved_only.then(|| Filter::eq(BlogCommentField::IsApproved, true)),
        ]);
        let comments = self
            .repos
            .comments
            .list(filter, OrderBy::asc(BlogCommentField::CreatedAt), None)
            .await?;

        // Oldest-first keeps replies chronological; threads are shown newest first.
        let mut threads = CommentThread::build(comments);
        threads.reverse();
        Ok(threads)
    }

    pub async fn all_comments(&self, approved_only: bool) -> Result<Vec<BlogComment>, DomainError> {
        let filter = approved_only.then(|| Filter::eq(BlogCommentField::IsApproved, true));
        Ok(self
            .repos
            .comments
            .list(filter, OrderBy::desc(BlogCommentField::CreatedAt), None)
            .await?)
    }

    /// Comments waiting for moderation, newest first.
    pub async fn pending_comments(&self) -> Result<Vec<BlogComment>, DomainError> {
        Ok(self
            .repos
            .comments
            .list(
                Some(Filter::eq(BlogCommentField::IsApproved, false)),
                OrderBy::desc(BlogCommentField::CreatedAt),
                None,
            )
            .await?)
    }

    pub async fn pending_comment_count(&self) -> Result<u64, DomainError> {
        Ok(self
            .repos
            .comments
            .count(Some(Filter::eq(BlogCommentField::IsApproved, false)))
            .await?)
    }

    /// Stores a visitor comment. It stays hidden until approved.
    pub async fn add_comment(&self, form: &BlogCommentForm) -> Result<BlogComment, DomainError> {
        form.validate()?;

        let post = self.repos.posts.get_by_id(form.post_id).await?;
        if !post.is_some_and(|post| post.is_published) {
            return Err(DomainError::invalid("Post does not exist"));
        }

        if let Some(parent_id) = form.parent_comment_id {
            let parent = self
                .repos
                .comments
                .get_by_id(parent_id)
                .await?
                .ok_or_else(|| DomainError::invalid("Parent comment does not exist"))?;
            if parent.post_id != form.post_id {
                return Err(DomainError::invalid(
                    "Reply must belong to the same post as its parent",
                ));
            }
            if parent.parent_comment_id.is_some() {
                return Err(DomainError::invalid("Replies cannot be nested"));
            }
        }

        let comment = self
            .repos
            .comments
            .add(form.to_comment(Utc::now()))
            .await?;
        tracing::info!(
            comment_id = comment.id,
            post_id = comment.post_id,
            "Comment submitted for moderation"
        );
        Ok(comment)
    }

    pub async fn approve_comment(&self, id: i32) -> Result<bool, DomainError> {
        let Some(mut comment) = self.repos.comments.get_by_id(id).await? else {
            return Ok(false);
        };
        if !comment.is_approved {
            comment.is_approved = true;
            self.repos.comments.update(comment).await?;
            tracing::info!(comment_id = id, "Comment approved");
        }
        Ok(true)
    }

    /// Deletes a comment and its replies.
    pub async fn delete_comment(&self, id: i32) -> Result<bool, DomainError> {
        let Some(comment) = self.repos.comments.get_by_id(id).await? else {
            return Ok(false);
        };

        let replies = self
            .repos
            .comments
            .list(
                Some(Filter::eq(BlogCommentField::ParentCommentId, id)),
                OrderBy::asc(BlogCommentField::Id),
                None,
            )
            .await?;
        for reply in replies {
            self.repos.comments.delete(reply).await?;
        }

        self.repos.comments.delete(comment).await?;
        tracing::info!(comment_id = id, "Comment deleted");
        Ok(true)
    }

    // --- tags ---

    pub async fn all_tags(&self) -> Result<Vec<BlogTag>, DomainError> {
        Ok(self.repos.tags.get_all().await?)
    }

    pub async fn tag_by_slug(&self, slug: &str) -> Result<Option<BlogTag>, DomainError> {
        let slug = require_slug(slug)?;
        Ok(self
            .repos
            .tags
            .first_or_default(Filter::eq(BlogTagField::Slug, slug))
            .await?)
    }

    pub async fn create_tag(&self, form: &BlogTagForm) -> Result<BlogTag, DomainError> {
        form.validate()?;
        let tag = self.repos.tags.add(form.to_tag(Utc::now())).await?;
        tracing::info!(tag_id = tag.id, slug = %tag.slug, "Blog tag created");
        Ok(tag)
    }

    // --- helpers ---

    async fn details(&self, post: BlogPost) -> Result<PostDetails, DomainError> {
        let category = match post.category_id {
            Some(id) => self.repos.categories.get_by_id(id).await?,
            None => None,
        };
        let tags = self.tags_of(&[post.id]).await?.1;
        let comments = self.post_comments(post.id, true).await?;
        Ok(PostDetails {
            post,
            category,
            tags,
            comments,
        })
    }

    /// Links and tags for a set of posts.
    async fn tags_of(
        &self,
        post_ids: &[i32],
    ) -> Result<(Vec<BlogPostTag>, Vec<BlogTag>), DomainError> {
        let links = self
            .repos
            .post_tags
            .list(
                Some(Filter::is_in(BlogPostTagField::PostId, post_ids.iter().copied())),
                OrderBy::asc(BlogPostTagField::Id),
                None,
            )
            .await?;
        if links.is_empty() {
            return Ok((links, Vec::new()));
        }

        let tag_ids: Vec<i32> = links.iter().map(|link| link.tag_id).collect();
        let tags = self
            .repos
            .tags
            .list(
                Some(Filter::is_in(BlogTagField::Id, dedup_ids(&tag_ids))),
                OrderBy::asc(BlogTagField::Name),
                None,
            )
            .await?;
        Ok((links, tags))
    }

    /// Attaches categories and tags to a list of posts with one query each.
    async fn summarize(&self, posts: Vec<BlogPost>) -> Result<Vec<PostSummary>, DomainError> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let category_ids: Vec<i32> = posts.iter().filter_map(|post| post.category_id).collect();
        let categories = if category_ids.is_empty() {
            Vec::new()
        } else {
            self.repos
                .categories
                .list(
                    Some(Filter::is_in(BlogCategoryField::Id, dedup_ids(&category_ids))),
                    OrderBy::asc(BlogCategoryField::Id),
                    None,
                )
                .await?
        };

        let post_ids: Vec<i32> = posts.iter().map(|post| post.id).collect();
        let (links, tags) = self.tags_of(&post_ids).await?;

        Ok(posts
            .into_iter()
            .map(|post| {
                let category = post
                    .category_id
                    .and_then(|id| categories.iter().find(|c| c.id == id).cloned());
                let tags = tags
                    .iter()
                    .filter(|tag| {
                        links
                            .iter()
                            .any(|link| link.post_id == post.id && link.tag_id == tag.id)
                    })
                    .cloned()
                    .collect();
                PostSummary {
                    post,
                    category,
                    tags,
                }
            })
            .collect())
    }

    async fn summarize_page(&self, page: Page<BlogPost>) -> Result<Page<PostSummary>, DomainError> {
        let Page {
            items,
            total_count,
            page_number,
            page_size,
        } = page;
        Ok(Page {
            items: self.summarize(items).await?,
            total_count,
            page_number,
            page_size,
        })
    }

    async fn ensure_category(&self, category_id: Option<i32>) -> Result<(), DomainError> {
        if let Some(id) = category_id {
            if self.repos.categories.get_by_id(id).await?.is_none() {
                return Err(DomainError::invalid("Category does not exist"));
            }
        }
        Ok(())
    }

    async fn ensure_tags(&self, tag_ids: &[i32]) -> Result<(), DomainError> {
        if tag_ids.is_empty() {
            return Ok(());
        }
        let found = self
            .repos
            .tags
            .count(Some(Filter::is_in(BlogTagField::Id, tag_ids.iter().copied())))
            .await?;
        if found != tag_ids.len() as u64 {
            return Err(DomainError::invalid("One or more tags do not exist"));
        }
        Ok(())
    }

    /// Makes the post's tag links equal to `tag_ids`.
    async fn sync_tags(&self, post_id: i32, tag_ids: &[i32]) -> Result<(), DomainError> {
        let existing = self
            .repos
            .post_tags
            .list(
                Some(Filter::eq(BlogPostTagField::PostId, post_id)),
                OrderBy::asc(BlogPostTagField::Id),
                None,
            )
            .await?;

        for link in &existing {
            if !tag_ids.contains(&link.tag_id) {
                self.repos.post_tags.delete(link.clone()).await?;
            }
        }
        for &tag_id in tag_ids {
            if !existing.iter().any(|link| link.tag_id == tag_id) {
                self.repos
                    .post_tags
                    .add(BlogPostTag {
                        id: 0,
                        post_id,
                        tag_id,
                    })
                    .await?;
            }
        }
        Ok(())
    }
}
