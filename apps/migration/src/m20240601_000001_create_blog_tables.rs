use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogCategories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogCategories::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(BlogCategories::Slug)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(BlogCategories::Description).string_len(500))
                    .col(ColumnDef::new(BlogCategories::Color).string_len(20))
                    .col(
                        ColumnDef::new(BlogCategories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlogTags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogTags::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogTags::Name).string_len(50).not_null())
                    .col(
                        ColumnDef::new(BlogTags::Slug)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(BlogTags::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogPosts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogPosts::Title).string_len(200).not_null())
                    .col(
                        ColumnDef::new(BlogPosts::Slug)
                            .string_len(200)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(BlogPosts::Summary).string_len(500).not_null())
                    .col(ColumnDef::new(BlogPosts::Content).text().not_null())
                    .col(ColumnDef::new(BlogPosts::FeaturedImage).string_len(500))
                    .col(
                        ColumnDef::new(BlogPosts::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(BlogPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BlogPosts::PublishedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(BlogPosts::UpdatedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(BlogPosts::Author).string_len(100).not_null())
                    .col(
                        ColumnDef::new(BlogPosts::ViewCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(BlogPosts::MetaTitle).string_len(200))
                    .col(ColumnDef::new(BlogPosts::MetaDescription).string_len(500))
                    .col(ColumnDef::new(BlogPosts::MetaKeywords).string_len(200))
                    .col(ColumnDef::new(BlogPosts::CategoryId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_posts_category")
                            .from(BlogPosts::Table, BlogPosts::CategoryId)
                            .to(BlogCategories::Table, BlogCategories::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blog_posts_published")
                    .table(BlogPosts::Table)
                    .col(BlogPosts::IsPublished)
                    .col(BlogPosts::PublishedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlogComments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogComments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogComments::PostId).integer().not_null())
                    .col(
                        ColumnDef::new(BlogComments::AuthorName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BlogComments::AuthorEmail)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(BlogComments::AuthorWebsite).string_len(200))
                    .col(ColumnDef::new(BlogComments::Content).text().not_null())
                    .col(
                        ColumnDef::new(BlogComments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BlogComments::IsApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(BlogComments::ParentCommentId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_comments_post")
                            .from(BlogComments::Table, BlogComments::PostId)
                            .to(BlogPosts::Table, BlogPosts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_comments_parent")
                            .from(BlogComments::Table, BlogComments::ParentCommentId)
                            .to(BlogComments::Table, BlogComments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlogPostTags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogPostTags::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogPostTags::PostId).integer().not_null())
                    .col(ColumnDef::new(BlogPostTags::TagId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_post_tags_post")
                            .from(BlogPostTags::Table, BlogPostTags::PostId)
                            .to(BlogPosts::Table, BlogPosts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_post_tags_tag")
                            .from(BlogPostTags::Table, BlogPostTags::TagId)
                            .to(BlogTags::Table, BlogTags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blog_post_tags_unique")
                    .table(BlogPostTags::Table)
                    .col(BlogPostTags::PostId)
                    .col(BlogPostTags::TagId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            BlogPostTags::Table.into_iden(),
            BlogComments::Table.into_iden(),
            BlogPosts::Table.into_iden(),
            BlogTags::Table.into_iden(),
            BlogCategories::Table.into_iden(),
        ] {
            manager
                .drop_table(Table::drop().table(table).if_exists().to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum BlogCategories {
    Table,
    Id,
    Name,
    Slug,
    Description,
    Color,
    CreatedAt,
}

#[derive(DeriveIden)]
enum BlogTags {
    Table,
    Id,
    Name,
    Slug,
    CreatedAt,
}

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Id,
    Title,
    Slug,
    Summary,
    Content,
    FeaturedImage,
    IsPublished,
    CreatedAt,
    PublishedAt,
    UpdatedAt,
    Author,
    ViewCount,
    MetaTitle,
    MetaDescription,
    MetaKeywords,
    CategoryId,
}

#[derive(DeriveIden)]
enum BlogComments {
    Table,
    Id,
    PostId,
    AuthorName,
    AuthorEmail,
    AuthorWebsite,
    Content,
    CreatedAt,
    IsApproved,
    ParentCommentId,
}

#[derive(DeriveIden)]
enum BlogPostTags {
    Table,
    Id,
    PostId,
    TagId,
}
