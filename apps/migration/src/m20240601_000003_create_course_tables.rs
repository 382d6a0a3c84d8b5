use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Title).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Courses::Slug)
                            .string_len(200)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Courses::Description).string_len(1000).not_null())
                    .col(ColumnDef::new(Courses::FeaturedImage).string_len(500))
                    .col(ColumnDef::new(Courses::Icon).string_len(100))
                    .col(ColumnDef::new(Courses::Price).big_integer().not_null())
                    .col(ColumnDef::new(Courses::DiscountPrice).big_integer())
                    .col(
                        ColumnDef::new(Courses::Currency)
                            .string_len(3)
                            .not_null()
                            .default("GHS"),
                    )
                    .col(ColumnDef::new(Courses::Duration).string_len(50))
                    .col(ColumnDef::new(Courses::Level).string_len(50))
                    .col(
                        ColumnDef::new(Courses::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Courses::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Courses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Courses::PublishedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Courses::UpdatedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Courses::EnrollmentCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Courses::MetaTitle).string_len(200))
                    .col(ColumnDef::new(Courses::MetaDescription).string_len(500))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CourseLessons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseLessons::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseLessons::CourseId).integer().not_null())
                    .col(ColumnDef::new(CourseLessons::Title).string_len(200).not_null())
                    .col(ColumnDef::new(CourseLessons::Slug).string_len(200).not_null())
                    .col(ColumnDef::new(CourseLessons::Description).string_len(1000))
                    .col(ColumnDef::new(CourseLessons::Content).text())
                    .col(ColumnDef::new(CourseLessons::VideoUrl).string_len(500))
                    .col(ColumnDef::new(CourseLessons::AttachmentUrl).string_len(500))
                    .col(
                        ColumnDef::new(CourseLessons::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(CourseLessons::Duration).string_len(50))
                    .col(
                        ColumnDef::new(CourseLessons::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CourseLessons::IsFree)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CourseLessons::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseLessons::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_lessons_course")
                            .from(CourseLessons::Table, CourseLessons::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_lessons_course_slug")
                    .table(CourseLessons::Table)
                    .col(CourseLessons::CourseId)
                    .col(CourseLessons::Slug)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseLessons::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Title,
    Slug,
    Description,
    FeaturedImage,
    Icon,
    Price,
    DiscountPrice,
    Currency,
    Duration,
    Level,
    IsPublished,
    IsFeatured,
    CreatedAt,
    PublishedAt,
    UpdatedAt,
    EnrollmentCount,
    MetaTitle,
    MetaDescription,
}

#[derive(DeriveIden)]
enum CourseLessons {
    Table,
    Id,
    CourseId,
    Title,
    Slug,
    Description,
    Content,
    VideoUrl,
    AttachmentUrl,
    OrderIndex,
    Duration,
    IsPublished,
    IsFree,
    CreatedAt,
    UpdatedAt,
}
