use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioCategories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PortfolioCategories::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioCategories::Slug)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PortfolioCategories::Description).string_len(500))
                    .col(ColumnDef::new(PortfolioCategories::Icon).string_len(100))
                    .col(
                        ColumnDef::new(PortfolioCategories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Portfolios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Portfolios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Portfolios::Title).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Portfolios::Slug)
                            .string_len(200)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Portfolios::Description)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Portfolios::FullDescription).text())
                    .col(
                        ColumnDef::new(Portfolios::FeaturedImage)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Portfolios::ClientName).string_len(200))
                    .col(ColumnDef::new(Portfolios::ClientWebsite).string_len(200))
                    .col(ColumnDef::new(Portfolios::ProjectUrl).string_len(200))
                    .col(ColumnDef::new(Portfolios::CompletedDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Portfolios::Technologies).string_len(500))
                    .col(
                        ColumnDef::new(Portfolios::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Portfolios::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Portfolios::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Portfolios::UpdatedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Portfolios::ViewCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Portfolios::CategoryId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolios_category")
                            .from(Portfolios::Table, Portfolios::CategoryId)
                            .to(PortfolioCategories::Table, PortfolioCategories::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Portfolios::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(PortfolioCategories::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum PortfolioCategories {
    Table,
    Id,
    Name,
    Slug,
    Description,
    Icon,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
    Title,
    Slug,
    Description,
    FullDescription,
    FeaturedImage,
    ClientName,
    ClientWebsite,
    ProjectUrl,
    CompletedDate,
    Technologies,
    IsPublished,
    IsFeatured,
    CreatedAt,
    UpdatedAt,
    ViewCount,
    CategoryId,
}
