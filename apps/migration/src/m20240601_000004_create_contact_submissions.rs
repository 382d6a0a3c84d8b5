use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactSubmissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactSubmissions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ContactSubmissions::FullName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactSubmissions::Email)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContactSubmissions::Phone).string_len(20))
                    .col(ColumnDef::new(ContactSubmissions::Company).string_len(100))
                    .col(
                        ColumnDef::new(ContactSubmissions::Subject)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContactSubmissions::Message).text().not_null())
                    .col(
                        ColumnDef::new(ContactSubmissions::SubmittedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactSubmissions::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ContactSubmissions::ReadAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(ContactSubmissions::IsReplied)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ContactSubmissions::RepliedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(ContactSubmissions::IpAddress).string_len(100))
                    .col(ColumnDef::new(ContactSubmissions::UserAgent).string_len(500))
                    .col(ColumnDef::new(ContactSubmissions::AdminNotes).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contact_submissions_submitted_at")
                    .table(ContactSubmissions::Table)
                    .col(ContactSubmissions::SubmittedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ContactSubmissions::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum ContactSubmissions {
    Table,
    Id,
    FullName,
    Email,
    Phone,
    Company,
    Subject,
    Message,
    SubmittedAt,
    IsRead,
    ReadAt,
    IsReplied,
    RepliedAt,
    IpAddress,
    UserAgent,
    AdminNotes,
}
