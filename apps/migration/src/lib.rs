//! Schema migrations for the studio content database.

pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_blog_tables;
mod m20240601_000002_create_portfolio_tables;
mod m20240601_000003_create_course_tables;
mod m20240601_000004_create_contact_submissions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_blog_tables::Migration),
            Box::new(m20240601_000002_create_portfolio_tables::Migration),
            Box::new(m20240601_000003_create_course_tables::Migration),
            Box::new(m20240601_000004_create_contact_submissions::Migration),
        ]
    }
}
