//! Migration to create the providers table.
//!
//! Providers are the organizations that own resource directory entries and
//! rentable listings.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Providers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Providers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Providers::Name).text().not_null())
                    .col(ColumnDef::new(Providers::ContactEmail).text().null())
                    .col(ColumnDef::new(Providers::Phone).text().null())
                    .col(ColumnDef::new(Providers::State).text().null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Providers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Providers {
    Table,
    Id,
    Name,
    ContactEmail,
    Phone,
    State,
}
