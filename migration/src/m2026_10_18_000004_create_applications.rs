//! Migration to create the applications table.
//!
//! Applications are append-only; `submitted_utc` is always written by the
//! service at acceptance time.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Applications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Applications::ListingId).integer().not_null())
                    .col(ColumnDef::new(Applications::FullName).text().not_null())
                    .col(ColumnDef::new(Applications::Email).text().not_null())
                    .col(ColumnDef::new(Applications::Phone).text().null())
                    .col(ColumnDef::new(Applications::State).text().null())
                    .col(ColumnDef::new(Applications::Notes).text().null())
                    .col(
                        ColumnDef::new(Applications::SubmittedUtc)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_listing_id")
                            .from(Applications::Table, Applications::ListingId)
                            .to(Listings::Table, Listings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_applications_listing_id")
                    .table(Applications::Table)
                    .col(Applications::ListingId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_applications_listing_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Applications {
    Table,
    Id,
    ListingId,
    FullName,
    Email,
    Phone,
    State,
    Notes,
    SubmittedUtc,
}

#[derive(DeriveIden)]
enum Listings {
    Table,
    Id,
}
