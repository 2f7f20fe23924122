//! Migration to create the listings table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Listings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Listings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Listings::ProviderId).integer().not_null())
                    .col(ColumnDef::new(Listings::Title).text().not_null())
                    .col(ColumnDef::new(Listings::Description).text().null())
                    .col(
                        ColumnDef::new(Listings::State)
                            .text()
                            .not_null()
                            .default("GA"),
                    )
                    .col(ColumnDef::new(Listings::MonthlyCost).double().null())
                    .col(
                        ColumnDef::new(Listings::PetsAllowed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Listings::Accessible)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listings_provider_id")
                            .from(Listings::Table, Listings::ProviderId)
                            .to(Providers::Table, Providers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_listings_provider_id")
                    .table(Listings::Table)
                    .col(Listings::ProviderId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_listings_provider_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Listings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Listings {
    Table,
    Id,
    ProviderId,
    Title,
    Description,
    State,
    MonthlyCost,
    PetsAllowed,
    Accessible,
}

#[derive(DeriveIden)]
enum Providers {
    Table,
    Id,
}
