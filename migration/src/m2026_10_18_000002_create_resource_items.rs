//! Migration to create the resource_items table.
//!
//! Resource items are directory entries (housing, benefits, counseling,
//! employment). The category is stored as its ordinal so ordering by it
//! follows declaration order.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResourceItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResourceItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ResourceItems::Type).integer().not_null())
                    .col(ColumnDef::new(ResourceItems::Title).text().not_null())
                    .col(ColumnDef::new(ResourceItems::Description).text().null())
                    .col(ColumnDef::new(ResourceItems::State).text().null())
                    .col(ColumnDef::new(ResourceItems::ProviderId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resource_items_provider_id")
                            .from(ResourceItems::Table, ResourceItems::ProviderId)
                            .to(Providers::Table, Providers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_resource_items_provider_id")
                    .table(ResourceItems::Table)
                    .col(ResourceItems::ProviderId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_resource_items_provider_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ResourceItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ResourceItems {
    Table,
    Id,
    Type,
    Title,
    Description,
    State,
    ProviderId,
}

#[derive(DeriveIden)]
enum Providers {
    Table,
    Id,
}
