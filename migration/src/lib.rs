//! Database migrations for the VetNest API.
//!
//! Each table gets its own versioned migration; applied versions are recorded
//! in the `seaql_migrations` history table so later field additions can ship
//! as new migrations.

pub use sea_orm_migration::prelude::*;

mod m2026_10_18_000001_create_providers;
mod m2026_10_18_000002_create_resource_items;
mod m2026_10_18_000003_create_listings;
mod m2026_10_18_000004_create_applications;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2026_10_18_000001_create_providers::Migration),
            Box::new(m2026_10_18_000002_create_resource_items::Migration),
            Box::new(m2026_10_18_000003_create_listings::Migration),
            Box::new(m2026_10_18_000004_create_applications::Migration),
        ]
    }
}
