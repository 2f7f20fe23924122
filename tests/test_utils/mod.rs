//! Test utilities for database testing.
//!
//! This module provides utilities for setting up in-memory SQLite databases
//! with migrations applied, optionally preloaded with the sample seed.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use vetnest_api::config::AppConfig;
use vetnest_api::db::{apply_migrations, init_pool};
use vetnest_api::models::{ResourceType, listing, provider, resource_item};
use vetnest_api::seeds::seed_sample_data;

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let config = AppConfig {
        database_url: "sqlite::memory:".to_string(),
        ..Default::default()
    };

    let db = init_pool(&config).await?;
    apply_migrations(&db).await?;

    Ok(db)
}

/// Sets up an in-memory database containing the sample seed.
#[allow(dead_code)]
pub async fn seeded_db() -> Result<DatabaseConnection> {
    let db = setup_test_db().await?;
    seed_sample_data(&db).await?;
    Ok(db)
}

/// Inserts a provider row directly for testing.
#[allow(dead_code)]
pub async fn insert_provider(db: &DatabaseConnection, name: &str) -> Result<provider::Model> {
    let model = provider::ActiveModel {
        name: Set(name.to_string()),
        contact_email: Set(None),
        phone: Set(None),
        state: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model)
}

/// Inserts a resource item directly for testing.
#[allow(dead_code)]
pub async fn insert_resource(
    db: &DatabaseConnection,
    resource_type: ResourceType,
    title: &str,
    description: Option<&str>,
    state: Option<&str>,
    provider_id: Option<i32>,
) -> Result<resource_item::Model> {
    let model = resource_item::ActiveModel {
        resource_type: Set(resource_type),
        title: Set(title.to_string()),
        description: Set(description.map(str::to_string)),
        state: Set(state.map(str::to_string)),
        provider_id: Set(provider_id),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model)
}

/// Inserts a listing directly for testing.
#[allow(dead_code)]
pub async fn insert_listing(
    db: &DatabaseConnection,
    provider_id: i32,
    title: &str,
    state: &str,
    monthly_cost: Option<f64>,
    pets_allowed: bool,
    accessible: bool,
) -> Result<listing::Model> {
    let model = listing::ActiveModel {
        provider_id: Set(provider_id),
        title: Set(title.to_string()),
        description: Set(None),
        state: Set(state.to_string()),
        monthly_cost: Set(monthly_cost),
        pets_allowed: Set(pets_allowed),
        accessible: Set(accessible),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model)
}
