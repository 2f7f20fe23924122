//! Sample data seeding
//!
//! Inserts one provider with two resources and one listing. Seeding only
//! happens while the providers table is empty, and all rows are written in
//! a single transaction.

use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, TransactionTrait};
use std::sync::Arc;

use crate::models::listing::DEFAULT_LISTING_STATE;
use crate::models::resource_item::ResourceType;
use crate::models::{listing, provider, resource_item};
use crate::repositories::ProviderRepository;

/// Result of a seeding attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Sample rows were inserted
    Seeded,
    /// The store already held providers; nothing was written
    Skipped,
}

/// Seeds the sample provider, resources and listing into an empty store.
///
/// Running this against a store that already has at least one provider is a
/// no-op, so it is safe to call on every startup.
pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<SeedOutcome> {
    let repo = ProviderRepository::new(Arc::new(db.clone()));

    if !repo.is_empty().await.context("Failed to count providers")? {
        log::info!("Providers already present, skipping sample seed");
        return Ok(SeedOutcome::Skipped);
    }

    let txn = db.begin().await.context("Failed to open seed transaction")?;

    let provider = provider::ActiveModel {
        name: Set("Vet Homes GA".to_string()),
        contact_email: Set(Some("contact@vethomes.org".to_string())),
        phone: Set(None),
        state: Set(Some("GA".to_string())),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .context("Failed to insert sample provider")?;

    let resources = [
        (
            ResourceType::Housing,
            "Transitional Housing",
            Some("3–6 months program"),
        ),
        (ResourceType::Counseling, "PTSD Support Group", None),
    ];

    for (resource_type, title, description) in resources {
        resource_item::ActiveModel {
            resource_type: Set(resource_type),
            title: Set(title.to_string()),
            description: Set(description.map(str::to_string)),
            state: Set(Some("GA".to_string())),
            provider_id: Set(Some(provider.id)),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .with_context(|| format!("Failed to insert sample resource '{}'", title))?;
    }

    listing::ActiveModel {
        provider_id: Set(provider.id),
        title: Set("1BR Veteran Unit - Atlanta".to_string()),
        description: Set(None),
        state: Set(DEFAULT_LISTING_STATE.to_string()),
        monthly_cost: Set(Some(850.0)),
        pets_allowed: Set(true),
        accessible: Set(true),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .context("Failed to insert sample listing")?;

    txn.commit().await.context("Failed to commit seed transaction")?;

    log::info!("Seeded sample data for provider '{}'", provider.name);
    Ok(SeedOutcome::Seeded)
}
