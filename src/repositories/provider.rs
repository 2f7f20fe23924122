//! Provider repository for database operations
//!
//! This module provides the ProviderRepository struct which encapsulates
//! SeaORM reads against the providers table.

use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use std::sync::Arc;

use crate::models::provider::Entity as Provider;

/// Repository for provider database operations
#[derive(Debug, Clone)]
pub struct ProviderRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl ProviderRepository {
    /// Creates a new ProviderRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Counts stored providers
    pub async fn count(&self) -> Result<u64> {
        let count = Provider::find().count(&*self.db).await?;
        Ok(count)
    }

    /// Returns true when no provider has been stored yet
    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.count().await? == 0)
    }
}
