//! # Listing Repository
//!
//! Read queries over rentable listings.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, sea_query::NullOrdering,
};

use crate::models::listing::{self, Column, Entity as Listing};
use crate::models::provider;

/// A listing together with its owning provider
pub type ListingWithProvider = (listing::Model, Option<provider::Model>);

/// Optional filters for listing searches
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    /// Exact state code match
    pub state: Option<String>,
    /// Pets-allowed flag must equal this value
    pub pets_allowed: Option<bool>,
    /// Accessible flag must equal this value
    pub accessible: Option<bool>,
    /// Inclusive upper bound on monthly cost; listings without a cost are excluded
    pub max_monthly_cost: Option<f64>,
}

/// Repository for listing queries
#[derive(Debug, Clone)]
pub struct ListingRepository {
    db: DatabaseConnection,
}

impl ListingRepository {
    /// Create a new ListingRepository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Search listings joined with their provider.
    ///
    /// Ordered by monthly cost ascending with uncosted listings first, then by id.
    pub async fn search(
        &self,
        filter: &ListingFilter,
    ) -> Result<Vec<ListingWithProvider>, DbErr> {
        let mut query = Listing::find().find_also_related(provider::Entity);

        if let Some(state) = &filter.state {
            query = query.filter(Column::State.eq(state.as_str()));
        }

        if let Some(pets_allowed) = filter.pets_allowed {
            query = query.filter(Column::PetsAllowed.eq(pets_allowed));
        }

        if let Some(accessible) = filter.accessible {
            query = query.filter(Column::Accessible.eq(accessible));
        }

        if let Some(max_cost) = filter.max_monthly_cost {
            query = query
                .filter(Column::MonthlyCost.is_not_null())
                .filter(Column::MonthlyCost.lte(max_cost));
        }

        let rows = query
            .order_by_with_nulls(Column::MonthlyCost, Order::Asc, NullOrdering::First)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        tracing::debug!(
            state = ?filter.state,
            pets_allowed = ?filter.pets_allowed,
            accessible = ?filter.accessible,
            max_monthly_cost = ?filter.max_monthly_cost,
            results = rows.len(),
            "Listing search completed"
        );

        Ok(rows)
    }

    /// Returns true when a listing with `id` exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = Listing::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }
}
