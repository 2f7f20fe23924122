//! Listing entity model
//!
//! This module contains the SeaORM entity model for the listings table,
//! which stores rentable housing units offered by providers.

use super::provider::Entity as Provider;
use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

/// State code assigned to listings created without one
pub const DEFAULT_LISTING_STATE: &str = "GA";

/// Listing entity representing a rentable unit
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "listings")]
pub struct Model {
    /// Unique identifier for the listing (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Owning provider (required)
    pub provider_id: i32,

    pub title: String,

    pub description: Option<String>,

    /// Two-letter state code
    pub state: String,

    /// Monthly cost in dollars; `None` when not published
    pub monthly_cost: Option<f64>,

    pub pets_allowed: bool,

    pub accessible: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Provider",
        from = "Column::ProviderId",
        to = "super::provider::Column::Id"
    )]
    Provider,
}

impl Related<Provider> for Entity {
    fn to() -> RelationDef {
        Relation::Provider.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
