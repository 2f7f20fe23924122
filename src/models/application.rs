//! Application entity model
//!
//! This module contains the SeaORM entity model for the applications table.
//! Rows are append-only and `submitted_utc` is always stamped by the service.

use super::listing::Entity as Listing;
use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Application entity representing a request to rent a listing
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    /// Unique identifier for the application (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Listing the applicant is applying for
    pub listing_id: i32,

    pub full_name: String,

    pub email: String,

    pub phone: Option<String>,

    /// Applicant's state code (optional)
    pub state: Option<String>,

    pub notes: Option<String>,

    /// Moment the service accepted the application
    pub submitted_utc: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Listing",
        from = "Column::ListingId",
        to = "super::listing::Column::Id"
    )]
    Listing,
}

impl Related<Listing> for Entity {
    fn to() -> RelationDef {
        Relation::Listing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
