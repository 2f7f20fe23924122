//! Provider entity model
//!
//! This module contains the SeaORM entity model for the providers table,
//! the organizations that own resources and listings.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

/// Provider entity representing an organization offering services
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "providers")]
pub struct Model {
    /// Unique identifier for the provider (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name of the provider
    pub name: String,

    /// Contact email address (optional)
    pub contact_email: Option<String>,

    /// Contact phone number (optional)
    pub phone: Option<String>,

    /// Two-letter state code (optional)
    pub state: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
