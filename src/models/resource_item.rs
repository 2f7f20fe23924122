//! ResourceItem entity model
//!
//! This module contains the SeaORM entity model for the resource_items table,
//! which backs the public resource directory.

use super::provider::Entity as Provider;
use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Directory category of a resource item.
///
/// Stored as its ordinal, so ordering by the column follows declaration order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ResourceType {
    #[sea_orm(num_value = 0)]
    Housing,
    #[sea_orm(num_value = 1)]
    Benefits,
    #[sea_orm(num_value = 2)]
    Counseling,
    #[sea_orm(num_value = 3)]
    Employment,
}

impl ResourceType {
    /// Canonical name as exposed over the API
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Housing => "Housing",
            ResourceType::Benefits => "Benefits",
            ResourceType::Counseling => "Counseling",
            ResourceType::Employment => "Employment",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category name or ordinal is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource type '{0}'")]
pub struct UnknownResourceType(pub String);

impl std::str::FromStr for ResourceType {
    type Err = UnknownResourceType;

    /// Accepts the category name (case-insensitive) or its ordinal.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let parsed = match trimmed.to_ascii_lowercase().as_str() {
            "housing" | "0" => ResourceType::Housing,
            "benefits" | "1" => ResourceType::Benefits,
            "counseling" | "2" => ResourceType::Counseling,
            "employment" | "3" => ResourceType::Employment,
            _ => return Err(UnknownResourceType(trimmed.to_string())),
        };
        Ok(parsed)
    }
}

/// ResourceItem entity representing one directory entry
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resource_items")]
pub struct Model {
    /// Unique identifier for the resource (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Directory category
    #[sea_orm(column_name = "type")]
    pub resource_type: ResourceType,

    pub title: String,

    pub description: Option<String>,

    /// Two-letter state code (optional)
    pub state: Option<String>,

    /// Owning provider, if any
    pub provider_id: Option<i32>,
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(ResourceType::from_str("Housing").unwrap(), ResourceType::Housing);
        assert_eq!(ResourceType::from_str("counseling").unwrap(), ResourceType::Counseling);
        assert_eq!(ResourceType::from_str(" EMPLOYMENT ").unwrap(), ResourceType::Employment);
    }

    #[test]
    fn parses_ordinals() {
        assert_eq!(ResourceType::from_str("1").unwrap(), ResourceType::Benefits);
        assert!(ResourceType::from_str("4").is_err());
    }

    #[test]
    fn rejects_unknown_names() {
        let err = ResourceType::from_str("Shelter").unwrap_err();
        assert_eq!(err, UnknownResourceType("Shelter".to_string()));
    }

    #[test]
    fn ordering_follows_declaration_order() {
        let mut types = vec![
            ResourceType::Employment,
            ResourceType::Housing,
            ResourceType::Counseling,
            ResourceType::Benefits,
        ];
        types.sort();
        assert_eq!(
            types,
            vec![
                ResourceType::Housing,
                ResourceType::Benefits,
                ResourceType::Counseling,
                ResourceType::Employment,
            ]
        );
    }
}
