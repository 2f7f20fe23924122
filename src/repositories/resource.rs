//! # Resource Repository
//!
//! Read queries over the resource directory. Every provided filter narrows
//! the result conjunctively; absent filters leave the collection untouched.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::models::provider;
use crate::models::resource_item::{self, Column, Entity as ResourceItem, ResourceType};

/// A resource item together with its owning provider, if any
pub type ResourceWithProvider = (resource_item::Model, Option<provider::Model>);

/// Optional filters for resource searches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceFilter {
    /// Exact category match
    pub resource_type: Option<ResourceType>,
    /// Exact state code match
    pub state: Option<String>,
    /// Case-sensitive substring of the title or description
    pub text: Option<String>,
}

impl ResourceFilter {
    /// Returns true when `item` satisfies the free-text predicate.
    ///
    /// Matching is ordinal and case-sensitive; a missing description is
    /// treated as the empty string.
    pub fn matches_text(&self, item: &resource_item::Model) -> bool {
        match self.text.as_deref() {
            None => true,
            Some(needle) => {
                item.title.contains(needle)
                    || item.description.as_deref().unwrap_or_default().contains(needle)
            }
        }
    }
}

/// Repository for resource directory queries
#[derive(Debug, Clone)]
pub struct ResourceRepository {
    db: DatabaseConnection,
}

impl ResourceRepository {
    /// Create a new ResourceRepository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Search resources joined with their provider.
    ///
    /// Category and state are pushed into the query. The text predicate runs
    /// in process because SQLite's `LIKE` folds ASCII case. Results are
    /// ordered by category ordinal, then title (byte-wise), then id.
    pub async fn search(
        &self,
        filter: &ResourceFilter,
    ) -> Result<Vec<ResourceWithProvider>, DbErr> {
        let mut query = ResourceItem::find().find_also_related(provider::Entity);

        if let Some(resource_type) = filter.resource_type {
            query = query.filter(Column::ResourceType.eq(resource_type));
        }

        if let Some(state) = &filter.state {
            query = query.filter(Column::State.eq(state.as_str()));
        }

        let mut rows: Vec<ResourceWithProvider> = query
            .all(&self.db)
            .await?
            .into_iter()
            .filter(|(item, _)| filter.matches_text(item))
            .collect();

        rows.sort_by(|(a, _), (b, _)| {
            a.resource_type
                .cmp(&b.resource_type)
                .then_with(|| a.title.as_bytes().cmp(b.title.as_bytes()))
                .then_with(|| a.id.cmp(&b.id))
        });

        tracing::debug!(
            resource_type = ?filter.resource_type,
            state = ?filter.state,
            has_text = filter.text.is_some(),
            results = rows.len(),
            "Resource search completed"
        );

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, description: Option<&str>) -> resource_item::Model {
        resource_item::Model {
            id: 1,
            resource_type: ResourceType::Housing,
            title: title.to_string(),
            description: description.map(str::to_string),
            state: Some("GA".to_string()),
            provider_id: None,
        }
    }

    #[test]
    fn text_filter_matches_title_or_description() {
        let filter = ResourceFilter {
            text: Some("months".to_string()),
            ..Default::default()
        };

        assert!(filter.matches_text(&item("Transitional Housing", Some("3–6 months program"))));
        assert!(filter.matches_text(&item("Six months of rent help", None)));
        assert!(!filter.matches_text(&item("PTSD Support Group", None)));
    }

    #[test]
    fn text_filter_is_case_sensitive() {
        let filter = ResourceFilter {
            text: Some("ptsd".to_string()),
            ..Default::default()
        };

        assert!(!filter.matches_text(&item("PTSD Support Group", None)));
    }

    #[test]
    fn absent_text_matches_everything() {
        let filter = ResourceFilter::default();
        assert!(filter.matches_text(&item("Anything", None)));
    }
}
