//! # Resource Directory Handlers

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Json,
};
use serde::Deserialize;

use crate::error::{ApiError, validation_error};
use crate::handlers::types::ResourceItemDto;
use crate::models::ResourceType;
use crate::repositories::{ResourceFilter, ResourceRepository};
use crate::server::AppState;

/// Query parameters for the resource directory
#[derive(Debug, Default, Deserialize)]
pub struct ResourcesQuery {
    /// Category name (Housing, Benefits, Counseling, Employment) or ordinal
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    /// Two-letter state code
    pub state: Option<String>,
    /// Case-sensitive text matched against title and description
    pub q: Option<String>,
}

impl ResourcesQuery {
    /// Convert raw parameters into a repository filter
    pub fn into_filter(self) -> Result<ResourceFilter, ApiError> {
        let resource_type = match self.resource_type.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<ResourceType>().map_err(|err| {
                validation_error(
                    "Invalid type",
                    serde_json::json!({
                        "type": format!(
                            "{}; expected one of Housing, Benefits, Counseling, Employment",
                            err
                        )
                    }),
                )
            })?),
        };

        Ok(ResourceFilter {
            resource_type,
            state: non_blank(self.state),
            text: non_blank(self.q),
        })
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Search the resource directory
#[utoipa::path(
    get,
    path = "/api/resources",
    params(
        ("type" = Option<ResourceType>, Query, description = "Filter by category"),
        ("state" = Option<String>, Query, description = "Filter by exact state code"),
        ("q" = Option<String>, Query, description = "Case-sensitive substring of title or description")
    ),
    responses(
        (status = 200, description = "Matching resources ordered by category, title and id", body = [ResourceItemDto]),
        (status = 400, description = "Invalid query parameters", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "resources"
)]
pub async fn list_resources(
    State(state): State<AppState>,
    query: Result<Query<ResourcesQuery>, QueryRejection>,
) -> Result<Json<Vec<ResourceItemDto>>, ApiError> {
    let Query(params) = query?;
    let filter = params.into_filter()?;

    let repo = ResourceRepository::new(state.db.clone());
    let rows = repo.search(&filter).await?;

    Ok(Json(rows.into_iter().map(ResourceItemDto::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_treated_as_absent() {
        let filter = ResourcesQuery {
            resource_type: Some(String::new()),
            state: Some("  ".to_string()),
            q: Some(String::new()),
        }
        .into_filter()
        .unwrap();

        assert_eq!(filter, ResourceFilter::default());
    }

    #[test]
    fn type_accepts_names_and_ordinals() {
        let by_name = ResourcesQuery {
            resource_type: Some("Counseling".to_string()),
            ..Default::default()
        }
        .into_filter()
        .unwrap();
        assert_eq!(by_name.resource_type, Some(ResourceType::Counseling));

        let by_ordinal = ResourcesQuery {
            resource_type: Some("0".to_string()),
            ..Default::default()
        }
        .into_filter()
        .unwrap();
        assert_eq!(by_ordinal.resource_type, Some(ResourceType::Housing));
    }

    #[test]
    fn unknown_type_is_a_validation_error() {
        let err = ResourcesQuery {
            resource_type: Some("Shelter".to_string()),
            ..Default::default()
        }
        .into_filter()
        .unwrap_err();

        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.code, Box::from("VALIDATION_FAILED"));
    }

    #[test]
    fn text_is_kept_verbatim() {
        let filter = ResourcesQuery {
            q: Some(" PTSD".to_string()),
            ..Default::default()
        }
        .into_filter()
        .unwrap();
        assert_eq!(filter.text.as_deref(), Some(" PTSD"));
    }
}
