//! # Listing Handlers

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Json,
};
use serde::Deserialize;

use crate::error::{ApiError, validation_error};
use crate::handlers::resources::non_blank;
use crate::handlers::types::ListingDto;
use crate::repositories::{ListingFilter, ListingRepository};
use crate::server::AppState;

/// Query parameters for listing search
#[derive(Debug, Default, Deserialize)]
pub struct ListingsQuery {
    /// Two-letter state code
    pub state: Option<String>,
    /// `true` or `false`
    pub pets: Option<String>,
    /// `true` or `false`
    pub accessible: Option<String>,
    /// Inclusive maximum monthly cost
    #[serde(rename = "maxRent")]
    pub max_rent: Option<String>,
}

impl ListingsQuery {
    /// Convert raw parameters into a repository filter
    pub fn into_filter(self) -> Result<ListingFilter, ApiError> {
        Ok(ListingFilter {
            state: non_blank(self.state),
            pets_allowed: parse_flag("pets", self.pets.as_deref())?,
            accessible: parse_flag("accessible", self.accessible.as_deref())?,
            max_monthly_cost: parse_max_rent(self.max_rent.as_deref())?,
        })
    }
}

fn parse_flag(name: &str, raw: Option<&str>) -> Result<Option<bool>, ApiError> {
    let Some(raw) = raw.filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    if raw.eq_ignore_ascii_case("true") {
        Ok(Some(true))
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(Some(false))
    } else {
        Err(validation_error(
            &format!("Invalid {}", name),
            serde_json::json!({ name: "Must be true or false" }),
        ))
    }
}

fn parse_max_rent(raw: Option<&str>) -> Result<Option<f64>, ApiError> {
    let Some(raw) = raw.filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(validation_error(
            "Invalid maxRent",
            serde_json::json!({ "maxRent": "Must be a decimal number" }),
        )),
    }
}

/// Search listings
#[utoipa::path(
    get,
    path = "/api/listings",
    params(
        ("state" = Option<String>, Query, description = "Filter by exact state code"),
        ("pets" = Option<bool>, Query, description = "Filter by pets-allowed flag"),
        ("accessible" = Option<bool>, Query, description = "Filter by accessibility flag"),
        ("maxRent" = Option<f64>, Query, description = "Inclusive maximum monthly cost; uncosted listings are excluded")
    ),
    responses(
        (status = 200, description = "Matching listings ordered by monthly cost (uncosted first) and id", body = [ListingDto]),
        (status = 400, description = "Invalid query parameters", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "listings"
)]
pub async fn list_listings(
    State(state): State<AppState>,
    query: Result<Query<ListingsQuery>, QueryRejection>,
) -> Result<Json<Vec<ListingDto>>, ApiError> {
    let Query(params) = query?;
    let filter = params.into_filter()?;

    let repo = ListingRepository::new(state.db.clone());
    let rows = repo.search(&filter).await?;

    Ok(Json(rows.into_iter().map(ListingDto::from).collect()))
}
