//! # Common API Types
//!
//! Wire representations shared by the directory, listing and application
//! handlers. All field names are camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{ResourceType, application, listing, provider, resource_item};

/// Organization offering resources and listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDto {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Vet Homes GA")]
    pub name: String,
    #[schema(example = "contact@vethomes.org")]
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    #[schema(example = "GA")]
    pub state: Option<String>,
}

impl From<provider::Model> for ProviderDto {
    fn from(model: provider::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            contact_email: model.contact_email,
            phone: model.phone,
            state: model.state,
        }
    }
}

/// Directory entry with its provider embedded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceItemDto {
    #[schema(example = 1)]
    pub id: i32,
    /// Directory category
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[schema(example = "Transitional Housing")]
    pub title: String,
    #[schema(example = "3–6 months program")]
    pub description: Option<String>,
    #[schema(example = "GA")]
    pub state: Option<String>,
    pub provider_id: Option<i32>,
    /// Owning provider, `null` when the resource has none
    pub provider: Option<ProviderDto>,
}

impl From<(resource_item::Model, Option<provider::Model>)> for ResourceItemDto {
    fn from((model, provider): (resource_item::Model, Option<provider::Model>)) -> Self {
        Self {
            id: model.id,
            resource_type: model.resource_type,
            title: model.title,
            description: model.description,
            state: model.state,
            provider_id: model.provider_id,
            provider: provider.map(ProviderDto::from),
        }
    }
}

/// Rentable unit with its provider embedded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingDto {
    #[schema(example = 1)]
    pub id: i32,
    pub provider_id: i32,
    pub provider: Option<ProviderDto>,
    #[schema(example = "1BR Veteran Unit - Atlanta")]
    pub title: String,
    pub description: Option<String>,
    #[schema(example = "GA")]
    pub state: String,
    /// Monthly cost in dollars
    #[schema(example = 850.0)]
    pub monthly_cost: Option<f64>,
    pub pets_allowed: bool,
    pub accessible: bool,
}

impl From<(listing::Model, Option<provider::Model>)> for ListingDto {
    fn from((model, provider): (listing::Model, Option<provider::Model>)) -> Self {
        Self {
            id: model.id,
            provider_id: model.provider_id,
            provider: provider.map(ProviderDto::from),
            title: model.title,
            description: model.description,
            state: model.state,
            monthly_cost: model.monthly_cost,
            pets_allowed: model.pets_allowed,
            accessible: model.accessible,
        }
    }
}

/// Stored application as returned after submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub listing_id: i32,
    #[schema(example = "Jordan Rivera")]
    pub full_name: String,
    #[schema(example = "jordan@example.org")]
    pub email: String,
    pub phone: Option<String>,
    pub state: Option<String>,
    pub notes: Option<String>,
    /// Moment the service accepted the application
    #[schema(example = "2026-10-18T14:03:12.512Z")]
    pub submitted_utc: DateTime<Utc>,
}

impl From<application::Model> for ApplicationDto {
    fn from(model: application::Model) -> Self {
        Self {
            id: model.id,
            listing_id: model.listing_id,
            full_name: model.full_name,
            email: model.email,
            phone: model.phone,
            state: model.state,
            notes: model.notes,
            submitted_utc: model.submitted_utc.with_timezone(&Utc),
        }
    }
}

/// Application submission body.
///
/// Missing names default to empty strings and a missing listing id to 0.
/// Client-supplied `id` and `submittedUtc` values are ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationRequest {
    #[schema(example = 1)]
    pub listing_id: i32,
    #[schema(example = "Jordan Rivera")]
    pub full_name: Option<String>,
    #[schema(example = "jordan@example.org")]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub state: Option<String>,
    pub notes: Option<String>,
}

impl From<ApplicationRequest> for crate::repositories::NewApplication {
    fn from(request: ApplicationRequest) -> Self {
        Self {
            listing_id: request.listing_id,
            full_name: request.full_name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            phone: request.phone,
            state: request.state,
            notes: request.notes,
        }
    }
}

/// Liveness and readiness payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "ok")]
    pub status: String,
}
