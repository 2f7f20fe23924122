//! # Data Models
//!
//! This module contains the SeaORM entities backing the VetNest API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod application;
pub mod listing;
pub mod provider;
pub mod resource_item;

pub use application::Entity as Application;
pub use listing::Entity as Listing;
pub use provider::Entity as Provider;
pub use resource_item::{Entity as ResourceItem, ResourceType};

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "vetnest-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
