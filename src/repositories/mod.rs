//! # Repository Layer
//!
//! This module contains repository implementations that encapsulate SeaORM
//! operations for the directory, listings and applications.

pub mod application;
pub mod listing;
pub mod provider;
pub mod resource;

pub use application::{ApplicationRepository, NewApplication};
pub use listing::{ListingFilter, ListingRepository, ListingWithProvider};
pub use provider::ProviderRepository;
pub use resource::{ResourceFilter, ResourceRepository, ResourceWithProvider};
