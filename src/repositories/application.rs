//! # Application Repository
//!
//! Accepts application submissions. Rows are only ever inserted.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::error::RepositoryError;
use crate::models::application::{ActiveModel, Model};
use crate::repositories::ListingRepository;

/// Applicant-supplied fields of a new application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewApplication {
    pub listing_id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub state: Option<String>,
    pub notes: Option<String>,
}

/// Repository for application submissions
#[derive(Debug, Clone)]
pub struct ApplicationRepository {
    db: DatabaseConnection,
}

impl ApplicationRepository {
    /// Create a new ApplicationRepository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submit an application for an existing listing.
    ///
    /// Fails with [`RepositoryError::ListingNotFound`] without writing anything
    /// when the listing does not exist. The submission timestamp is taken from
    /// the clock at acceptance.
    pub async fn submit(&self, application: NewApplication) -> Result<Model, RepositoryError> {
        let listings = ListingRepository::new(self.db.clone());
        if !listings.exists(application.listing_id).await? {
            return Err(RepositoryError::ListingNotFound {
                listing_id: application.listing_id,
            });
        }

        let row = ActiveModel {
            listing_id: Set(application.listing_id),
            full_name: Set(application.full_name),
            email: Set(application.email),
            phone: Set(application.phone),
            state: Set(application.state),
            notes: Set(application.notes),
            submitted_utc: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let created = row.insert(&self.db).await?;

        tracing::info!(
            application_id = created.id,
            listing_id = created.listing_id,
            "Application accepted"
        );

        Ok(created)
    }
}
