//! # Application Submission Handler

use axum::{
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Json},
};

use crate::error::ApiError;
use crate::handlers::types::{ApplicationDto, ApplicationRequest};
use crate::repositories::ApplicationRepository;
use crate::server::AppState;

/// Submit an application for a listing
#[utoipa::path(
    post,
    path = "/api/applications",
    request_body = ApplicationRequest,
    responses(
        (status = 201, description = "Application accepted", body = ApplicationDto,
            headers(("Location" = String, description = "Path of the created application"))),
        (status = 400, description = "Unknown listing or malformed body", body = ApiError, example = json!({
            "error": "Listing not found.",
            "code": "LISTING_NOT_FOUND",
            "traceId": "4bf92f3577b34da6a3ce929d0e0e4736"
        })),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "applications"
)]
pub async fn submit_application(
    State(state): State<AppState>,
    payload: Result<Json<ApplicationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let repo = ApplicationRepository::new(state.db.clone());
    let created = repo.submit(request.into()).await?;

    let location = format!("/api/applications/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApplicationDto::from(created)),
    ))
}
