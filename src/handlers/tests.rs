//! # Tests for Handlers
//!
//! Router-level tests driving the full middleware stack against an
//! in-memory SQLite database.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use sea_orm::{ActiveModelTrait, Set};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::config::AppConfig;
use crate::db::{apply_migrations, init_pool};
use crate::models::{ServiceInfo, listing, provider};
use crate::seeds::seed_sample_data;
use crate::server::{AppState, create_app};

async fn test_app(seed: bool) -> Router {
    create_app(test_state(seed).await)
}

async fn test_state(seed: bool) -> AppState {
    let config = AppConfig {
        database_url: "sqlite::memory:".to_string(),
        ..Default::default()
    };
    let db = init_pool(&config).await.expect("in-memory database");
    apply_migrations(&db).await.expect("migrations");
    if seed {
        seed_sample_data(&db).await.expect("seed");
    }

    AppState {
        config: Arc::new(config),
        db,
    }
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_root_handler_returns_expected_service_info() {
    let app = test_app(false).await;
    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "vetnest-api");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_service_info_default() {
    let service_info = ServiceInfo::default();

    assert_eq!(service_info.service, "vetnest-api");
    assert_eq!(service_info.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_and_readiness() {
    let app = test_app(false).await;

    let (status, body) = get(&app, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let (status, body) = get(&app, "/readyz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ready" }));
}

#[tokio::test]
async fn test_resources_embed_provider() {
    let app = test_app(true).await;
    let (status, body) = get(&app, "/api/resources?type=Housing&state=GA").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["type"], "Housing");
    assert_eq!(items[0]["title"], "Transitional Housing");
    assert_eq!(items[0]["provider"]["name"], "Vet Homes GA");
    assert_eq!(items[0]["provider"]["contactEmail"], "contact@vethomes.org");
}

#[tokio::test]
async fn test_unknown_resource_type_is_rejected() {
    let app = test_app(true).await;
    let (status, body) = get(&app, "/api/resources?type=Shelter").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn test_listing_filters_compose() {
    let app = test_app(true).await;

    let (status, body) = get(&app, "/api/listings?state=GA&maxRent=900&pets=true").await;
    assert_eq!(status, StatusCode::OK);
    let listings = body.as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["title"], "1BR Veteran Unit - Atlanta");
    assert_eq!(listings[0]["monthlyCost"], 850.0);
    assert_eq!(listings[0]["petsAllowed"], true);

    let (_, body) = get(&app, "/api/listings?maxRent=800").await;
    assert!(body.as_array().unwrap().is_empty());

    let (status, body) = get(&app, "/api/listings?pets=maybe").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn test_accessible_filter_matches_both_values() {
    let state = test_state(true).await;
    let owner = provider::ActiveModel {
        name: Set("Walkup Housing".to_string()),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .unwrap();
    listing::ActiveModel {
        provider_id: Set(owner.id),
        title: Set("Third Floor Walkup".to_string()),
        description: Set(None),
        state: Set("GA".to_string()),
        monthly_cost: Set(Some(700.0)),
        pets_allowed: Set(false),
        accessible: Set(false),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .unwrap();
    let app = create_app(state);

    let (status, body) = get(&app, "/api/listings?accessible=false").await;
    assert_eq!(status, StatusCode::OK);
    let listings = body.as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["title"], "Third Floor Walkup");
    assert_eq!(listings[0]["accessible"], false);
    assert_eq!(listings[0]["provider"]["name"], "Walkup Housing");

    let (status, body) = get(&app, "/api/listings?accessible=TRUE").await;
    assert_eq!(status, StatusCode::OK);
    let listings = body.as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["title"], "1BR Veteran Unit - Atlanta");
}

#[tokio::test]
async fn test_submit_application_created() {
    let app = test_app(true).await;
    let body = json!({
        "id": 999,
        "listingId": 1,
        "fullName": "Jordan Rivera",
        "email": "jordan@example.org",
        "submittedUtc": "1999-01-01T00:00:00Z"
    });

    let response = app
        .clone()
        .oneshot(post_json("/api/applications", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/applications/1"
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let created: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(created["id"], 1);
    assert_eq!(created["listingId"], 1);
    assert_eq!(created["fullName"], "Jordan Rivera");
    assert!(!created["submittedUtc"].as_str().unwrap().starts_with("1999"));
}

#[tokio::test]
async fn test_submit_application_unknown_listing() {
    let app = test_app(true).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/applications",
            json!({ "listingId": 42, "fullName": "A", "email": "a@b.c" }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Listing not found.");
    assert_eq!(body["code"], "LISTING_NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = test_app(true).await;

    let response = app
        .clone()
        .oneshot(post_json("/api/applications", "{not json".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn test_trace_id_is_echoed_and_reported() {
    let app = test_app(true).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/listings?maxRent=lots")
                .header("x-trace-id", "trace-abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-trace-id").unwrap(), "trace-abc");
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["traceId"], "trace-abc");
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let app = test_app(false).await;
    let (status, body) = get(&app, "/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "VetNest API");
    let paths = body["paths"].as_object().unwrap();
    for path in ["/api/resources", "/api/listings", "/api/applications", "/readyz"] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
}
