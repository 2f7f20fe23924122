//! # VetNest API Main Entry Point
//!
//! This is the main entry point for the VetNest API service.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vetnest_api::cli::run().await
}
