//! # VetNest API Library
//!
//! This library provides the core functionality for the VetNest API service:
//! the resource directory, housing listings, application intake and the
//! donation checkout widget.

pub mod cli;
pub mod config;
pub mod db;
pub mod donation;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod seeds;
pub mod server;
pub mod telemetry;
pub use migration;
