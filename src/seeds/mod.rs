//! Database seeding functionality
//!
//! This module populates an empty database with a small sample dataset so
//! the directory, listings and application flow can be exercised right
//! after the first migration.

pub mod sample;

pub use sample::{SeedOutcome, seed_sample_data};
