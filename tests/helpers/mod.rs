//! Test helper utilities
//!
//! Shared utilities for testing mealfetch against local mock services.

pub mod mock_services;

pub use mock_services::{
    commons_router, image_host_router, meal_detail, mealdb_router, spawn_server, test_endpoints,
};

/// Install a test subscriber so `RUST_LOG`-filtered traces show up in
/// `cargo test` output. Safe to call from every test.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
