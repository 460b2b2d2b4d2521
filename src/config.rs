//! Endpoint configuration
//!
//! Defaults point at the live services; environment variables override
//! them. Tests point the base URLs at local mock servers instead.

use std::time::Duration;

/// TheMealDB public API root.
pub const MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Wikimedia Commons API endpoint used for fallback image search.
pub const COMMONS_API_URL: &str = "https://commons.wikimedia.org/w/api.php";

/// Category used by the random-recipe convenience entry point.
pub const DEFAULT_CATEGORY: &str = "Dessert";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Outbound endpoint set for one fetcher instance.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Meal database API root (no trailing slash)
    pub mealdb_base_url: String,
    /// Image search API endpoint
    pub commons_api_url: String,
    /// Per-request timeout applied to every outbound call
    pub request_timeout: Duration,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            mealdb_base_url: MEALDB_BASE_URL.to_string(),
            commons_api_url: COMMONS_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Endpoints {
    /// Defaults with environment overrides applied.
    ///
    /// `MEALFETCH_MEALDB_BASE_URL`, `MEALFETCH_COMMONS_API_URL` and
    /// `MEALFETCH_TIMEOUT_SECS` each override their field when set.
    pub fn from_env() -> Self {
        let mut endpoints = Self::default();

        if let Ok(url) = std::env::var("MEALFETCH_MEALDB_BASE_URL") {
            endpoints.mealdb_base_url = url;
        }
        if let Ok(url) = std::env::var("MEALFETCH_COMMONS_API_URL") {
            endpoints.commons_api_url = url;
        }
        if let Ok(secs) = std::env::var("MEALFETCH_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) => endpoints.request_timeout = Duration::from_secs(secs),
                Err(_) => {
                    tracing::warn!(value = %secs, "Ignoring invalid MEALFETCH_TIMEOUT_SECS")
                }
            }
        }

        endpoints
    }
}
