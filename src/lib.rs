//! # mealfetch
//!
//! Client library for fetching display-ready recipes from TheMealDB, with
//! fallback image resolution via Wikimedia Commons.
//!
//! Two entry points cover the whole surface:
//! - [`RecipeFetcher::random_by_category`] picks one meal at random from a
//!   category listing and fetches its full detail
//! - [`RecipeFetcher::by_id`] fetches full detail directly by identifier
//!
//! Both normalize the raw meal record into a [`Recipe`]: ingredient slots
//! are decoded in order, measures get their units expanded, and unreachable
//! thumbnails fall back to a Commons image search.

pub mod config;
pub mod error;
pub mod services;
pub mod types;

pub use config::{Endpoints, DEFAULT_CATEGORY};
pub use error::FetchError;
pub use services::recipe_fetcher::RecipeFetcher;
pub use types::{Ingredient, Recipe};
