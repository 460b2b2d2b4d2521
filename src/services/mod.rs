//! Service modules for the recipe fetch pipeline

pub mod image_resolver;
pub mod mealdb_client;
pub mod normalizer;
pub mod recipe_fetcher;
pub mod unit_expander;

pub use image_resolver::ImageResolver;
pub use mealdb_client::{MealDbClient, MealDbError, MealDetail, MealSummary};
pub use normalizer::Normalizer;
pub use recipe_fetcher::RecipeFetcher;
pub use unit_expander::expand_units;
