//! Recipe fetch entry points
//!
//! The public surface of the crate: fetch a random recipe from a category,
//! or fetch one by identifier. Internal failures are logged and folded into
//! the generic [`FetchError`] messages at this boundary; callers never see
//! the underlying cause.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{Endpoints, DEFAULT_CATEGORY};
use crate::error::FetchError;
use crate::services::image_resolver::ImageResolver;
use crate::services::mealdb_client::{MealDbClient, MealDbError, MealSummary};
use crate::services::normalizer::Normalizer;
use crate::types::Recipe;

const USER_AGENT: &str = "mealfetch/0.1.0 (https://github.com/mealfetch/mealfetch)";

/// Recipe fetcher
///
/// Owns one HTTP client shared by the meal database client, the image
/// probe and the fallback resolver.
pub struct RecipeFetcher {
    meal_db: MealDbClient,
    normalizer: Normalizer,
}

impl RecipeFetcher {
    /// Create a fetcher against the given endpoints.
    pub fn new(endpoints: Endpoints) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(endpoints.request_timeout)
            .build()
            .map_err(|err| {
                tracing::error!(error = %err, "Failed to build HTTP client");
                FetchError::Init
            })?;

        let meal_db = MealDbClient::new(http_client.clone(), endpoints.mealdb_base_url);
        let resolver = ImageResolver::new(http_client.clone(), endpoints.commons_api_url);
        let normalizer = Normalizer::new(http_client, resolver);

        Ok(Self {
            meal_db,
            normalizer,
        })
    }

    /// Create a fetcher from defaults plus environment overrides.
    pub fn from_env() -> Result<Self, FetchError> {
        Self::new(Endpoints::from_env())
    }

    /// Fetch a random recipe from a category.
    pub async fn random_by_category(&self, category: &str) -> Result<Recipe, FetchError> {
        self.random_by_category_with(category, &mut rand::thread_rng())
            .await
    }

    /// Fetch a random recipe from a category using the supplied random
    /// source. Selection is uniform over the category listing.
    pub async fn random_by_category_with<R: Rng>(
        &self,
        category: &str,
        rng: &mut R,
    ) -> Result<Recipe, FetchError> {
        self.random_inner(category, rng).await.map_err(|err| {
            tracing::error!(category = %category, error = %err, "Random recipe fetch failed");
            FetchError::Recipe
        })
    }

    /// Fetch a random recipe from the default category.
    pub async fn random_dessert(&self) -> Result<Recipe, FetchError> {
        self.random_by_category(DEFAULT_CATEGORY).await
    }

    /// Fetch one recipe by identifier.
    pub async fn by_id(&self, id: &str) -> Result<Recipe, FetchError> {
        self.detail_inner(id).await.map_err(|err| {
            tracing::error!(id = %id, error = %err, "Recipe detail fetch failed");
            FetchError::RecipeDetails
        })
    }

    async fn random_inner<R: Rng>(
        &self,
        category: &str,
        rng: &mut R,
    ) -> Result<Recipe, MealDbError> {
        let listing = self.meal_db.filter_by_category(category).await?;

        // filter_by_category guarantees a non-empty listing
        let pick = select_random(&listing, rng)
            .ok_or_else(|| MealDbError::EmptyCategory(category.to_string()))?;

        tracing::info!(
            category = %category,
            id = %pick.id,
            name = %pick.name,
            "Selected random meal"
        );

        self.detail_inner(&pick.id).await
    }

    async fn detail_inner(&self, id: &str) -> Result<Recipe, MealDbError> {
        let meal = self.meal_db.lookup_by_id(id).await?;
        Ok(self.normalizer.normalize(meal).await)
    }
}

/// Uniform random pick from a listing; `None` only when the slice is empty.
fn select_random<'a, R: Rng>(meals: &'a [MealSummary], rng: &mut R) -> Option<&'a MealSummary> {
    meals.choose(rng)
}
