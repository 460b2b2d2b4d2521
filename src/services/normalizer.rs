//! Meal record normalization
//!
//! Converts a raw [`MealDetail`] into the internal [`Recipe`] shape:
//! decodes the ingredient slots, verifies the thumbnail is reachable
//! (falling back to a Commons search when it is not) and reshapes tags
//! and media links.

use crate::services::image_resolver::ImageResolver;
use crate::services::mealdb_client::MealDetail;
use crate::services::unit_expander::expand_units;
use crate::types::{Ingredient, Recipe};

/// Meal record normalizer
pub struct Normalizer {
    http_client: reqwest::Client,
    resolver: ImageResolver,
}

impl Normalizer {
    pub fn new(http_client: reqwest::Client, resolver: ImageResolver) -> Self {
        Self {
            http_client,
            resolver,
        }
    }

    /// Build a [`Recipe`] from a raw meal record.
    ///
    /// Never fails: image probe and resolver failures degrade to the
    /// original thumbnail.
    pub async fn normalize(&self, meal: MealDetail) -> Recipe {
        let ingredients = meal
            .ingredient_slots()
            .into_iter()
            .map(|(name, measure)| Ingredient {
                name,
                measure: if measure.is_empty() {
                    measure
                } else {
                    expand_units(&measure)
                },
            })
            .collect();

        let image = self.usable_image(&meal).await;

        let tags = meal
            .tags
            .as_deref()
            .map(|tags| tags.split(',').map(|tag| tag.trim().to_string()).collect())
            .unwrap_or_default();

        Recipe {
            id: meal.id,
            name: meal.name,
            category: meal.category,
            area: meal.area,
            instructions: meal.instructions,
            image,
            tags,
            youtube_url: meal.youtube.filter(|url| !url.is_empty()),
            ingredients,
        }
    }

    /// Thumbnail if reachable, else the first fallback the resolver finds,
    /// else the original unverified thumbnail.
    async fn usable_image(&self, meal: &MealDetail) -> String {
        if self.image_reachable(&meal.thumbnail).await {
            return meal.thumbnail.clone();
        }

        tracing::warn!(
            id = %meal.id,
            thumbnail = %meal.thumbnail,
            "Thumbnail unreachable, trying fallback search"
        );

        self.resolver
            .resolve(&meal.name)
            .await
            .unwrap_or_else(|| meal.thumbnail.clone())
    }

    /// Header-only existence check.
    async fn image_reachable(&self, url: &str) -> bool {
        match self.http_client.head(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                tracing::debug!(url = %url, error = %err, "Image probe failed");
                false
            }
        }
    }
}
