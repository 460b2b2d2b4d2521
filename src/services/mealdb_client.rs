//! TheMealDB API client
//!
//! Raw access to the meal database: category listings and detail lookup.
//! Responses arrive in TheMealDB's denormalized shape; the fixed-slot
//! ingredient decode lives here so the `strIngredientN` indexing convention
//! does not leak into the rest of the crate.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Number of ingredient/measure slots in a meal record.
pub const INGREDIENT_SLOTS: usize = 20;

/// MealDB client errors
#[derive(Debug, Error)]
pub enum MealDbError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No meals found in category: {0}")]
    EmptyCategory(String),

    #[error("Meal not found: {0}")]
    NotFound(String),
}

/// Listing entry returned by the category filter endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct MealSummary {
    /// Meal identifier
    #[serde(rename = "idMeal")]
    pub id: String,
    /// Meal display name
    #[serde(rename = "strMeal")]
    pub name: String,
}

/// Full meal record returned by the detail lookup endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct MealDetail {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory")]
    pub category: String,
    #[serde(rename = "strArea")]
    pub area: String,
    #[serde(rename = "strInstructions")]
    pub instructions: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: String,
    /// Comma-separated tag list; absent on most records
    #[serde(rename = "strTags")]
    pub tags: Option<String>,
    /// Video link; absent or empty on many records
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    /// Catch-all for the numbered `strIngredientN` / `strMeasureN` fields
    #[serde(flatten)]
    slots: HashMap<String, Value>,
}

impl MealDetail {
    /// Decode the fixed-width ingredient/measure slots into a
    /// variable-length list of `(name, measure)` pairs.
    ///
    /// Slots are visited in ascending order 1..=20. A slot contributes only
    /// when its trimmed name is non-empty; a missing or null measure becomes
    /// the empty string.
    pub fn ingredient_slots(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        for i in 1..=INGREDIENT_SLOTS {
            let Some(name) = self.slot_text(&format!("strIngredient{}", i)) else {
                continue;
            };
            let measure = self
                .slot_text(&format!("strMeasure{}", i))
                .unwrap_or_default();
            pairs.push((name, measure));
        }

        pairs
    }

    /// Trimmed text of one slot field; `None` when missing, null or blank.
    fn slot_text(&self, key: &str) -> Option<String> {
        self.slots
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    }
}

/// Envelope shared by the listing and lookup endpoints; `meals` is null
/// when nothing matches.
#[derive(Debug, Deserialize)]
struct MealEnvelope<T> {
    meals: Option<Vec<T>>,
}

/// TheMealDB API client
pub struct MealDbClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(http_client: reqwest::Client, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// List the meals in a category.
    ///
    /// Errors with [`MealDbError::EmptyCategory`] when the listing is null
    /// or empty.
    pub async fn filter_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MealSummary>, MealDbError> {
        let url = format!("{}/filter.php", self.base_url);

        tracing::debug!(category = %category, url = %url, "Querying meal listing");

        let response = self
            .http_client
            .get(&url)
            .query(&[("c", category)])
            .send()
            .await
            .map_err(|e| MealDbError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(MealDbError::Api(status.as_u16(), error_text));
        }

        let envelope: MealEnvelope<MealSummary> = response
            .json()
            .await
            .map_err(|e| MealDbError::Parse(e.to_string()))?;

        let meals = envelope.meals.unwrap_or_default();
        if meals.is_empty() {
            return Err(MealDbError::EmptyCategory(category.to_string()));
        }

        tracing::info!(category = %category, count = meals.len(), "Meal listing retrieved");

        Ok(meals)
    }

    /// Look up one meal by identifier.
    ///
    /// Errors with [`MealDbError::NotFound`] when no record matches.
    pub async fn lookup_by_id(&self, id: &str) -> Result<MealDetail, MealDbError> {
        let url = format!("{}/lookup.php", self.base_url);

        tracing::debug!(id = %id, url = %url, "Querying meal detail");

        let response = self
            .http_client
            .get(&url)
            .query(&[("i", id)])
            .send()
            .await
            .map_err(|e| MealDbError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(MealDbError::Api(status.as_u16(), error_text));
        }

        let envelope: MealEnvelope<MealDetail> = response
            .json()
            .await
            .map_err(|e| MealDbError::Parse(e.to_string()))?;

        let meal = envelope
            .meals
            .into_iter()
            .flatten()
            .next()
            .ok_or_else(|| MealDbError::NotFound(id.to_string()))?;

        tracing::info!(id = %id, name = %meal.name, "Meal detail retrieved");

        Ok(meal)
    }
}
