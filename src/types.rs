//! Internal recipe model
//!
//! The consumer-facing shape produced by normalization. Constructed once
//! per fetch call and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Trimmed, non-empty ingredient name
    pub name: String,
    /// Unit-expanded measure; empty when the source slot was blank
    pub measure: String,
}

/// A display-ready recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    /// Verified thumbnail, resolved fallback, or the original unverified
    /// thumbnail when both checks fail
    pub image: String,
    pub tags: Vec<String>,
    /// Absent when the source record has no video link or an empty one
    pub youtube_url: Option<String>,
    /// Preserves the slot order of the source record
    pub ingredients: Vec<Ingredient>,
}
