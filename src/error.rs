//! Public error boundary
//!
//! Internal failures (listing, lookup, transport, parse) are logged where
//! they happen and folded into [`FetchError`] at the fetcher boundary.
//! Callers get a stable user-facing message and nothing to branch on.

use thiserror::Error;

/// Error returned by the public fetch operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("Failed to initialize recipe client.")]
    Init,

    /// A random-recipe fetch failed at some internal step.
    #[error("Failed to fetch recipe. Please try again.")]
    Recipe,

    /// A detail fetch failed at some internal step.
    #[error("Failed to fetch recipe details. Please try again.")]
    RecipeDetails,
}
