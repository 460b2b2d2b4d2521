//! Wikimedia Commons fallback image search
//!
//! When a meal's own thumbnail is unreachable, search the Commons file
//! namespace for "<meal name> food", take the first hit and resolve its
//! file title to a direct image URL. Every failure degrades to `None`;
//! nothing here propagates an error to the caller.

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

// MediaWiki namespace 6 is the File: namespace.
const SEARCH_NAMESPACE_FILE: &str = "6";
const SEARCH_LIMIT: &str = "5";

/// Image resolution errors, absorbed by [`ImageResolver::resolve`]
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No file matches for search term")]
    NoMatches,

    #[error("No image metadata for file: {0}")]
    NoImageInfo(String),
}

/// Search response: `query.search[].title`
#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

/// Image info response: `query.pages.{pageid}.imageinfo[].url`
#[derive(Debug, Deserialize)]
struct ImageInfoResponse {
    query: Option<ImageInfoQuery>,
}

#[derive(Debug, Deserialize)]
struct ImageInfoQuery {
    pages: HashMap<String, ImagePage>,
}

#[derive(Debug, Deserialize)]
struct ImagePage {
    imageinfo: Option<Vec<ImageInfo>>,
}

#[derive(Debug, Deserialize)]
struct ImageInfo {
    url: String,
}

/// Wikimedia Commons image resolver
pub struct ImageResolver {
    http_client: reqwest::Client,
    api_url: String,
}

impl ImageResolver {
    pub fn new(http_client: reqwest::Client, api_url: String) -> Self {
        Self {
            http_client,
            api_url,
        }
    }

    /// Find a usable image for a search term.
    ///
    /// Returns `None` on zero hits, missing metadata, or any network or
    /// parse failure. Outcomes are logged; errors never propagate.
    pub async fn resolve(&self, term: &str) -> Option<String> {
        match self.lookup(term).await {
            Ok(url) => {
                tracing::info!(term = %term, url = %url, "Fallback image found");
                Some(url)
            }
            Err(err) => {
                tracing::warn!(term = %term, error = %err, "Fallback image lookup failed");
                None
            }
        }
    }

    /// Search, then metadata lookup. The second query needs the file title
    /// from the first, so the two steps stay ordered.
    async fn lookup(&self, term: &str) -> Result<String, ResolveError> {
        let title = self.search_file(term).await?;
        self.file_url(&title).await
    }

    /// First hit's file title for `"{term} food"` in the file namespace.
    async fn search_file(&self, term: &str) -> Result<String, ResolveError> {
        let search_term = format!("{} food", term);

        tracing::debug!(term = %search_term, "Searching Commons for fallback image");

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", search_term.as_str()),
                ("srnamespace", SEARCH_NAMESPACE_FILE),
                ("srlimit", SEARCH_LIMIT),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| ResolveError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ResolveError::Api(status.as_u16(), error_text));
        }

        let search: SearchResponse = response
            .json()
            .await
            .map_err(|e| ResolveError::Parse(e.to_string()))?;

        search
            .query
            .map(|query| query.search)
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|hit| hit.title)
            .ok_or(ResolveError::NoMatches)
    }

    /// Resolve a file title to its direct image URL.
    async fn file_url(&self, title: &str) -> Result<String, ResolveError> {
        tracing::debug!(title = %title, "Resolving file title to image URL");

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("titles", title),
                ("prop", "imageinfo"),
                ("iiprop", "url"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| ResolveError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ResolveError::Api(status.as_u16(), error_text));
        }

        let info: ImageInfoResponse = response
            .json()
            .await
            .map_err(|e| ResolveError::Parse(e.to_string()))?;

        info.query
            .map(|query| query.pages)
            .unwrap_or_default()
            .into_values()
            .next()
            .and_then(|page| page.imageinfo)
            .and_then(|infos| infos.into_iter().next())
            .map(|info| info.url)
            .ok_or_else(|| ResolveError::NoImageInfo(title.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_response_first_hit_title() {
        let search: SearchResponse = serde_json::from_value(json!({
            "query": { "search": [
                { "title": "File:Apple crumble.jpg", "pageid": 123 },
                { "title": "File:Crumble dish.jpg", "pageid": 456 },
            ]}
        }))
        .unwrap();

        let first = search.query.unwrap().search.into_iter().next().unwrap();
        assert_eq!(first.title, "File:Apple crumble.jpg");
    }

    #[test]
    fn search_response_without_query_section() {
        let search: SearchResponse = serde_json::from_value(json!({})).unwrap();
        assert!(search.query.is_none());
    }

    #[test]
    fn imageinfo_response_first_page_url() {
        let info: ImageInfoResponse = serde_json::from_value(json!({
            "query": { "pages": {
                "12345": { "imageinfo": [ { "url": "https://upload.example.org/a.jpg" } ] }
            }}
        }))
        .unwrap();

        let url = info
            .query
            .unwrap()
            .pages
            .into_values()
            .next()
            .and_then(|page| page.imageinfo)
            .and_then(|infos| infos.into_iter().next())
            .map(|info| info.url);

        assert_eq!(url.as_deref(), Some("https://upload.example.org/a.jpg"));
    }

    #[test]
    fn imageinfo_response_missing_metadata() {
        let info: ImageInfoResponse = serde_json::from_value(json!({
            "query": { "pages": { "-1": {} } }
        }))
        .unwrap();

        let url = info
            .query
            .unwrap()
            .pages
            .into_values()
            .next()
            .and_then(|page| page.imageinfo)
            .and_then(|infos| infos.into_iter().next());

        assert!(url.is_none());
    }
}
