//! Local stand-ins for the outbound services
//!
//! Each test spins up axum routers mimicking TheMealDB, the Commons API
//! and a plain image host, then points an `Endpoints` value at them.

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use mealfetch::Endpoints;

/// Serve a router on an ephemeral local port; returns its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve test app");
    });

    format!("http://{}", addr)
}

/// Endpoints wired to the given mock base URLs.
pub fn test_endpoints(mealdb_base: &str, commons_base: &str) -> Endpoints {
    Endpoints {
        mealdb_base_url: mealdb_base.to_string(),
        commons_api_url: format!("{}/w/api.php", commons_base),
        request_timeout: Duration::from_secs(5),
    }
}

/// TheMealDB stand-in serving a fixed category listing and detail records
/// keyed by meal id.
pub fn mealdb_router(listing: Value, details: HashMap<String, Value>) -> Router {
    let filter = move || {
        let listing = listing.clone();
        async move { Json(listing) }
    };

    let lookup = move |Query(params): Query<HashMap<String, String>>| {
        let details = details.clone();
        async move {
            let id = params.get("i").cloned().unwrap_or_default();
            match details.get(&id) {
                Some(detail) => Json(json!({ "meals": [detail] })),
                None => Json(json!({ "meals": null })),
            }
        }
    };

    Router::new()
        .route("/filter.php", get(filter))
        .route("/lookup.php", get(lookup))
}

/// Commons API stand-in: one endpoint dispatching on the `list` parameter
/// the way the real api.php does. `image_url` is what imageinfo resolves
/// to; `None` yields an empty pages map.
pub fn commons_router(search_hits: Vec<String>, image_url: Option<String>) -> Router {
    let handler = move |Query(params): Query<HashMap<String, String>>| {
        let search_hits = search_hits.clone();
        let image_url = image_url.clone();
        async move {
            if params.get("list").map(String::as_str) == Some("search") {
                let hits: Vec<Value> = search_hits
                    .iter()
                    .map(|title| json!({ "title": title }))
                    .collect();
                return Json(json!({ "query": { "search": hits } }));
            }

            match image_url {
                Some(url) => Json(json!({
                    "query": { "pages": { "1": { "imageinfo": [ { "url": url } ] } } }
                })),
                None => Json(json!({ "query": { "pages": {} } })),
            }
        }
    };

    Router::new().route("/w/api.php", get(handler))
}

/// Image host stand-in: `/ok.jpg` answers 200, everything else 404.
pub fn image_host_router() -> Router {
    Router::new()
        .route("/ok.jpg", get(|| async { StatusCode::OK }))
        .fallback(|| async { StatusCode::NOT_FOUND })
}

/// Detail record fixture in TheMealDB's raw shape.
pub fn meal_detail(id: &str, name: &str, thumbnail: &str) -> Value {
    json!({
        "idMeal": id,
        "strMeal": name,
        "strCategory": "Dessert",
        "strArea": "British",
        "strInstructions": "Mix everything and bake until golden.",
        "strMealThumb": thumbnail,
        "strTags": "Sweet,Baking",
        "strYoutube": "https://www.youtube.com/watch?v=abc123",
        "strIngredient1": "Flour",
        "strMeasure1": "2 cup",
        "strIngredient2": "Sugar",
        "strMeasure2": "100 g",
        "strIngredient3": "",
        "strMeasure3": "",
        "strIngredient4": null,
        "strMeasure4": null,
    })
}
