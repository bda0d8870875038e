use crate::shared::api_utils::api_url;
use contracts::dashboards::sales_overview::{
    CategoryCatalogResponse, CategoryComparisonEntry, CategoryItem, FilterBody, KpiSnapshot,
    ProductRankingEntry,
};
use gloo_net::http::Request;
use thiserror::Error;

/// Error from a single dashboard API call. One attempt per call, no
/// retries; the error is handed to the caller unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or completed.
    #[error("request failed: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("HTTP error: {0}")]
    Server(u16),
    /// The response body did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

async fn post_json<T: serde::de::DeserializeOwned>(
    path: &str,
    body: &FilterBody,
) -> Result<T, ApiError> {
    let body_str = serde_json::to_string(body).map_err(|e| ApiError::Shape(e.to_string()))?;

    let response = Request::post(&api_url(path))
        .header("Content-Type", "application/json")
        .body(body_str)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Server(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Shape(e.to_string()))
}

/// Fetch the category catalog.
///
/// The backend returns either a bare array of `{name}` records or an
/// envelope `{ "categories": [...] }`; both shapes are accepted.
pub async fn fetch_categories() -> Result<Vec<String>, ApiError> {
    let response = Request::get(&api_url("/api/filters/"))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Server(response.status()));
    }

    let value: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ApiError::Shape(e.to_string()))?;

    Ok(parse_category_names(value))
}

fn parse_category_names(value: serde_json::Value) -> Vec<String> {
    let items: Vec<CategoryItem> = if value.is_array() {
        serde_json::from_value(value).unwrap_or_default()
    } else {
        serde_json::from_value::<CategoryCatalogResponse>(value)
            .map(|r| r.categories)
            .unwrap_or_default()
    };
    items.into_iter().map(|c| c.name).collect()
}

pub async fn fetch_kpis(body: &FilterBody) -> Result<KpiSnapshot, ApiError> {
    post_json("/api/kpis/", body).await
}

pub async fn fetch_top_products(body: &FilterBody) -> Result<Vec<ProductRankingEntry>, ApiError> {
    post_json("/api/top-products/", body).await
}

pub async fn fetch_least_sold_products(
    body: &FilterBody,
) -> Result<Vec<ProductRankingEntry>, ApiError> {
    post_json("/api/least-sold-products/", body).await
}

pub async fn fetch_category_comparison(
    body: &FilterBody,
) -> Result<Vec<CategoryComparisonEntry>, ApiError> {
    post_json("/api/category-comparison/", body).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_category_names_bare_array() {
        let value = json!([{"name": "Books"}, {"name": "Toys"}]);
        assert_eq!(parse_category_names(value), vec!["Books", "Toys"]);
    }

    #[test]
    fn test_parse_category_names_envelope() {
        let value = json!({"categories": [{"name": "Electronics"}]});
        assert_eq!(parse_category_names(value), vec!["Electronics"]);
    }

    #[test]
    fn test_parse_category_names_tolerates_garbage() {
        assert!(parse_category_names(json!("nope")).is_empty());
        assert!(parse_category_names(json!({"unexpected": 1})).is_empty());
    }
}
