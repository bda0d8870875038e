use serde::{Deserialize, Serialize};

/// Filter body sent to every sales-overview data endpoint.
///
/// A field appears on the wire only while the corresponding filter is
/// active, so the unfiltered request serializes to `{}` and the backend
/// returns the full dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Range start, wire format "YYYY-MM-DD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Range end, wire format "YYYY-MM-DD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// KPI summary returned by `POST /api/kpis/`.
///
/// Every field is optional: a backend that omits one yields an absent
/// value on the card instead of a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    #[serde(default)]
    pub units_sold: Option<i64>,
    #[serde(default)]
    pub revenue_per_sku: Option<f64>,
    #[serde(default)]
    pub return_percent: Option<f64>,
    #[serde(default)]
    pub out_of_stock_count: Option<i64>,
}

/// One row of a product ranking (`top-products` / `least-sold-products`).
/// Ordering is decided by the backend and preserved as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRankingEntry {
    pub product_name: String,
    #[serde(default)]
    pub units_sold: i64,
}

/// One row of the per-category sales comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryComparisonEntry {
    pub category_name: String,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_units_sold: i64,
}

/// Record in the category catalog (`GET /api/filters/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryItem {
    pub name: String,
}

/// Envelope form of the category catalog response. The backend may also
/// return a bare array of [`CategoryItem`]; the API client accepts both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryCatalogResponse {
    #[serde(default)]
    pub categories: Vec<CategoryItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_body_serializes_to_empty_object() {
        let body = FilterBody::default();
        assert_eq!(serde_json::to_string(&body).unwrap(), "{}");
    }

    #[test]
    fn test_active_fields_are_serialized() {
        let body = FilterBody {
            category: Some("Electronics".to_string()),
            start: Some("2024-03-08".to_string()),
            end: Some("2024-03-15".to_string()),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(
            json,
            r#"{"category":"Electronics","start":"2024-03-08","end":"2024-03-15"}"#
        );
    }

    #[test]
    fn test_kpi_snapshot_tolerates_missing_fields() {
        let kpis: KpiSnapshot = serde_json::from_str(r#"{"units_sold": 42}"#).unwrap();
        assert_eq!(kpis.units_sold, Some(42));
        assert_eq!(kpis.revenue_per_sku, None);
        assert_eq!(kpis.return_percent, None);
        assert_eq!(kpis.out_of_stock_count, None);

        let empty: KpiSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, KpiSnapshot::default());
    }

    #[test]
    fn test_ranking_entry_defaults_units_to_zero() {
        let entry: ProductRankingEntry =
            serde_json::from_str(r#"{"product_name": "Widget"}"#).unwrap();
        assert_eq!(entry.units_sold, 0);
    }

    #[test]
    fn test_catalog_envelope_deserializes() {
        let resp: CategoryCatalogResponse =
            serde_json::from_str(r#"{"categories": [{"name": "Books"}]}"#).unwrap();
        assert_eq!(resp.categories.len(), 1);
        assert_eq!(resp.categories[0].name, "Books");
    }
}
