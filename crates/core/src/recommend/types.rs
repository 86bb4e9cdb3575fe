//! Types for the recommendation engine

use serde::{Deserialize, Serialize};

/// A unit of inventory under consideration for reorder.
///
/// `current_stock`, `reorder_point`, and `max_capacity` share one unit of
/// measure; `max_capacity` absent means unbounded shelf space.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub current_stock: u32,
    #[serde(default)]
    pub reorder_point: u32,
    #[serde(default)]
    pub max_capacity: Option<u32>,
    #[serde(default)]
    pub average_daily_sales: f64,
    #[serde(default)]
    pub cost_price: f64,
    #[serde(default)]
    pub selling_price: f64,
    #[serde(default)]
    pub category: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current_stock: 0,
            reorder_point: 0,
            max_capacity: None,
            average_daily_sales: 0.0,
            cost_price: 0.0,
            selling_price: 0.0,
            category: None,
        }
    }

    pub fn with_stock(mut self, current: u32, reorder_point: u32) -> Self {
        self.current_stock = current;
        self.reorder_point = reorder_point;
        self
    }

    pub fn with_daily_sales(mut self, average_daily_sales: f64) -> Self {
        self.average_daily_sales = average_daily_sales;
        self
    }

    pub fn with_max_capacity(mut self, max_capacity: u32) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }
}

/// A source offering one or more products, from the trusted registry or an
/// untrusted discovery source. Provenance is carried as plain data; the
/// engine treats registry and scraped vendors uniformly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default = "default_country")]
    pub country: String,
    /// Quality rating on a 0-5 scale.
    #[serde(default)]
    pub rating: f64,
    /// Vendor-level delivery estimate in days, used when a product does not
    /// declare its own lead time.
    #[serde(default)]
    pub delivery_time: Option<u32>,
    #[serde(default)]
    pub products: Vec<VendorProduct>,
    #[serde(default)]
    pub performance: VendorPerformance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorProduct {
    pub item_name: String,
    pub price: f64,
    #[serde(default = "default_moq")]
    pub moq: u32,
    #[serde(default)]
    pub lead_time: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorPerformance {
    /// On-time delivery percentage, 0-100.
    #[serde(default = "default_on_time_delivery")]
    pub on_time_delivery: f64,
    /// Average response time in hours.
    #[serde(default)]
    pub response_time: Option<f64>,
}

impl Default for VendorPerformance {
    fn default() -> Self {
        Self { on_time_delivery: default_on_time_delivery(), response_time: None }
    }
}

fn default_source() -> String {
    "Database".to_string()
}

fn default_country() -> String {
    "N/A".to_string()
}

fn default_moq() -> u32 {
    1
}

fn default_on_time_delivery() -> f64 {
    100.0
}

/// Per-item view of a vendor: the first catalog product matching the item,
/// flattened together with the vendor's reliability fields. Exists only
/// transiently between matching and ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedVendor {
    pub vendor_id: String,
    pub vendor_name: String,
    pub source: String,
    pub is_online: bool,
    pub country: String,
    pub price: f64,
    pub moq: u32,
    pub lead_time: u32,
    pub rating: f64,
    pub on_time_delivery: f64,
}

/// A matched vendor augmented with its composite score, projected savings,
/// and both rank sequences. Built fresh per request; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredVendor {
    pub vendor_id: String,
    pub vendor_name: String,
    pub vendor_source: String,
    pub is_online: bool,
    pub country: String,
    pub price: f64,
    pub total_cost: f64,
    /// Projected savings versus the matched-pool average price, scaled by
    /// the planned quantity. Negative when the vendor is above average.
    pub estimated_savings: f64,
    pub delivery_time: u32,
    /// Composite score capped at 0.95. The raw score itself is uncapped.
    pub confidence: f64,
    pub rating: f64,
    pub on_time_delivery: f64,
    pub stock_available: bool,
    pub score: f64,
    /// 1-based rank by ascending price within the eligible pool.
    pub price_rank: usize,
    /// 1-based rank by descending composite score within the eligible pool.
    pub overall_rank: usize,
}

/// A fallback vendor retained below the primary selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupVendor {
    /// 2-based priority matching the backup's position after the primary.
    pub priority: usize,
    #[serde(flatten)]
    pub vendor: ScoredVendor,
}

/// Final per-item output record. Immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub item_id: String,
    pub item_name: String,
    pub current_stock: u32,
    pub reorder_point: u32,
    pub recommended_quantity: u32,
    pub vendor_id: String,
    pub vendor_name: String,
    pub vendor_source: String,
    pub is_online: bool,
    pub country: String,
    pub price: f64,
    pub total_cost: f64,
    pub estimated_savings: f64,
    pub delivery_time: u32,
    pub confidence: f64,
    pub rating: f64,
    pub stock_available: bool,
    pub reasoning: String,
    pub backup_vendors: Vec<BackupVendor>,
    pub total_vendors_found: usize,
    pub has_backup: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_insight: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_behavioral_fields_default_from_the_wire() {
        let vendor: Vendor = serde_json::from_str(
            r#"{"id":"v1","name":"Acme","products":[{"itemName":"USB Cable","price":5.0}]}"#,
        )
        .expect("deserialize");

        assert_eq!(vendor.source, "Database");
        assert_eq!(vendor.country, "N/A");
        assert_eq!(vendor.products[0].moq, 1);
        assert!(vendor.products[0].lead_time.is_none());
        assert!((vendor.performance.on_time_delivery - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn item_identity_fields_are_required() {
        let result: Result<Item, _> = serde_json::from_str(r#"{"currentStock":5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn recommendation_omits_absent_ai_insight() {
        let recommendation = Recommendation {
            item_id: "i1".to_string(),
            item_name: "USB Cable".to_string(),
            current_stock: 2,
            reorder_point: 10,
            recommended_quantity: 30,
            vendor_id: "v1".to_string(),
            vendor_name: "Acme".to_string(),
            vendor_source: "Database".to_string(),
            is_online: false,
            country: "N/A".to_string(),
            price: 5.0,
            total_cost: 150.0,
            estimated_savings: 30.0,
            delivery_time: 7,
            confidence: 0.9,
            rating: 4.5,
            stock_available: true,
            reasoning: String::new(),
            backup_vendors: Vec::new(),
            total_vendors_found: 1,
            has_backup: false,
            ai_insight: None,
        };

        let json = serde_json::to_string(&recommendation).expect("serialize");
        assert!(!json.contains("aiInsight"));
        assert!(json.contains("recommendedQuantity"));
    }
}
