//! Inventory health, demand forecasting, and pricing analytics.
//!
//! Everything here is pure rule-based arithmetic over the caller's items
//! and order history. Generative enrichment stays out of this module; the
//! transport layer may layer it on top of these results.

mod forecast;
mod inventory;
mod pricing;

pub use forecast::{predict_demand, Confidence, DemandForecast, SalesSample};
pub use inventory::{
    analyze_inventory, Alert, AlertLevel, InventoryInsights, InventoryOverview, InventoryTrends,
    Opportunity, RecommendedAction,
};
pub use pricing::{optimize_pricing, PriceAction, PriceSuggestion};

/// Daily-sales rate above which an item counts as fast moving.
pub const FAST_MOVING_THRESHOLD: f64 = 5.0;

/// Daily-sales rate below which a well-stocked item counts as slow moving.
pub const SLOW_MOVING_THRESHOLD: f64 = 0.5;

/// Items with more units than this on hand qualify for slow-moving alerts.
pub const SLOW_MOVING_STOCK_FLOOR: u32 = 20;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
