//! Multi-vendor purchase recommendation engine.
//!
//! Per item: match vendors against the catalog, plan an order quantity,
//! score and rank every eligible vendor, then assemble a recommendation
//! with a primary vendor, ranked backups, and a human-readable rationale.

mod engine;
mod matcher;
mod quantity;
mod reasoning;
mod scoring;
mod types;

pub use engine::RecommendationEngine;
pub use matcher::match_vendors;
pub use quantity::plan_order_quantity;
pub use reasoning::build_reasoning;
pub use scoring::{AlwaysInStock, BernoulliStockSignal, RankingWeights, StockSignal, VendorRanker};
pub use types::*;

use crate::errors::DomainError;

/// Result type for recommendation operations
pub type RecommendResult<T> = Result<T, DomainError>;

/// Default scoring weights
pub const DEFAULT_WEIGHTS: RankingWeights = RankingWeights {
    price: 0.40,
    rating: 0.25,
    reliability: 0.20,
    speed: 0.15,
};

/// Flat bonus applied after the weighted sum for domestic (USA) vendors.
/// Deliberately uncapped, so composite scores may exceed 1.0.
pub const DOMESTIC_BONUS: f64 = 0.05;

/// Probability that a vendor has stock on hand, used by the default
/// stochastic availability signal.
pub const STOCK_AVAILABILITY_PROBABILITY: f64 = 0.9;

/// Vendors returned per item: one primary plus ranked backups.
pub const DEFAULT_TOP_VENDORS: usize = 5;

/// Days of demand an order should cover.
pub const DEMAND_HORIZON_DAYS: f64 = 30.0;

/// Lead time assumed when neither product nor vendor declares one.
pub const DEFAULT_LEAD_TIME_DAYS: u32 = 7;
