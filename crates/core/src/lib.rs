pub mod analytics;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod insight;
pub mod recommend;
pub mod vendors;

pub use errors::{DomainError, InsightError};
pub use insight::{DisabledInsights, InsightSource};
pub use recommend::{
    BackupVendor, BernoulliStockSignal, Item, MatchedVendor, Recommendation, RecommendationEngine,
    ScoredVendor, StockSignal, Vendor, VendorPerformance, VendorProduct,
};
pub use vendors::{OrderRecord, VendorAnalysis};
