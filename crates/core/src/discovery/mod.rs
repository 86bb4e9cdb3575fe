//! Marketplace vendor discovery.
//!
//! Simulates a cross-marketplace product search against a curated seed
//! catalog of overseas and domestic suppliers. Results carry the same
//! vendor schema the recommendation engine consumes, so discovered
//! vendors can be pooled with registry vendors without special casing.

mod marketplace;

pub use marketplace::{
    search, search_marketplaces, to_vendor_pool, DiscoveredVendor, DiscoverySearch,
};
