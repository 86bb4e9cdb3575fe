//! Seeded marketplace search.

use chrono::{Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::recommend::{Vendor, VendorPerformance, VendorProduct};

struct SeedVendor {
    name: &'static str,
    country: &'static str,
    rating: f64,
    min_order: u32,
    delivery_days: u32,
}

struct Marketplace {
    source: &'static str,
    vendors: &'static [SeedVendor],
}

const MARKETPLACES: &[Marketplace] = &[
    Marketplace {
        source: "Alibaba",
        vendors: &[
            SeedVendor { name: "Shenzhen Tech Electronics Co.", country: "China", rating: 4.7, min_order: 100, delivery_days: 15 },
            SeedVendor { name: "Guangzhou Smart Supplies", country: "China", rating: 4.5, min_order: 50, delivery_days: 18 },
            SeedVendor { name: "Beijing Innovation Tech", country: "China", rating: 4.8, min_order: 200, delivery_days: 12 },
        ],
    },
    Marketplace {
        source: "Amazon Business",
        vendors: &[
            SeedVendor { name: "TechDirect USA", country: "USA", rating: 4.6, min_order: 1, delivery_days: 2 },
            SeedVendor { name: "Office Supplies Plus", country: "USA", rating: 4.4, min_order: 1, delivery_days: 3 },
            SeedVendor { name: "ElectroWorld Distribution", country: "USA", rating: 4.9, min_order: 5, delivery_days: 1 },
        ],
    },
    Marketplace {
        source: "IndiaMART",
        vendors: &[
            SeedVendor { name: "Mumbai Electronics Hub", country: "India", rating: 4.3, min_order: 25, delivery_days: 10 },
            SeedVendor { name: "Delhi Office Mart", country: "India", rating: 4.2, min_order: 30, delivery_days: 12 },
            SeedVendor { name: "Bangalore Tech Suppliers", country: "India", rating: 4.6, min_order: 20, delivery_days: 8 },
        ],
    },
    Marketplace {
        source: "Made-in-China",
        vendors: &[
            SeedVendor { name: "Shanghai Quality Products", country: "China", rating: 4.4, min_order: 150, delivery_days: 14 },
            SeedVendor { name: "Ningbo Trade Company", country: "China", rating: 4.5, min_order: 100, delivery_days: 16 },
        ],
    },
    Marketplace {
        source: "Global Sources",
        vendors: &[
            SeedVendor { name: "Hong Kong Trading Co.", country: "Hong Kong", rating: 4.7, min_order: 50, delivery_days: 10 },
            SeedVendor { name: "Taiwan Electronics Export", country: "Taiwan", rating: 4.8, min_order: 75, delivery_days: 9 },
        ],
    },
];

/// Keyword-matched base prices for common product families.
const PRODUCT_PRICING: &[(&str, f64)] = &[
    ("laptop", 800.0),
    ("mouse", 10.0),
    ("keyboard", 40.0),
    ("cable", 3.0),
    ("chair", 120.0),
    ("lamp", 15.0),
    ("paper", 2.0),
    ("pen", 3.0),
    ("stand", 25.0),
    ("hdmi", 6.0),
];

const DEFAULT_BASE_PRICE: f64 = 50.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredVendor {
    pub vendor_name: String,
    pub source: String,
    pub country: String,
    pub rating: f64,
    /// Unit price after any bulk discount.
    pub unit_price: f64,
    pub original_price: f64,
    /// Bulk discount percentage applied to the original price.
    pub discount: u32,
    pub minimum_order: u32,
    pub delivery_time: u32,
    /// Absent when the requested quantity is below the minimum order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    pub available: bool,
    pub product_name: String,
    pub verified: bool,
    pub shipping_included: bool,
    /// Calendar date, `YYYY-MM-DD`.
    pub estimated_arrival: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverySearch {
    pub product_name: String,
    pub total_results: usize,
    pub results: Vec<DiscoveredVendor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_deal: Option<DiscoveredVendor>,
    pub average_price: f64,
}

/// Search every seeded marketplace for `product_name` at the requested
/// quantity, using the caller's randomness source for price jitter.
///
/// Results are sorted best value first, with vendors whose minimum order
/// exceeds the quantity pushed to the back.
pub fn search_marketplaces<R: Rng>(
    product_name: &str,
    quantity: u32,
    rng: &mut R,
) -> DiscoverySearch {
    let base_price = base_price_for(product_name);
    let quantity = quantity.max(1);

    let mut results = Vec::new();
    for marketplace in MARKETPLACES {
        for seed in marketplace.vendors {
            results.push(quote(marketplace.source, seed, product_name, quantity, base_price, rng));
        }
    }

    results.sort_by(|a, b| {
        b.available
            .cmp(&a.available)
            .then_with(|| value_score(b).total_cmp(&value_score(a)))
    });

    let average_price = if results.is_empty() {
        0.0
    } else {
        round2(results.iter().map(|vendor| vendor.unit_price).sum::<f64>() / results.len() as f64)
    };
    let best_deal = results.iter().find(|vendor| vendor.available).cloned();

    DiscoverySearch {
        product_name: product_name.to_string(),
        total_results: results.len(),
        results,
        best_deal,
        average_price,
    }
}

/// [`search_marketplaces`] with thread-local randomness.
pub fn search(product_name: &str, quantity: u32) -> DiscoverySearch {
    search_marketplaces(product_name, quantity, &mut rand::thread_rng())
}

/// Convert search results into the vendor schema the recommendation
/// engine consumes, so discovered and registry vendors can be pooled.
pub fn to_vendor_pool(search: &DiscoverySearch) -> Vec<Vendor> {
    search
        .results
        .iter()
        .enumerate()
        .map(|(index, discovered)| Vendor {
            id: format!("discovered_{index}"),
            name: discovered.vendor_name.clone(),
            source: discovered.source.clone(),
            is_online: true,
            country: discovered.country.clone(),
            rating: discovered.rating,
            delivery_time: Some(discovered.delivery_time),
            products: vec![VendorProduct {
                item_name: discovered.product_name.clone(),
                price: discovered.unit_price,
                moq: discovered.minimum_order,
                lead_time: Some(discovered.delivery_time),
            }],
            performance: VendorPerformance::default(),
        })
        .collect()
}

fn quote<R: Rng>(
    source: &str,
    seed: &SeedVendor,
    product_name: &str,
    quantity: u32,
    base_price: f64,
    rng: &mut R,
) -> DiscoveredVendor {
    let location_multiplier = match seed.country {
        "China" => 0.7,
        "India" => 0.8,
        "USA" => 1.2,
        _ => 1.0,
    };
    let rating_multiplier = 0.9 + seed.rating / 10.0;
    let jitter = 0.9 + rng.gen::<f64>() * 0.2;

    let original_price = round2(base_price * location_multiplier * rating_multiplier * jitter);
    let discount = bulk_discount(quantity);
    let unit_price = round2(original_price * (1.0 - f64::from(discount) / 100.0));

    let available = quantity >= seed.min_order;
    let shipping_included = seed.country == "USA";
    let estimated_arrival = (Utc::now().date_naive()
        + Duration::days(i64::from(seed.delivery_days)))
    .format("%Y-%m-%d")
    .to_string();

    DiscoveredVendor {
        vendor_name: seed.name.to_string(),
        source: source.to_string(),
        country: seed.country.to_string(),
        rating: seed.rating,
        unit_price,
        original_price,
        discount,
        minimum_order: seed.min_order,
        delivery_time: seed.delivery_days,
        total_cost: available.then(|| round2(unit_price * f64::from(quantity))),
        available,
        product_name: product_name.to_string(),
        verified: seed.rating >= 4.5,
        shipping_included,
        estimated_arrival,
    }
}

fn base_price_for(product_name: &str) -> f64 {
    let lowered = product_name.to_lowercase();
    PRODUCT_PRICING
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|&(_, price)| price)
        .unwrap_or(DEFAULT_BASE_PRICE)
}

fn bulk_discount(quantity: u32) -> u32 {
    if quantity >= 100 {
        15
    } else if quantity >= 50 {
        10
    } else if quantity >= 20 {
        5
    } else {
        0
    }
}

fn value_score(vendor: &DiscoveredVendor) -> f64 {
    let shipping_bonus = if vendor.shipping_included { 1.1 } else { 1.0 };
    vendor.rating / vendor.unit_price * shipping_bonus
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
