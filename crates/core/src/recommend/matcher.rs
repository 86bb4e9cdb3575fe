//! Vendor matching: pair an item with every vendor that plausibly stocks it.

use super::types::{Item, MatchedVendor, Vendor};
use super::DEFAULT_LEAD_TIME_DAYS;

/// Return one [`MatchedVendor`] per vendor with at least one product whose
/// name contains the item's name or vice versa, case-insensitively.
///
/// The first matching product wins per vendor and vendor-pool order is
/// preserved. An empty result is a valid outcome, not an error.
pub fn match_vendors(item: &Item, vendors: &[Vendor]) -> Vec<MatchedVendor> {
    let item_name = item.name.to_lowercase();

    vendors
        .iter()
        .filter_map(|vendor| {
            vendor
                .products
                .iter()
                .find(|product| {
                    let product_name = product.item_name.to_lowercase();
                    product_name.contains(&item_name) || item_name.contains(&product_name)
                })
                .map(|product| MatchedVendor {
                    vendor_id: vendor.id.clone(),
                    vendor_name: vendor.name.clone(),
                    source: vendor.source.clone(),
                    is_online: vendor.is_online,
                    country: vendor.country.clone(),
                    price: product.price,
                    moq: product.moq,
                    lead_time: product
                        .lead_time
                        .or(vendor.delivery_time)
                        .unwrap_or(DEFAULT_LEAD_TIME_DAYS),
                    rating: vendor.rating,
                    on_time_delivery: vendor.performance.on_time_delivery,
                })
        })
        .collect()
}
