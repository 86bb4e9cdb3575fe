//! Human-readable justification strings for recommendations.

use super::types::{Item, ScoredVendor};

const CLAUSE_SEPARATOR: &str = " \u{2022} ";

/// Build the advisory rationale for choosing `vendor` for `item`.
///
/// Clauses appear in a fixed order and each is emitted only when its
/// trigger holds, so the same inputs always produce the same string.
/// The output is display text only; nothing downstream parses it.
pub fn build_reasoning(item: &Item, vendor: &ScoredVendor, quantity: u32) -> String {
    let mut clauses = Vec::with_capacity(5);

    if vendor.country.is_empty() || vendor.country == "N/A" {
        clauses.push(format!("Sourced from {}", vendor.vendor_source));
    } else {
        clauses.push(format!("Sourced from {} ({})", vendor.vendor_source, vendor.country));
    }

    if vendor.estimated_savings > 0.0 {
        clauses.push(format!(
            "Save ${:.2} compared to average market price",
            vendor.estimated_savings
        ));
    }

    if vendor.rating >= 4.0 {
        clauses.push(format!("High vendor rating ({}/5)", vendor.rating));
    }

    if vendor.on_time_delivery >= 90.0 {
        clauses.push(format!("Reliable delivery record ({}%)", vendor.on_time_delivery));
    }

    let supply_days = if item.average_daily_sales > 0.0 {
        (f64::from(quantity) / item.average_daily_sales).round()
    } else {
        30.0
    };
    clauses.push(format!("Optimal quantity for {supply_days:.0} days of sales"));

    clauses.join(CLAUSE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(savings: f64, rating: f64, on_time: f64) -> ScoredVendor {
        ScoredVendor {
            vendor_id: "v1".to_string(),
            vendor_name: "Acme".to_string(),
            vendor_source: "Database".to_string(),
            is_online: false,
            country: "N/A".to_string(),
            price: 5.0,
            total_cost: 150.0,
            estimated_savings: savings,
            delivery_time: 7,
            confidence: 0.9,
            rating,
            on_time_delivery: on_time,
            stock_available: true,
            score: 0.9,
            price_rank: 1,
            overall_rank: 1,
        }
    }

    #[test]
    fn all_clauses_fire_in_order() {
        let item = Item::new("i1", "USB Cable").with_daily_sales(1.0);
        let reasoning = build_reasoning(&item, &scored(60.0, 4.5, 95.0), 30);

        assert_eq!(
            reasoning,
            "Sourced from Database \u{2022} Save $60.00 compared to average market price \
             \u{2022} High vendor rating (4.5/5) \u{2022} Reliable delivery record (95%) \
             \u{2022} Optimal quantity for 30 days of sales"
        );
    }

    #[test]
    fn conditional_clauses_are_skipped_below_thresholds() {
        let item = Item::new("i1", "USB Cable").with_daily_sales(2.0);
        let reasoning = build_reasoning(&item, &scored(-10.0, 3.9, 89.0), 30);

        assert!(!reasoning.contains("Save $"));
        assert!(!reasoning.contains("vendor rating"));
        assert!(!reasoning.contains("delivery record"));
        assert!(reasoning.ends_with("Optimal quantity for 15 days of sales"));
    }

    #[test]
    fn country_suffixes_the_provenance_clause() {
        let item = Item::new("i1", "USB Cable");
        let mut vendor = scored(0.0, 3.0, 50.0);
        vendor.vendor_source = "Alibaba".to_string();
        vendor.country = "China".to_string();

        let reasoning = build_reasoning(&item, &vendor, 30);

        assert!(reasoning.starts_with("Sourced from Alibaba (China)"));
    }

    #[test]
    fn zero_daily_sales_falls_back_to_thirty_days() {
        let item = Item::new("i1", "USB Cable");
        let reasoning = build_reasoning(&item, &scored(0.0, 3.0, 50.0), 45);

        assert!(reasoning.ends_with("Optimal quantity for 30 days of sales"));
    }
}
