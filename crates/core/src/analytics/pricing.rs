//! Rule-based pricing suggestions.

use serde::{Deserialize, Serialize};

use crate::recommend::Item;

use super::round2;

/// Margins below this fraction trigger an increase suggestion.
const LOW_MARGIN: f64 = 0.2;

/// Margins above this fraction on slow movers trigger a decrease.
const HIGH_MARGIN: f64 = 0.6;

/// Items evaluated per request. The original service capped the scan for
/// latency; the cap is kept as part of the contract.
const MAX_SUGGESTIONS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceAction {
    Maintain,
    Increase,
    Decrease,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSuggestion {
    pub item_id: String,
    pub item_name: String,
    pub current_price: f64,
    /// Current margin as a percentage of cost.
    pub current_margin: f64,
    pub recommendation: PriceAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// Suggest price adjustments for the first [`MAX_SUGGESTIONS`] items.
///
/// Items with a zero or negative cost price have no meaningful margin and
/// always get a maintain suggestion.
pub fn optimize_pricing(items: &[Item]) -> Vec<PriceSuggestion> {
    items.iter().take(MAX_SUGGESTIONS).map(suggest).collect()
}

fn suggest(item: &Item) -> PriceSuggestion {
    let margin = if item.cost_price > 0.0 {
        (item.selling_price - item.cost_price) / item.cost_price
    } else {
        0.0
    };

    let mut suggestion = PriceSuggestion {
        item_id: item.id.clone(),
        item_name: item.name.clone(),
        current_price: item.selling_price,
        current_margin: round2(margin * 100.0),
        recommendation: PriceAction::Maintain,
        suggested_price: None,
        reasoning: None,
    };

    if item.cost_price <= 0.0 {
        return suggestion;
    }

    if margin < LOW_MARGIN {
        suggestion.recommendation = PriceAction::Increase;
        suggestion.suggested_price = Some(round2(item.cost_price * 1.3));
        suggestion.reasoning = Some("Margin too low, recommend 30% markup".to_string());
    } else if margin > HIGH_MARGIN && item.average_daily_sales < 1.0 {
        suggestion.recommendation = PriceAction::Decrease;
        suggestion.suggested_price = Some(round2(item.cost_price * 1.4));
        suggestion.reasoning =
            Some("High margin but slow sales, consider price reduction".to_string());
    }

    suggestion
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, cost: f64, selling: f64, daily_sales: f64) -> Item {
        let mut item = Item::new(id, format!("Item {id}")).with_daily_sales(daily_sales);
        item.cost_price = cost;
        item.selling_price = selling;
        item
    }

    #[test]
    fn thin_margin_gets_an_increase_to_thirty_percent_markup() {
        let suggestions = optimize_pricing(&[item("i1", 10.0, 11.0, 2.0)]);

        assert_eq!(suggestions[0].recommendation, PriceAction::Increase);
        assert_eq!(suggestions[0].suggested_price, Some(13.0));
        assert_eq!(suggestions[0].current_margin, 10.0);
    }

    #[test]
    fn fat_margin_on_a_slow_mover_gets_a_decrease() {
        let suggestions = optimize_pricing(&[item("i1", 10.0, 20.0, 0.5)]);

        assert_eq!(suggestions[0].recommendation, PriceAction::Decrease);
        assert_eq!(suggestions[0].suggested_price, Some(14.0));
    }

    #[test]
    fn fat_margin_on_a_fast_mover_is_left_alone() {
        let suggestions = optimize_pricing(&[item("i1", 10.0, 20.0, 3.0)]);

        assert_eq!(suggestions[0].recommendation, PriceAction::Maintain);
        assert!(suggestions[0].suggested_price.is_none());
    }

    #[test]
    fn zero_cost_items_are_never_repriced() {
        let suggestions = optimize_pricing(&[item("i1", 0.0, 5.0, 0.1)]);

        assert_eq!(suggestions[0].recommendation, PriceAction::Maintain);
        assert_eq!(suggestions[0].current_margin, 0.0);
    }

    #[test]
    fn scan_is_capped_at_ten_items() {
        let items: Vec<Item> =
            (0..15).map(|i| item(&format!("i{i}"), 10.0, 15.0, 2.0)).collect();

        assert_eq!(optimize_pricing(&items).len(), 10);
    }
}
