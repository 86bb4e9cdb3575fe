//! Vendor scoring and ranking.

use super::types::{MatchedVendor, ScoredVendor};
use super::{DOMESTIC_BONUS, STOCK_AVAILABILITY_PROBABILITY};

/// Availability oracle consulted once per ranked vendor.
///
/// Stock draws are the only nondeterminism in the ranking path, so tests
/// inject a deterministic signal instead of the Bernoulli default.
pub trait StockSignal: Send + Sync {
    fn draw(&self) -> bool;
}

/// Default signal: an independent Bernoulli draw per vendor.
#[derive(Debug, Clone, Copy)]
pub struct BernoulliStockSignal {
    pub probability: f64,
}

impl Default for BernoulliStockSignal {
    fn default() -> Self {
        Self { probability: STOCK_AVAILABILITY_PROBABILITY }
    }
}

impl StockSignal for BernoulliStockSignal {
    fn draw(&self) -> bool {
        rand::Rng::gen_bool(&mut rand::thread_rng(), self.probability)
    }
}

/// Deterministic signal for tests and dry runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysInStock;

impl StockSignal for AlwaysInStock {
    fn draw(&self) -> bool {
        true
    }
}

/// Relative weights of the four scoring components. Must sum to 1.0 for
/// the composite to stay on the intended scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingWeights {
    pub price: f64,
    pub rating: f64,
    pub reliability: f64,
    pub speed: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        super::DEFAULT_WEIGHTS
    }
}

/// Scores and orders the vendors matched for a single item.
#[derive(Debug, Clone, Copy, Default)]
pub struct VendorRanker {
    weights: RankingWeights,
}

impl VendorRanker {
    pub fn new(weights: RankingWeights) -> Self {
        Self { weights }
    }

    /// Rank the matched vendors for an order of `quantity` units and keep
    /// the best `top_n`.
    ///
    /// The market average price is taken over every matched vendor, before
    /// the MOQ filter, so savings stay comparable as the quantity changes
    /// which vendors are eligible. Vendors whose MOQ exceeds `quantity`
    /// are excluded from the ranked output entirely.
    pub fn rank(
        &self,
        matched: &[MatchedVendor],
        quantity: u32,
        top_n: usize,
        stock: &dyn StockSignal,
    ) -> Vec<ScoredVendor> {
        if matched.is_empty() {
            return Vec::new();
        }

        let average_price =
            matched.iter().map(|vendor| vendor.price).sum::<f64>() / matched.len() as f64;

        let mut scored: Vec<ScoredVendor> = matched
            .iter()
            .filter(|vendor| vendor.moq <= quantity)
            .map(|vendor| self.score_vendor(vendor, quantity, average_price, stock))
            .collect();

        assign_ranks(&mut scored);

        // Stable sort keeps match order among exact score ties.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(top_n);
        scored
    }

    fn score_vendor(
        &self,
        vendor: &MatchedVendor,
        quantity: u32,
        average_price: f64,
        stock: &dyn StockSignal,
    ) -> ScoredVendor {
        let price_score = ((1.0 / (vendor.price + 1.0)) / 0.1).min(1.0);
        let rating_score = vendor.rating / 5.0;
        let reliability_score = vendor.on_time_delivery / 100.0;
        let speed_score = (1.0 - f64::from(vendor.lead_time) / 30.0).max(0.0);

        let mut score = self.weights.price * price_score
            + self.weights.rating * rating_score
            + self.weights.reliability * reliability_score
            + self.weights.speed * speed_score;

        if vendor.country.eq_ignore_ascii_case("usa") {
            score += DOMESTIC_BONUS;
        }

        ScoredVendor {
            vendor_id: vendor.vendor_id.clone(),
            vendor_name: vendor.vendor_name.clone(),
            vendor_source: vendor.source.clone(),
            is_online: vendor.is_online,
            country: vendor.country.clone(),
            price: vendor.price,
            total_cost: vendor.price * f64::from(quantity),
            estimated_savings: (average_price - vendor.price) * f64::from(quantity),
            delivery_time: vendor.lead_time,
            confidence: score.min(0.95),
            rating: vendor.rating,
            on_time_delivery: vendor.on_time_delivery,
            stock_available: stock.draw(),
            score,
            price_rank: 0,
            overall_rank: 0,
        }
    }
}

/// Assign 1-based price and overall ranks within the eligible pool. Both
/// sequences use stable ordering, so ties rank in match order.
fn assign_ranks(scored: &mut [ScoredVendor]) {
    let mut by_price: Vec<usize> = (0..scored.len()).collect();
    by_price.sort_by(|&a, &b| scored[a].price.total_cmp(&scored[b].price));
    for (rank, index) in by_price.into_iter().enumerate() {
        scored[index].price_rank = rank + 1;
    }

    let mut by_score: Vec<usize> = (0..scored.len()).collect();
    by_score.sort_by(|&a, &b| scored[b].score.total_cmp(&scored[a].score));
    for (rank, index) in by_score.into_iter().enumerate() {
        scored[index].overall_rank = rank + 1;
    }
}
