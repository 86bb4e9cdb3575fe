//! Recommendation assembly.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::errors::DomainError;
use crate::insight::{DisabledInsights, InsightSource};

use super::matcher::match_vendors;
use super::quantity::plan_order_quantity;
use super::reasoning::build_reasoning;
use super::scoring::{BernoulliStockSignal, StockSignal, VendorRanker};
use super::types::{BackupVendor, Item, Recommendation, Vendor};
use super::{RecommendResult, DEFAULT_TOP_VENDORS};

/// Per-batch orchestrator: matches, plans, ranks, and explains each item,
/// then annotates the batch through the insight collaborator.
///
/// Holds no per-request state; one engine instance serves every request.
pub struct RecommendationEngine {
    ranker: VendorRanker,
    stock_signal: Arc<dyn StockSignal>,
    insights: Arc<dyn InsightSource>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self {
            ranker: VendorRanker::default(),
            stock_signal: Arc::new(BernoulliStockSignal::default()),
            insights: Arc::new(DisabledInsights),
        }
    }

    pub fn with_stock_signal(mut self, stock_signal: Arc<dyn StockSignal>) -> Self {
        self.stock_signal = stock_signal;
        self
    }

    pub fn with_insights(mut self, insights: Arc<dyn InsightSource>) -> Self {
        self.insights = insights;
        self
    }

    /// Produce one recommendation per recommendable item.
    ///
    /// Items with no matching vendor, a zero planned quantity, or no
    /// MOQ-eligible vendor are skipped silently. Only malformed input is
    /// an error. Insight enrichment runs once over the finished batch and
    /// its failure never discards computed recommendations.
    pub async fn plan_recommendations(
        &self,
        items: &[Item],
        vendors: &[Vendor],
    ) -> RecommendResult<Vec<Recommendation>> {
        validate_items(items)?;
        validate_vendors(vendors)?;

        let mut recommendations = Vec::with_capacity(items.len());

        for item in items {
            let matched = match_vendors(item, vendors);
            if matched.is_empty() {
                debug!(event_name = "item_skipped", item_id = %item.id, reason = "no_match");
                continue;
            }

            let quantity = plan_order_quantity(item);
            if quantity == 0 {
                debug!(event_name = "item_skipped", item_id = %item.id, reason = "zero_quantity");
                continue;
            }

            let ranked =
                self.ranker.rank(&matched, quantity, DEFAULT_TOP_VENDORS, &*self.stock_signal);
            let Some(primary) = ranked.first() else {
                debug!(event_name = "item_skipped", item_id = %item.id, reason = "moq_filtered");
                continue;
            };

            let reasoning = build_reasoning(item, primary, quantity);
            let backup_vendors: Vec<BackupVendor> = ranked[1..]
                .iter()
                .enumerate()
                .map(|(index, vendor)| BackupVendor { priority: index + 2, vendor: vendor.clone() })
                .collect();

            recommendations.push(Recommendation {
                item_id: item.id.clone(),
                item_name: item.name.clone(),
                current_stock: item.current_stock,
                reorder_point: item.reorder_point,
                recommended_quantity: quantity,
                vendor_id: primary.vendor_id.clone(),
                vendor_name: primary.vendor_name.clone(),
                vendor_source: primary.vendor_source.clone(),
                is_online: primary.is_online,
                country: primary.country.clone(),
                price: primary.price,
                total_cost: primary.total_cost,
                estimated_savings: primary.estimated_savings,
                delivery_time: primary.delivery_time,
                confidence: primary.confidence,
                rating: primary.rating,
                stock_available: primary.stock_available,
                reasoning,
                has_backup: !backup_vendors.is_empty(),
                backup_vendors,
                total_vendors_found: matched.len(),
                ai_insight: None,
            });
        }

        self.annotate(items, &mut recommendations).await;

        Ok(recommendations)
    }

    /// Enrichment only. A failed or short insight batch leaves the
    /// affected recommendations unannotated.
    async fn annotate(&self, items: &[Item], recommendations: &mut [Recommendation]) {
        if recommendations.is_empty() {
            return;
        }

        match self.insights.insights(items, recommendations).await {
            Ok(insights) => {
                for (recommendation, insight) in recommendations.iter_mut().zip(insights) {
                    recommendation.ai_insight = Some(insight);
                }
            }
            Err(error) => {
                warn!(event_name = "insight_fetch_failed", error = %error);
            }
        }
    }
}

fn validate_items(items: &[Item]) -> RecommendResult<()> {
    for (index, item) in items.iter().enumerate() {
        if item.id.trim().is_empty() {
            return Err(DomainError::InvalidItem { index, reason: "id must not be empty".into() });
        }
        if item.name.trim().is_empty() {
            return Err(DomainError::InvalidItem {
                index,
                reason: "name must not be empty".into(),
            });
        }
        if item.average_daily_sales < 0.0 {
            return Err(DomainError::InvalidItem {
                index,
                reason: "averageDailySales must not be negative".into(),
            });
        }
    }
    Ok(())
}

fn validate_vendors(vendors: &[Vendor]) -> RecommendResult<()> {
    for (index, vendor) in vendors.iter().enumerate() {
        if vendor.id.trim().is_empty() {
            return Err(DomainError::InvalidVendor {
                index,
                reason: "id must not be empty".into(),
            });
        }
        if vendor.name.trim().is_empty() {
            return Err(DomainError::InvalidVendor {
                index,
                reason: "name must not be empty".into(),
            });
        }
        if !(0.0..=5.0).contains(&vendor.rating) {
            return Err(DomainError::InvalidVendor {
                index,
                reason: "rating must be between 0 and 5".into(),
            });
        }
        if !(0.0..=100.0).contains(&vendor.performance.on_time_delivery) {
            return Err(DomainError::InvalidVendor {
                index,
                reason: "onTimeDelivery must be between 0 and 100".into(),
            });
        }
        if vendor.products.iter().any(|product| product.price <= 0.0) {
            return Err(DomainError::InvalidVendor {
                index,
                reason: "product prices must be positive".into(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InsightError;
    use crate::recommend::scoring::AlwaysInStock;
    use crate::recommend::types::{VendorPerformance, VendorProduct};
    use async_trait::async_trait;

    struct FailingInsights;

    #[async_trait]
    impl InsightSource for FailingInsights {
        async fn insights(
            &self,
            _items: &[Item],
            _recommendations: &[Recommendation],
        ) -> Result<Vec<String>, InsightError> {
            Err(InsightError("collaborator unavailable".to_string()))
        }
    }

    struct CannedInsights(Vec<String>);

    #[async_trait]
    impl InsightSource for CannedInsights {
        async fn insights(
            &self,
            _items: &[Item],
            _recommendations: &[Recommendation],
        ) -> Result<Vec<String>, InsightError> {
            Ok(self.0.clone())
        }
    }

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new().with_stock_signal(Arc::new(AlwaysInStock))
    }

    fn usb_cable_item() -> Item {
        Item::new("I1", "USB Cable").with_stock(2, 10).with_daily_sales(1.0)
    }

    fn usb_cable_vendors() -> Vec<Vendor> {
        vec![
            vendor("V1", "CablePro", 5.0, 1, 4.5, 95.0),
            vendor("V2", "WireHouse", 7.0, 5, 3.0, 80.0),
        ]
    }

    fn vendor(id: &str, name: &str, price: f64, moq: u32, rating: f64, on_time: f64) -> Vendor {
        Vendor {
            id: id.to_string(),
            name: name.to_string(),
            source: "Database".to_string(),
            is_online: false,
            country: "N/A".to_string(),
            rating,
            delivery_time: None,
            products: vec![VendorProduct {
                item_name: "USB Cable".to_string(),
                price,
                moq,
                lead_time: None,
            }],
            performance: VendorPerformance { on_time_delivery: on_time, response_time: None },
        }
    }

    #[tokio::test]
    async fn assembles_primary_and_backup_for_the_reference_scenario() {
        let recommendations = engine()
            .plan_recommendations(&[usb_cable_item()], &usb_cable_vendors())
            .await
            .expect("plan");

        assert_eq!(recommendations.len(), 1);
        let recommendation = &recommendations[0];
        assert_eq!(recommendation.recommended_quantity, 30);
        assert_eq!(recommendation.vendor_id, "V1");
        assert!((recommendation.price - 5.0).abs() < f64::EPSILON);
        assert_eq!(recommendation.total_vendors_found, 2);
        assert!(recommendation.has_backup);
        assert_eq!(recommendation.backup_vendors.len(), 1);
        assert_eq!(recommendation.backup_vendors[0].priority, 2);
        assert_eq!(recommendation.backup_vendors[0].vendor.vendor_id, "V2");
    }

    #[tokio::test]
    async fn unmatched_items_are_skipped_without_error() {
        let items = vec![usb_cable_item(), Item::new("I2", "Standing Desk")];

        let recommendations =
            engine().plan_recommendations(&items, &usb_cable_vendors()).await.expect("plan");

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].item_id, "I1");
    }

    #[tokio::test]
    async fn full_shelf_item_is_skipped() {
        let stocked = Item::new("I1", "USB Cable").with_stock(50, 10).with_max_capacity(50);

        let recommendations =
            engine().plan_recommendations(&[stocked], &usb_cable_vendors()).await.expect("plan");

        assert!(recommendations.is_empty());
    }

    #[tokio::test]
    async fn insight_failure_degrades_gracefully() {
        let annotated = engine()
            .with_insights(Arc::new(CannedInsights(vec!["Stock up ahead of Q4.".to_string()])))
            .plan_recommendations(&[usb_cable_item()], &usb_cable_vendors())
            .await
            .expect("plan");
        let degraded = engine()
            .with_insights(Arc::new(FailingInsights))
            .plan_recommendations(&[usb_cable_item()], &usb_cable_vendors())
            .await
            .expect("plan");

        assert_eq!(annotated[0].ai_insight.as_deref(), Some("Stock up ahead of Q4."));
        assert!(degraded[0].ai_insight.is_none());
        assert_eq!(annotated[0].vendor_id, degraded[0].vendor_id);
        assert_eq!(annotated[0].recommended_quantity, degraded[0].recommended_quantity);
    }

    #[tokio::test]
    async fn short_insight_batches_leave_the_tail_unannotated() {
        let items = vec![
            usb_cable_item(),
            Item::new("I2", "USB Cable Pro").with_stock(1, 5).with_daily_sales(0.5),
        ];
        let mut vendors = usb_cable_vendors();
        vendors.push(vendor("V3", "ProCables", 9.0, 1, 4.0, 92.0));

        let recommendations = engine()
            .with_insights(Arc::new(CannedInsights(vec!["First only.".to_string()])))
            .plan_recommendations(&items, &vendors)
            .await
            .expect("plan");

        assert_eq!(recommendations.len(), 2);
        assert!(recommendations[0].ai_insight.is_some());
        assert!(recommendations[1].ai_insight.is_none());
    }

    #[tokio::test]
    async fn blank_item_identity_is_rejected_with_its_index() {
        let items = vec![usb_cable_item(), Item::new("", "USB Cable")];

        let error = engine()
            .plan_recommendations(&items, &usb_cable_vendors())
            .await
            .expect_err("should reject");

        assert_eq!(
            error,
            DomainError::InvalidItem { index: 1, reason: "id must not be empty".to_string() }
        );
    }

    #[tokio::test]
    async fn out_of_range_vendor_rating_is_rejected() {
        let mut vendors = usb_cable_vendors();
        vendors[1].rating = 6.0;

        let error = engine()
            .plan_recommendations(&[usb_cable_item()], &vendors)
            .await
            .expect_err("should reject");

        assert!(matches!(error, DomainError::InvalidVendor { index: 1, .. }));
    }
}
