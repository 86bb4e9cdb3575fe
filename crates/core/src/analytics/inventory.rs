//! Inventory health analysis: overview metrics, alerts, opportunities,
//! and rule-based action items.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::recommend::Item;

use super::{round2, FAST_MOVING_THRESHOLD, SLOW_MOVING_STOCK_FLOOR, SLOW_MOVING_THRESHOLD};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryInsights {
    pub overview: InventoryOverview,
    pub alerts: Vec<Alert>,
    pub opportunities: Vec<Opportunity>,
    pub trends: InventoryTrends,
    pub recommendations: Vec<RecommendedAction>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryOverview {
    pub total_value: f64,
    pub average_stock_level: f64,
    pub low_stock_count: usize,
    pub high_value_items: Vec<String>,
    /// 0-100, penalized by low-stock and out-of-stock ratios.
    pub health_score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub level: AlertLevel,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_savings: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryTrends {
    pub order_frequency: usize,
    /// Category name paired with its stock value, highest first.
    pub top_categories: Vec<(String, f64)>,
    pub seasonal_patterns: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedAction {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub impact: String,
}

/// Analyze the full item list into a single insights report.
///
/// `recent_order_count` is the number of purchase orders placed in the
/// reporting window; it feeds the trends section only.
pub fn analyze_inventory(items: &[Item], recent_order_count: usize) -> InventoryInsights {
    InventoryInsights {
        overview: build_overview(items),
        alerts: build_alerts(items),
        opportunities: build_opportunities(items),
        trends: build_trends(items, recent_order_count),
        recommendations: rule_based_recommendations(items),
    }
}

fn build_overview(items: &[Item]) -> InventoryOverview {
    if items.is_empty() {
        return InventoryOverview::default();
    }

    let total_value: f64 = items.iter().map(stock_value).sum();
    let average_stock_level =
        items.iter().map(|item| f64::from(item.current_stock)).sum::<f64>() / items.len() as f64;
    let low_stock_count = items.iter().filter(|item| is_low_stock(item)).count();

    let mut by_value: Vec<&Item> = items.iter().collect();
    by_value.sort_by(|a, b| stock_value(b).total_cmp(&stock_value(a)));
    let high_value_items = by_value.iter().take(5).map(|item| item.name.clone()).collect();

    InventoryOverview {
        total_value: round2(total_value),
        average_stock_level: round2(average_stock_level),
        low_stock_count,
        high_value_items,
        health_score: health_score(items),
    }
}

/// 0-100. Starts at 100, loses up to 30 points for the low-stock ratio and
/// 40 for the out-of-stock ratio, and gains 10 for brisk average turnover.
fn health_score(items: &[Item]) -> u32 {
    if items.is_empty() {
        return 0;
    }

    let count = items.len() as f64;
    let low_stock_ratio = items.iter().filter(|item| is_low_stock(item)).count() as f64 / count;
    let out_of_stock_ratio =
        items.iter().filter(|item| item.current_stock == 0).count() as f64 / count;

    let mut score = 100.0 - low_stock_ratio * 30.0 - out_of_stock_ratio * 40.0;

    let average_turnover =
        items.iter().map(|item| item.average_daily_sales).sum::<f64>() / count;
    if average_turnover > FAST_MOVING_THRESHOLD {
        score += 10.0;
    }

    score.round().clamp(0.0, 100.0) as u32
}

fn build_alerts(items: &[Item]) -> Vec<Alert> {
    let mut alerts = Vec::new();

    let out_of_stock: Vec<&Item> = items.iter().filter(|item| item.current_stock == 0).collect();
    if !out_of_stock.is_empty() {
        alerts.push(Alert {
            level: AlertLevel::Critical,
            kind: "out_of_stock".to_string(),
            message: format!("{} items are out of stock", out_of_stock.len()),
            items: names(&out_of_stock, 5),
        });
    }

    let low_stock: Vec<&Item> =
        items.iter().filter(|item| item.current_stock > 0 && is_low_stock(item)).collect();
    if !low_stock.is_empty() {
        alerts.push(Alert {
            level: AlertLevel::Warning,
            kind: "low_stock".to_string(),
            message: format!("{} items need reordering soon", low_stock.len()),
            items: names(&low_stock, 5),
        });
    }

    let slow_moving: Vec<&Item> = items
        .iter()
        .filter(|item| {
            item.average_daily_sales < SLOW_MOVING_THRESHOLD
                && item.current_stock > SLOW_MOVING_STOCK_FLOOR
        })
        .collect();
    if !slow_moving.is_empty() {
        alerts.push(Alert {
            level: AlertLevel::Info,
            kind: "slow_moving".to_string(),
            message: format!("{} items are moving slowly", slow_moving.len()),
            items: names(&slow_moving, 5),
        });
    }

    alerts
}

fn build_opportunities(items: &[Item]) -> Vec<Opportunity> {
    let mut opportunities = Vec::new();

    let fast_moving: Vec<&Item> =
        items.iter().filter(|item| item.average_daily_sales > FAST_MOVING_THRESHOLD).collect();
    if !fast_moving.is_empty() {
        let potential_savings: f64 =
            fast_moving.iter().take(3).map(|item| item.cost_price * 10.0).sum();
        opportunities.push(Opportunity {
            kind: "promotion".to_string(),
            title: "High Demand Items".to_string(),
            description: format!(
                "{} items have high demand. Consider bulk purchasing or promotions.",
                fast_moving.len()
            ),
            items: names(&fast_moving, 3),
            potential_savings: Some(round2(potential_savings)),
        });
    }

    let high_margin: Vec<&Item> = items
        .iter()
        .filter(|item| item.cost_price > 0.0)
        .filter(|item| (item.selling_price - item.cost_price) / item.cost_price > 0.5)
        .collect();
    if !high_margin.is_empty() {
        opportunities.push(Opportunity {
            kind: "profit".to_string(),
            title: "High Margin Items".to_string(),
            description: format!(
                "{} items have excellent profit margins. Focus on these.",
                high_margin.len()
            ),
            items: names(&high_margin, 3),
            potential_savings: None,
        });
    }

    opportunities
}

fn build_trends(items: &[Item], recent_order_count: usize) -> InventoryTrends {
    let mut by_category: HashMap<String, f64> = HashMap::new();
    for item in items {
        let category = item.category.clone().unwrap_or_else(|| "Uncategorized".to_string());
        *by_category.entry(category).or_insert(0.0) += stock_value(item);
    }

    let mut top_categories: Vec<(String, f64)> = by_category.into_iter().collect();
    top_categories.sort_by(|a, b| b.1.total_cmp(&a.1));
    top_categories.truncate(5);

    InventoryTrends {
        order_frequency: recent_order_count,
        top_categories,
        seasonal_patterns: "Analysis requires more historical data".to_string(),
    }
}

fn rule_based_recommendations(items: &[Item]) -> Vec<RecommendedAction> {
    let mut recommendations = Vec::new();

    let low_stock_count = items.iter().filter(|item| is_low_stock(item)).count();
    if low_stock_count > 0 {
        recommendations.push(RecommendedAction {
            title: "Urgent Restocking Required".to_string(),
            description: format!(
                "{low_stock_count} items need immediate restocking to avoid stockouts."
            ),
            priority: "high".to_string(),
            impact: "Prevents lost sales and customer dissatisfaction".to_string(),
        });
    }

    recommendations
}

fn is_low_stock(item: &Item) -> bool {
    item.current_stock <= item.reorder_point
}

fn stock_value(item: &Item) -> f64 {
    f64::from(item.current_stock) * item.cost_price
}

fn names(items: &[&Item], limit: usize) -> Vec<String> {
    items.iter().take(limit).map(|item| item.name.clone()).collect()
}
