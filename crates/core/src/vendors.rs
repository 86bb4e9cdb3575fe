//! Vendor performance analysis over order history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::recommend::Vendor;

/// Response time assumed when a vendor has never been measured, in hours.
const DEFAULT_RESPONSE_TIME_HOURS: f64 = 24.0;

/// Response times beyond this mark a communication weakness, in hours.
const SLOW_RESPONSE_HOURS: f64 = 48.0;

/// Order count at which the relationship component of the score maxes out.
const ESTABLISHED_ORDER_COUNT: usize = 20;

/// One purchase order placed with a vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub total: f64,
    pub status: String,
    #[serde(default)]
    pub expected_delivery: Option<DateTime<Utc>>,
    #[serde(default)]
    pub actual_delivery: Option<DateTime<Utc>>,
}

impl OrderRecord {
    fn is_completed(&self) -> bool {
        self.status == "received"
    }

    fn was_on_time(&self) -> Option<bool> {
        match (self.actual_delivery, self.expected_delivery) {
            (Some(actual), Some(expected)) => Some(actual <= expected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorAnalysis {
    pub vendor_id: String,
    pub vendor_name: String,
    pub performance_metrics: PerformanceMetrics,
    pub strengths: Vec<Strength>,
    pub weaknesses: Vec<Weakness>,
    pub recommendations: Vec<String>,
    /// Composite 0-100 score across rating, delivery, history, and
    /// responsiveness.
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub total_orders: usize,
    pub completed_orders: usize,
    pub on_time_delivery_rate: f64,
    pub average_order_value: f64,
    pub rating: f64,
    pub response_time: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strength {
    pub category: String,
    pub description: String,
    pub impact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weakness {
    pub category: String,
    pub description: String,
    pub severity: String,
}

/// Analyze one vendor's track record into a scored report.
pub fn analyze_vendor(vendor: &Vendor, orders: &[OrderRecord]) -> VendorAnalysis {
    VendorAnalysis {
        vendor_id: vendor.id.clone(),
        vendor_name: vendor.name.clone(),
        performance_metrics: performance_metrics(vendor, orders),
        strengths: identify_strengths(vendor, orders),
        weaknesses: identify_weaknesses(vendor, orders),
        recommendations: rule_based_recommendations(vendor, orders),
        score: vendor_score(vendor, orders),
    }
}

fn performance_metrics(vendor: &Vendor, orders: &[OrderRecord]) -> PerformanceMetrics {
    let response_time = vendor.performance.response_time.unwrap_or(0.0);

    if orders.is_empty() {
        return PerformanceMetrics {
            total_orders: 0,
            completed_orders: 0,
            on_time_delivery_rate: vendor.performance.on_time_delivery,
            average_order_value: 0.0,
            rating: vendor.rating,
            response_time,
        };
    }

    let completed: Vec<&OrderRecord> = orders.iter().filter(|order| order.is_completed()).collect();
    let on_time = completed.iter().filter(|order| order.was_on_time() == Some(true)).count();
    let on_time_rate = if completed.is_empty() {
        0.0
    } else {
        on_time as f64 / completed.len() as f64 * 100.0
    };

    let average_order_value =
        orders.iter().map(|order| order.total).sum::<f64>() / orders.len() as f64;

    PerformanceMetrics {
        total_orders: orders.len(),
        completed_orders: completed.len(),
        on_time_delivery_rate: round2(on_time_rate),
        average_order_value: round2(average_order_value),
        rating: vendor.rating,
        response_time,
    }
}

fn identify_strengths(vendor: &Vendor, orders: &[OrderRecord]) -> Vec<Strength> {
    let mut strengths = Vec::new();

    if vendor.rating >= 4.0 {
        strengths.push(Strength {
            category: "Quality".to_string(),
            description: format!("Excellent rating of {}/5", vendor.rating),
            impact: "high".to_string(),
        });
    }

    if vendor.performance.on_time_delivery >= 95.0 {
        strengths.push(Strength {
            category: "Reliability".to_string(),
            description: format!("{}% on-time delivery", vendor.performance.on_time_delivery),
            impact: "high".to_string(),
        });
    }

    if orders.len() > 10 {
        strengths.push(Strength {
            category: "Relationship".to_string(),
            description: format!("Established relationship with {} orders", orders.len()),
            impact: "medium".to_string(),
        });
    }

    strengths
}

fn identify_weaknesses(vendor: &Vendor, _orders: &[OrderRecord]) -> Vec<Weakness> {
    let mut weaknesses = Vec::new();

    if vendor.rating < 3.0 {
        weaknesses.push(Weakness {
            category: "Quality".to_string(),
            description: format!("Low rating of {}/5", vendor.rating),
            severity: "high".to_string(),
        });
    }

    if vendor.performance.on_time_delivery < 80.0 {
        weaknesses.push(Weakness {
            category: "Delivery".to_string(),
            description: format!(
                "Only {}% on-time delivery",
                vendor.performance.on_time_delivery
            ),
            severity: "high".to_string(),
        });
    }

    if vendor.performance.response_time.unwrap_or(0.0) > SLOW_RESPONSE_HOURS {
        weaknesses.push(Weakness {
            category: "Communication".to_string(),
            description: format!(
                "Slow response time ({} hours)",
                vendor.performance.response_time.unwrap_or(0.0)
            ),
            severity: "medium".to_string(),
        });
    }

    weaknesses
}

/// Weighted composite: rating and on-time delivery 30% each, order
/// history and responsiveness 20% each.
fn vendor_score(vendor: &Vendor, orders: &[OrderRecord]) -> f64 {
    let rating_component = vendor.rating / 5.0 * 30.0;
    let delivery_component = vendor.performance.on_time_delivery / 100.0 * 30.0;
    let history_component =
        (orders.len() as f64 / ESTABLISHED_ORDER_COUNT as f64).min(1.0) * 20.0;

    let response_time =
        vendor.performance.response_time.unwrap_or(DEFAULT_RESPONSE_TIME_HOURS);
    let response_component =
        ((SLOW_RESPONSE_HOURS - response_time) / SLOW_RESPONSE_HOURS).max(0.0) * 20.0;

    round2(rating_component + delivery_component + history_component + response_component)
}

fn rule_based_recommendations(vendor: &Vendor, orders: &[OrderRecord]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if vendor.rating < 3.0 {
        recommendations
            .push("Consider finding alternative vendors with better ratings".to_string());
    }

    if vendor.performance.on_time_delivery < 80.0 {
        recommendations
            .push("Discuss delivery improvements or add buffer time to orders".to_string());
    }

    if orders.is_empty() {
        recommendations.push("Start with small trial orders to assess reliability".to_string());
    } else {
        recommendations
            .push("Continue monitoring performance and adjust order frequency".to_string());
    }

    recommendations
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
