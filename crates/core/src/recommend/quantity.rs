//! Order quantity planning.

use super::types::Item;
use super::DEMAND_HORIZON_DAYS;

/// Plan how many units of `item` to order.
///
/// The raw need is the larger of the safety-stock gap (reorder point minus
/// current stock) and the demand projection over [`DEMAND_HORIZON_DAYS`],
/// where daily sales are floored at one unit. The result is clamped to the
/// remaining shelf capacity, rounded to a tier-dependent step, and clamped
/// again so rounding never exceeds capacity.
///
/// Returns 0 only when the shelf is already at or above capacity.
pub fn plan_order_quantity(item: &Item) -> u32 {
    let safety_gap = item.reorder_point.saturating_sub(item.current_stock);
    let daily_sales = item.average_daily_sales.max(1.0);
    let demand = (daily_sales * DEMAND_HORIZON_DAYS).ceil() as u32;

    let mut quantity = safety_gap.max(demand);

    let headroom = item
        .max_capacity
        .map(|capacity| capacity.saturating_sub(item.current_stock));
    if let Some(headroom) = headroom {
        quantity = quantity.min(headroom);
    }

    quantity = round_to_tier(quantity);

    // Rounding up can overshoot the shelf; capacity is the hard bound.
    if let Some(headroom) = headroom {
        quantity = quantity.min(headroom);
    }

    quantity
}

/// Round to practical order sizes: small orders stay exact (but at least
/// one unit), mid-size orders snap to fives, large orders to tens.
fn round_to_tier(quantity: u32) -> u32 {
    if quantity < 10 {
        quantity.max(1)
    } else if quantity <= 50 {
        round_to_nearest(quantity, 5)
    } else {
        round_to_nearest(quantity, 10)
    }
}

fn round_to_nearest(quantity: u32, step: u32) -> u32 {
    quantity.saturating_add(step / 2) / step * step
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(current: u32, reorder: u32, daily_sales: f64) -> Item {
        Item::new("i1", "USB Cable").with_stock(current, reorder).with_daily_sales(daily_sales)
    }

    #[test]
    fn demand_projection_dominates_small_safety_gap() {
        // 30 days at one unit per day beats an 8-unit safety gap.
        assert_eq!(plan_order_quantity(&item(2, 10, 0.0)), 30);
    }

    #[test]
    fn safety_gap_dominates_when_larger_than_demand() {
        let quantity = plan_order_quantity(&item(0, 80, 0.5));
        assert_eq!(quantity, 80);
    }

    #[test]
    fn zero_daily_sales_is_floored_at_one_unit() {
        let quantity = plan_order_quantity(&item(100, 0, 0.0));
        assert_eq!(quantity, 30);
    }

    #[test]
    fn capacity_clamp_holds_after_rounding() {
        // Headroom 48: rounding to the nearest five gives 50, which the
        // final clamp pulls back under capacity.
        let constrained = item(3, 0, 1.6).with_max_capacity(51);
        assert_eq!(plan_order_quantity(&constrained), 48);
    }

    #[test]
    fn full_shelf_yields_zero() {
        let full = item(50, 10, 2.0).with_max_capacity(50);
        assert_eq!(plan_order_quantity(&full), 0);
    }

    #[test]
    fn mid_tier_rounds_to_nearest_five() {
        // 1.05 * 30 = 31.5 -> ceil 32 -> nearest five is 30.
        assert_eq!(plan_order_quantity(&item(0, 0, 1.05)), 30);
        // 1.1 * 30 = 33 -> nearest five is 35.
        assert_eq!(plan_order_quantity(&item(0, 0, 1.1)), 35);
    }

    #[test]
    fn large_tier_rounds_to_nearest_ten() {
        assert_eq!(plan_order_quantity(&item(0, 83, 0.0)), 80);
        assert_eq!(plan_order_quantity(&item(0, 87, 0.0)), 90);
        assert_eq!(plan_order_quantity(&item(0, 52, 0.0)), 50);
    }

    #[test]
    fn extreme_reorder_point_rounds_without_overflow() {
        let quantity = plan_order_quantity(&item(0, u32::MAX, 0.0));
        assert_eq!(quantity, u32::MAX / 10 * 10);
    }

    #[test]
    fn small_tier_is_exact_but_never_zero_below_capacity() {
        let nearly_full = item(48, 49, 0.0).with_max_capacity(50);
        // Raw need 30 clamps to headroom 2, which stays exact.
        assert_eq!(plan_order_quantity(&nearly_full), 2);
    }
}
