//! Special-operation margin simulator.

use contracts::dashboards::d503_parts::{SpecialOperationRequest, SpecialOperationResult};

use crate::shared::format::{format_money, format_percent};
use crate::shared::kpi::{attainment_pct, safe_ratio, target_status};

/// Upper bound of the discount slider
pub const MAX_DISCOUNT_PCT: f64 = 50.0;

/// Evaluate a one-off sale against the target margin and the month's
/// parts objective. Negative inputs count as zero; the discount is capped
/// at `MAX_DISCOUNT_PCT`.
pub fn simulate(
    request: &SpecialOperationRequest,
    month_sales: f64,
    month_objective: f64,
    target_margin_pct: f64,
) -> SpecialOperationResult {
    let price = request.list_price.max(0.0);
    let cost = request.unit_cost.max(0.0);
    let quantity = request.quantity.max(0.0);
    let discount = request.discount_pct.clamp(0.0, MAX_DISCOUNT_PCT);

    let net_sale = price * quantity * (1.0 - discount / 100.0);
    let total_cost = cost * quantity;
    let margin = net_sale - total_cost;
    let margin_pct = safe_ratio(margin, net_sale) * 100.0;

    let coverage_before = attainment_pct(month_sales, month_objective);
    let coverage_after = attainment_pct(month_sales + net_sale, month_objective);

    SpecialOperationResult {
        net_sale,
        net_sale_text: format_money(net_sale),
        total_cost,
        total_cost_text: format_money(total_cost),
        margin,
        margin_text: format_money(margin),
        margin_pct,
        margin_pct_text: format_percent(margin_pct, 1),
        target_margin_pct,
        target_margin_text: format_percent(target_margin_pct, 1),
        status: target_status(margin_pct, target_margin_pct),
        coverage_before_pct: coverage_before,
        coverage_before_text: format_percent(coverage_before, 1),
        coverage_after_pct: coverage_after,
        coverage_after_text: format_percent(coverage_after, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::kpi::KpiStatus;

    fn request(list_price: f64, unit_cost: f64, quantity: f64, discount_pct: f64) -> SpecialOperationRequest {
        SpecialOperationRequest {
            year: 2025,
            month: 3,
            list_price,
            unit_cost,
            quantity,
            discount_pct,
        }
    }

    #[test]
    fn test_margin_above_target() {
        let r = simulate(&request(1000.0, 600.0, 10.0, 20.0), 500_000.0, 1_000_000.0, 15.0);
        assert_eq!(r.net_sale, 8000.0);
        assert_eq!(r.total_cost, 6000.0);
        assert_eq!(r.margin, 2000.0);
        assert_eq!(r.margin_pct, 25.0);
        assert_eq!(r.margin_pct_text, "25,0 %");
        assert_eq!(r.status, KpiStatus::OnTrack);
        assert_eq!(r.coverage_before_pct, 50.0);
        assert_eq!(r.coverage_after_text, "50,8 %");
    }

    #[test]
    fn test_deep_discount_goes_below_target() {
        let r = simulate(&request(1000.0, 600.0, 1.0, 40.0), 0.0, 0.0, 15.0);
        assert_eq!(r.margin, 0.0);
        assert_eq!(r.status, KpiStatus::Behind);
        assert_eq!(r.coverage_after_pct, 0.0);
    }

    #[test]
    fn test_zero_quantity() {
        let r = simulate(&request(1000.0, 600.0, 0.0, 10.0), 100.0, 200.0, 15.0);
        assert_eq!(r.net_sale, 0.0);
        assert_eq!(r.margin_pct, 0.0);
        assert_eq!(r.net_sale_text, "$ 0");
        assert_eq!(r.coverage_before_pct, r.coverage_after_pct);
    }

    #[test]
    fn test_negative_inputs_are_clamped() {
        let r = simulate(&request(-5.0, -1.0, 3.0, -10.0), 0.0, 0.0, 15.0);
        assert_eq!(r.net_sale, 0.0);
        assert_eq!(r.total_cost, 0.0);
    }

    #[test]
    fn test_discount_is_capped() {
        let r = simulate(&request(100.0, 0.0, 1.0, 80.0), 0.0, 0.0, 15.0);
        assert_eq!(r.net_sale, 50.0);
    }
}
