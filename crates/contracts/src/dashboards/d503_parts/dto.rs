use serde::{Deserialize, Serialize};

use crate::shared::kpi::KpiStatus;

/// Input of the special-operation margin simulator (Parts tab)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialOperationRequest {
    pub year: i32,
    pub month: u32,
    /// List price per unit, before discount
    pub list_price: f64,
    pub unit_cost: f64,
    pub quantity: f64,
    /// Discount over list price in percent; the server caps it at 50
    pub discount_pct: f64,
}

/// Simulator output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialOperationResult {
    pub net_sale: f64,
    pub net_sale_text: String,
    pub total_cost: f64,
    pub total_cost_text: String,
    pub margin: f64,
    pub margin_text: String,
    pub margin_pct: f64,
    pub margin_pct_text: String,
    pub target_margin_pct: f64,
    pub target_margin_text: String,
    /// `OnTrack` when `margin_pct >= target_margin_pct`
    pub status: KpiStatus,
    /// Parts sales / parts objective for the month, without the operation
    pub coverage_before_pct: f64,
    pub coverage_before_text: String,
    /// Same ratio after adding `net_sale`
    pub coverage_after_pct: f64,
    pub coverage_after_text: String,
}
