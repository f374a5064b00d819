use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Display metadata
// ---------------------------------------------------------------------------

/// How a numeric value is formatted for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money,
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of a KPI (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KpiStatus {
    OnTrack,
    Behind,
    Neutral,
}

impl KpiStatus {
    /// Hex colour used by cards, badges and chart legends.
    pub fn color(&self) -> &'static str {
        match self {
            KpiStatus::OnTrack => "#2e7d32",
            KpiStatus::Behind => "#c62828",
            KpiStatus::Neutral => "#616161",
        }
    }

    /// BEM modifier for `stat-card` / `badge` classes.
    pub fn css_modifier(&self) -> &'static str {
        match self {
            KpiStatus::OnTrack => "success",
            KpiStatus::Behind => "error",
            KpiStatus::Neutral => "neutral",
        }
    }
}

// ---------------------------------------------------------------------------
// Rendered fragments
// ---------------------------------------------------------------------------

/// KPI card: actual value against a monthly objective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiCard {
    pub id: String,
    pub title: String,
    pub format: ValueFormat,
    /// Actual value to date
    pub value: f64,
    pub value_text: String,
    /// Full-month objective
    pub objective: f64,
    pub objective_text: String,
    /// Objective pro-rated by the working-day ratio
    pub partial_objective: f64,
    pub partial_objective_text: String,
    /// Linear month-end extrapolation of `value`
    pub projection: f64,
    pub projection_text: String,
    /// value / objective, as percent
    pub attainment_pct: f64,
    pub attainment_text: String,
    pub status: KpiStatus,
}

/// Small metric badge (title + value, optional target colouring).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricBadge {
    pub id: String,
    pub title: String,
    pub value: f64,
    pub value_text: String,
    /// Target description, e.g. "Obj. 85,0 %"
    pub target_text: Option<String>,
    pub status: KpiStatus,
}
