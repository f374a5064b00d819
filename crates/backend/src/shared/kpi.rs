//! Progress-to-target arithmetic shared by every tab.

use contracts::shared::kpi::KpiStatus;

use super::sheets::columns::calendar;
use super::sheets::CurrentRow;

/// Working days of the month from the calendar sheet
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorkingDays {
    pub available: f64,
    pub elapsed: f64,
}

impl WorkingDays {
    pub fn new(available: f64, elapsed: f64) -> Self {
        Self { available, elapsed }
    }

    pub fn from_calendar(row: &CurrentRow<'_>) -> Self {
        Self {
            available: row.number(&calendar::AVAILABLE_DAYS),
            elapsed: row.number(&calendar::ELAPSED_DAYS),
        }
    }

    pub fn progress_ratio(&self) -> f64 {
        progress_ratio(self.elapsed, self.available)
    }

    pub fn remaining(&self) -> f64 {
        (self.available - self.elapsed).max(0.0)
    }
}

/// elapsed / available, clamped to [0, 1]; 0 when there are no working days.
pub fn progress_ratio(elapsed: f64, available: f64) -> f64 {
    if available <= 0.0 {
        return 0.0;
    }
    (elapsed / available).clamp(0.0, 1.0)
}

pub fn partial_objective(objective: f64, days: WorkingDays) -> f64 {
    objective * days.progress_ratio()
}

/// Month-end projection at the current daily pace; 0 before the first day.
pub fn projection(actual: f64, days: WorkingDays) -> f64 {
    if days.elapsed <= 0.0 {
        return 0.0;
    }
    actual / days.elapsed * days.available
}

/// actual / objective × 100, 0 without an objective
pub fn attainment_pct(actual: f64, objective: f64) -> f64 {
    if objective <= 0.0 {
        return 0.0;
    }
    actual / objective * 100.0
}

/// Division that yields 0 for a zero (or non-finite) result.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let r = numerator / denominator;
    if r.is_finite() {
        r
    } else {
        0.0
    }
}

/// On track when the actual reaches the pro-rated objective.
pub fn kpi_status(actual: f64, partial: f64) -> KpiStatus {
    if actual >= partial {
        KpiStatus::OnTrack
    } else {
        KpiStatus::Behind
    }
}

/// Status of a ratio against a fixed target.
pub fn target_status(value: f64, target: f64) -> KpiStatus {
    if value >= target {
        KpiStatus::OnTrack
    } else {
        KpiStatus::Behind
    }
}

/// Everything a KPI card needs, before formatting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiFigures {
    pub actual: f64,
    pub objective: f64,
    pub partial_objective: f64,
    pub projection: f64,
    pub attainment_pct: f64,
    pub status: KpiStatus,
}

pub fn compute(actual: f64, objective: f64, days: WorkingDays) -> KpiFigures {
    let partial = partial_objective(objective, days);
    KpiFigures {
        actual,
        objective,
        partial_objective: partial,
        projection: projection(actual, days),
        attainment_pct: attainment_pct(actual, objective),
        status: kpi_status(actual, partial),
    }
}
