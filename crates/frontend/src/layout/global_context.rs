use contracts::shared::period::{Period, PeriodsResponse};
use contracts::shared::view::DashboardTab;
use leptos::prelude::*;

use crate::shared::session::session_id;

/// UI state shared by the sidebar, the tabs and every page
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub periods: RwSignal<PeriodsResponse>,
    pub year: RwSignal<i32>,
    pub month: RwSignal<u32>,
    pub active_tab: RwSignal<DashboardTab>,
    /// Set once any data request fails; the shell then shows only the error
    pub load_failed: RwSignal<bool>,
    /// Bumped after a manual refresh so pages reload
    pub revision: RwSignal<u32>,
    pub session_id: StoredValue<String>,
}

impl DashboardContext {
    pub fn new() -> Self {
        Self {
            periods: RwSignal::new(PeriodsResponse::default()),
            year: RwSignal::new(0),
            month: RwSignal::new(0),
            active_tab: RwSignal::new(DashboardTab::Objectives),
            load_failed: RwSignal::new(false),
            revision: RwSignal::new(0),
            session_id: StoredValue::new(session_id()),
        }
    }

    /// Selected period, `None` until periods are known
    pub fn period(&self) -> Option<Period> {
        let period = Period::new(self.year.get(), self.month.get());
        period.is_valid().then_some(period)
    }

    /// Store the periods and select the default one
    pub fn set_periods(&self, periods: PeriodsResponse) {
        if let Some(default) = periods.default {
            self.year.set(default.year);
            self.month.set(default.month);
        }
        self.periods.set(periods);
    }

    /// Change year, keeping the month when it exists in that year
    pub fn select_year(&self, year: i32) {
        let month = self
            .periods
            .with_untracked(|p| month_for_year(p, year, self.month.get_untracked()));
        self.year.set(year);
        if let Some(month) = month {
            self.month.set(month);
        }
    }
}

impl Default for DashboardContext {
    fn default() -> Self {
        Self::new()
    }
}

/// `current` if `year` has data for it, else the newest month of `year`.
pub fn month_for_year(periods: &PeriodsResponse, year: i32, current: u32) -> Option<u32> {
    let months = periods.months_of(year);
    if months.contains(&current) {
        Some(current)
    } else {
        months.last().copied()
    }
}

pub fn use_dashboard_context() -> DashboardContext {
    use_context::<DashboardContext>().expect("DashboardContext not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn periods() -> PeriodsResponse {
        PeriodsResponse {
            periods: vec![Period::new(2025, 3), Period::new(2025, 2), Period::new(2024, 11)],
            years: vec![2025, 2024],
            default: Some(Period::new(2025, 3)),
        }
    }

    #[test]
    fn test_month_for_year() {
        assert_eq!(month_for_year(&periods(), 2025, 2), Some(2));
        assert_eq!(month_for_year(&periods(), 2024, 3), Some(11));
        assert_eq!(month_for_year(&periods(), 2023, 3), None);
    }
}
