use serde::{Deserialize, Serialize};

/// Spanish month names, index 0 = January.
pub const MONTH_NAMES_ES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Month name for `month` in 1..=12, empty string otherwise.
pub fn month_name_es(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES_ES[(month - 1) as usize],
        _ => "",
    }
}

/// Reporting period selected in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
    }

    /// Display label, e.g. "Marzo 2025"
    pub fn label(&self) -> String {
        format!("{} {}", month_name_es(self.month), self.year)
    }
}

/// Response of `GET /api/dashboard/periods`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodsResponse {
    /// Periods with at least one dated row, newest first
    pub periods: Vec<Period>,
    /// Distinct years, newest first
    pub years: Vec<i32>,
    /// Period the UI selects on first load
    pub default: Option<Period>,
}

impl PeriodsResponse {
    /// Months available for `year`, ascending.
    pub fn months_of(&self, year: i32) -> Vec<u32> {
        let mut months: Vec<u32> = self
            .periods
            .iter()
            .filter(|p| p.year == year)
            .map(|p| p.month)
            .collect();
        months.sort_unstable();
        months.dedup();
        months
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(month_name_es(1), "Enero");
        assert_eq!(month_name_es(12), "Diciembre");
        assert_eq!(month_name_es(0), "");
        assert_eq!(month_name_es(13), "");
        assert_eq!(Period::new(2025, 3).label(), "Marzo 2025");
    }

    #[test]
    fn test_months_of() {
        let resp = PeriodsResponse {
            periods: vec![
                Period::new(2025, 2),
                Period::new(2025, 1),
                Period::new(2024, 12),
            ],
            years: vec![2025, 2024],
            default: Some(Period::new(2025, 2)),
        };
        assert_eq!(resp.months_of(2025), vec![1, 2]);
        assert_eq!(resp.months_of(2024), vec![12]);
        assert!(resp.months_of(2023).is_empty());
    }
}
