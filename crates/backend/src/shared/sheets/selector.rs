//! Picks the row that represents a (year, month) in each sheet.

use std::collections::BTreeSet;

use contracts::shared::period::{Period, PeriodsResponse};

use super::columns::ColumnSpec;
use super::table::{Dataset, SheetRow, SheetTable};

/// The selected row of one sheet, or an empty record when the sheet or
/// period has no data. Every lookup on an empty record yields 0.
#[derive(Debug, Clone, Copy)]
pub struct CurrentRow<'t> {
    table: Option<&'t SheetTable>,
    row: Option<&'t SheetRow>,
}

impl<'t> CurrentRow<'t> {
    pub fn empty() -> Self {
        Self {
            table: None,
            row: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.row.is_none()
    }

    /// Numeric value of a mapped field
    pub fn number(&self, spec: &ColumnSpec) -> f64 {
        match (self.table, self.row) {
            (Some(table), Some(row)) => spec.resolve(table).map(|c| row.number(c)).unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Whether the sheet carries the field at all (independent of the row).
    pub fn has(&self, spec: &ColumnSpec) -> bool {
        self.table.and_then(|t| spec.resolve(t)).is_some()
    }
}

/// Latest dated row of `period` in `table`. Ties on date go to the row
/// that comes later in the sheet.
pub fn select_current(table: Option<&SheetTable>, period: Period) -> CurrentRow<'_> {
    let Some(table) = table else {
        return CurrentRow::empty();
    };

    let mut matching: Vec<&SheetRow> = table
        .rows
        .iter()
        .filter(|r| r.year() == Some(period.year) && r.month() == Some(period.month))
        .collect();
    // stable: equal dates keep source order
    matching.sort_by_key(|r| r.date);

    CurrentRow {
        table: Some(table),
        row: matching.last().copied(),
    }
}

/// Every dated (year, month) present in any sheet, newest first.
pub fn available_periods(dataset: &Dataset) -> PeriodsResponse {
    let set: BTreeSet<Period> = dataset
        .tables()
        .flat_map(|t| t.rows.iter())
        .filter_map(|r| Some(Period::new(r.year()?, r.month()?)))
        .collect();

    let periods: Vec<Period> = set.into_iter().rev().collect();
    let mut years: Vec<i32> = periods.iter().map(|p| p.year).collect();
    years.dedup();

    PeriodsResponse {
        default: periods.first().copied(),
        periods,
        years,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sheets::columns::{calendar, parts};
    use crate::shared::sheets::table::SheetName;

    const PARTS_CSV: &str = "\
FECHA,VENTA MOSTRADOR,VENTA TALLER
28/02/2025,50,1
10/03/2025,100,2
31/03/2025,300,3
15/03/2025,200,4
31/03/2025,400,5
02/04/2024,7,7
";

    fn parts_table() -> SheetTable {
        SheetTable::parse_csv(SheetName::Parts, PARTS_CSV).unwrap()
    }

    #[test]
    fn test_select_latest_row_and_tie_goes_to_later_row() {
        let table = parts_table();
        let row = select_current(Some(&table), Period::new(2025, 3));
        assert!(!row.is_empty());
        assert_eq!(row.number(&parts::COUNTER_SALES), 400.0);
        assert_eq!(row.number(&parts::WORKSHOP_SALES), 5.0);
    }

    #[test]
    fn test_missing_period_yields_zeroes() {
        let table = parts_table();
        let row = select_current(Some(&table), Period::new(2025, 7));
        assert!(row.is_empty());
        assert_eq!(row.number(&parts::COUNTER_SALES), 0.0);
    }

    #[test]
    fn test_missing_table_and_column() {
        let row = select_current(None, Period::new(2025, 3));
        assert!(row.is_empty());
        assert_eq!(row.number(&calendar::AVAILABLE_DAYS), 0.0);

        let table = parts_table();
        let row = select_current(Some(&table), Period::new(2025, 3));
        assert!(!row.has(&parts::HEALTHY_STOCK));
        assert_eq!(row.number(&parts::HEALTHY_STOCK), 0.0);
    }

    #[test]
    fn test_available_periods_newest_first() {
        let dataset = Dataset::from_tables([parts_table()]);
        let periods = available_periods(&dataset);
        assert_eq!(
            periods.periods,
            vec![Period::new(2025, 3), Period::new(2025, 2), Period::new(2024, 4)]
        );
        assert_eq!(periods.years, vec![2025, 2024]);
        assert_eq!(periods.default, Some(Period::new(2025, 3)));
    }

    #[test]
    fn test_available_periods_empty_dataset() {
        let periods = available_periods(&Dataset::default());
        assert!(periods.periods.is_empty());
        assert_eq!(periods.default, None);
    }
}
