//! Loyalty rate (IRPV): share of vehicles sold that came back to the
//! workshop, per year and third of the year.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use std::ops::RangeInclusive;

use contracts::usecases::u601_irpv::{IrpvCell, IrpvRow, IrpvTable, PeriodThird};

use super::error::IrpvError;
use super::reader::{read_table, UploadedTable};
use crate::shared::config::IrpvConfig;
use crate::shared::sheets::normalize::parse_date_dayfirst;
use crate::shared::sheets::columns::uploads;
use crate::shared::sheets::resolver::{find_column, find_first, ColumnQuery};

const SALE_DATE_COLUMNS: &[ColumnQuery] = &[
    ColumnQuery::new(&["FECHA", "VENTA"]),
    ColumnQuery::new(&["FECHA"]),
];
const VISIT_DATE_COLUMNS: &[ColumnQuery] = &[ColumnQuery::new(&["FECHA"])];

/// One uploaded file
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// (VIN, date) pairs extracted from an upload
#[derive(Debug, Default)]
struct Events {
    items: Vec<(String, NaiveDate)>,
    skipped: usize,
}

fn normalize_vin(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn extract_events(
    file: &str,
    table: &UploadedTable,
    date_columns: &[ColumnQuery],
) -> Result<Events, IrpvError> {
    let vin_col = uploads::VIN
        .resolve_in(&table.columns)
        .or_else(|| find_column(&table.columns, &uploads::CHASSIS_FALLBACK))
        .and_then(|c| table.column_index(c))
        .ok_or_else(|| IrpvError::MissingColumn {
            file: file.to_string(),
            column: "VIN",
        })?;
    let date_col = find_first(&table.columns, date_columns)
        .and_then(|c| table.column_index(c))
        .ok_or_else(|| IrpvError::MissingColumn {
            file: file.to_string(),
            column: "fecha",
        })?;

    let mut events = Events {
        skipped: table.skipped,
        ..Default::default()
    };
    for row in &table.rows {
        let vin = normalize_vin(&row[vin_col]);
        match parse_date_dayfirst(&row[date_col]) {
            Some(date) if !vin.is_empty() => events.items.push((vin, date)),
            _ => events.skipped += 1,
        }
    }
    Ok(events)
}

/// Bucket sales by (year, third) and count those whose VIN has a workshop
/// visit on or after the sale date. Years outside `years` are ignored.
pub fn compute_irpv(
    sales: &[(String, NaiveDate)],
    visits: &[(String, NaiveDate)],
    years: RangeInclusive<i32>,
) -> Vec<IrpvRow> {
    let mut last_visit: HashMap<&str, NaiveDate> = HashMap::new();
    for (vin, date) in visits {
        last_visit
            .entry(vin.as_str())
            .and_modify(|d| *d = (*d).max(*date))
            .or_insert(*date);
    }

    let mut counts: HashMap<(i32, PeriodThird), (u32, u32)> = HashMap::new();
    for (vin, sold_on) in sales {
        if !years.contains(&sold_on.year()) {
            continue;
        }
        let Some(third) = PeriodThird::from_month(sold_on.month()) else {
            continue;
        };
        let entry = counts.entry((sold_on.year(), third)).or_default();
        entry.0 += 1;
        if last_visit.get(vin.as_str()).is_some_and(|v| v >= sold_on) {
            entry.1 += 1;
        }
    }

    years
        .map(|year| IrpvRow {
            year,
            cells: PeriodThird::ALL
                .iter()
                .map(|&third| {
                    let (sold, retained) = counts.get(&(year, third)).copied().unwrap_or_default();
                    let rate_pct = if sold == 0 {
                        0.0
                    } else {
                        retained as f64 / sold as f64 * 100.0
                    };
                    IrpvCell {
                        third,
                        sold,
                        retained,
                        rate_pct,
                    }
                })
                .collect(),
        })
        .collect()
}

/// Read both uploads and compute the table. Any read failure aborts.
pub fn process_uploads(
    sales: &Upload,
    workshop: &Upload,
    config: &IrpvConfig,
) -> Result<IrpvTable, IrpvError> {
    let sales_table = read_table(&sales.file_name, &sales.bytes)?;
    let sales_events = extract_events(&sales.file_name, &sales_table, SALE_DATE_COLUMNS)?;

    let workshop_table = read_table(&workshop.file_name, &workshop.bytes)?;
    let visit_events = extract_events(&workshop.file_name, &workshop_table, VISIT_DATE_COLUMNS)?;

    let rows = compute_irpv(&sales_events.items, &visit_events.items, config.years());

    Ok(IrpvTable {
        rows,
        sales_file: sales.file_name.clone(),
        workshop_file: workshop.file_name.clone(),
        sales_records: sales_events.items.len(),
        workshop_records: visit_events.items.len(),
        skipped_lines: sales_events.skipped + visit_events.skipped,
    })
}
