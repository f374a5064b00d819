use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

use super::error::LoadError;
use super::normalize::{clean_number, is_date_column, is_text_column, normalize_header, parse_date_dayfirst};

/// The six sheets of the after-sales workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetName {
    Calendar,
    Services,
    Parts,
    Workshop,
    BodyshopJujuy,
    BodyshopSalta,
}

impl SheetName {
    pub const ALL: [SheetName; 6] = [
        SheetName::Calendar,
        SheetName::Services,
        SheetName::Parts,
        SheetName::Workshop,
        SheetName::BodyshopJujuy,
        SheetName::BodyshopSalta,
    ];

    /// Tab title inside the remote workbook
    pub fn title(&self) -> &'static str {
        match self {
            SheetName::Calendar => "CALENDARIO",
            SheetName::Services => "SERVICIOS",
            SheetName::Parts => "REPUESTOS",
            SheetName::Workshop => "TALLER",
            SheetName::BodyshopJujuy => "CyP JUJUY",
            SheetName::BodyshopSalta => "CyP SALTA",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn as_number(&self) -> f64 {
        match self {
            Cell::Number(v) => *v,
            Cell::Text(_) => 0.0,
        }
    }
}

/// One data row with its derived date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRow {
    pub date: Option<NaiveDate>,
    pub cells: HashMap<String, Cell>,
}

impl SheetRow {
    pub fn year(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }

    pub fn month(&self) -> Option<u32> {
        self.date.map(|d| d.month())
    }

    /// Numeric value of `column`, 0 when absent.
    pub fn number(&self, column: &str) -> f64 {
        self.cells.get(column).map(Cell::as_number).unwrap_or(0.0)
    }
}

/// A downloaded sheet with normalized, de-duplicated headers.
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub name: SheetName,
    /// Normalized headers in declaration order
    pub columns: Vec<String>,
    pub rows: Vec<SheetRow>,
}

impl SheetTable {
    /// Parse CSV text. A malformed record fails the whole sheet.
    pub fn parse_csv(name: SheetName, text: &str) -> Result<Self, LoadError> {
        let parse_err = |message: String| LoadError::Parse {
            sheet: name.title().to_string(),
            message,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.trim_start_matches('\u{FEFF}').as_bytes());

        let raw_headers = reader
            .headers()
            .map_err(|e| parse_err(format!("header row: {e}")))?
            .clone();
        if raw_headers.iter().all(|h| h.trim().is_empty()) {
            return Err(parse_err("sheet has no header row".into()));
        }

        let columns = dedupe_headers(raw_headers.iter().map(normalize_header));
        let date_column = columns.iter().position(|c| is_date_column(c));

        let mut rows = Vec::new();
        for (line, record) in reader.records().enumerate() {
            let record = record.map_err(|e| parse_err(format!("record {}: {e}", line + 2)))?;

            let mut cells = HashMap::with_capacity(columns.len());
            for (column, raw) in columns.iter().zip(record.iter()) {
                let cell = if is_text_column(column) {
                    Cell::Text(raw.trim().to_string())
                } else {
                    Cell::Number(clean_number(raw))
                };
                cells.insert(column.clone(), cell);
            }

            let date = date_column
                .and_then(|i| record.get(i))
                .and_then(parse_date_dayfirst);

            rows.push(SheetRow { date, cells });
        }

        Ok(Self {
            name,
            columns,
            rows,
        })
    }
}

/// Empty headers become `SIN NOMBRE n`; repeated headers get a ` 2`, ` 3`... suffix.
fn dedupe_headers(headers: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::new();
    for (i, header) in headers.enumerate() {
        let base = if header.is_empty() {
            format!("SIN NOMBRE {}", i + 1)
        } else {
            header
        };
        let count = seen.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            out.push(base);
        } else {
            out.push(format!("{} {}", base, count));
        }
    }
    out
}

/// Snapshot of all six sheets.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    tables: HashMap<SheetName, SheetTable>,
}

impl Dataset {
    pub fn from_tables(tables: impl IntoIterator<Item = SheetTable>) -> Self {
        Self {
            tables: tables.into_iter().map(|t| (t.name, t)).collect(),
        }
    }

    pub fn table(&self, name: SheetName) -> Option<&SheetTable> {
        self.tables.get(&name)
    }

    pub fn tables(&self) -> impl Iterator<Item = &SheetTable> {
        self.tables.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARTS_CSV: &str = "\
Fecha,Venta Mostrador,Canal,Margen %
05/03/2025,\"$ 1.500,50\",Mostrador,\"32,5%\"
10/03/2025,abc,Taller,
,100,Otro,1
";

    #[test]
    fn test_parse_csv_normalizes_and_coerces() {
        let table = SheetTable::parse_csv(SheetName::Parts, PARTS_CSV).unwrap();
        assert_eq!(table.columns, vec!["FECHA", "VENTA MOSTRADOR", "CANAL", "MARGEN %"]);
        assert_eq!(table.rows.len(), 3);

        let first = &table.rows[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2025, 3, 5));
        assert_eq!(first.number("VENTA MOSTRADOR"), 1500.5);
        assert_eq!(first.number("MARGEN %"), 32.5);
        assert_eq!(first.cells.get("CANAL"), Some(&Cell::Text("Mostrador".into())));

        let second = &table.rows[1];
        assert_eq!(second.number("VENTA MOSTRADOR"), 0.0);
        assert_eq!(second.number("MARGEN %"), 0.0);

        assert_eq!(table.rows[2].date, None);
    }

    #[test]
    fn test_parse_csv_rejects_ragged_records() {
        let text = "FECHA,A,B\n01/01/2025,1,2\n02/01/2025,1\n";
        let err = SheetTable::parse_csv(SheetName::Services, text).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_parse_csv_rejects_empty_body() {
        assert!(SheetTable::parse_csv(SheetName::Calendar, "").is_err());
    }

    #[test]
    fn test_dedupe_headers() {
        let cols = dedupe_headers(
            vec!["A".to_string(), String::new(), "A".to_string(), "A".to_string()].into_iter(),
        );
        assert_eq!(cols, vec!["A", "SIN NOMBRE 2", "A 2", "A 3"]);
    }
}
