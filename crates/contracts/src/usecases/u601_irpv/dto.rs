use serde::{Deserialize, Serialize};

/// Third of the year: Jan–Apr, May–Aug, Sep–Dec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PeriodThird {
    First,
    Second,
    Third,
}

impl PeriodThird {
    pub const ALL: [PeriodThird; 3] = [PeriodThird::First, PeriodThird::Second, PeriodThird::Third];

    /// Bucket of a calendar month (1..=12). Out-of-range months map to `None`.
    pub fn from_month(month: u32) -> Option<Self> {
        match month {
            1..=4 => Some(PeriodThird::First),
            5..=8 => Some(PeriodThird::Second),
            9..=12 => Some(PeriodThird::Third),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PeriodThird::First => "1° cuatrimestre",
            PeriodThird::Second => "2° cuatrimestre",
            PeriodThird::Third => "3° cuatrimestre",
        }
    }
}

/// Loyalty figures of one (year, third) bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrpvCell {
    pub third: PeriodThird,
    /// Vehicles sold in the bucket
    pub sold: u32,
    /// Of those, vehicles seen in the workshop on/after the sale date
    pub retained: u32,
    /// retained / sold × 100, 0 when nothing was sold
    pub rate_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrpvRow {
    pub year: i32,
    /// Always three cells, in `PeriodThird::ALL` order
    pub cells: Vec<IrpvCell>,
}

/// Loyalty-rate table computed from the two uploaded files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrpvTable {
    pub rows: Vec<IrpvRow>,
    pub sales_file: String,
    pub workshop_file: String,
    pub sales_records: usize,
    pub workshop_records: usize,
    /// Malformed lines skipped across both files
    pub skipped_lines: usize,
}

/// Response of the `/api/u601/irpv` endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrpvResponse {
    pub table: Option<IrpvTable>,
}
