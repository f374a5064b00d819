//! In-memory sheet source and dataset builders for unit tests.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::LoadError;
use super::source::SheetSource;
use super::table::{Dataset, SheetName, SheetTable};

pub struct MemorySource {
    sheets: HashMap<SheetName, String>,
    failing: HashSet<SheetName>,
    fetches: AtomicUsize,
}

impl MemorySource {
    /// Every sheet answers with the same CSV body
    pub fn uniform(csv: &str) -> Self {
        Self {
            sheets: SheetName::ALL.iter().map(|s| (*s, csv.to_string())).collect(),
            failing: HashSet::new(),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn with_sheet(mut self, sheet: SheetName, csv: &str) -> Self {
        self.sheets.insert(sheet, csv.to_string());
        self
    }

    pub fn failing(mut self, sheet: SheetName) -> Self {
        self.failing.insert(sheet);
        self
    }

    pub fn set_failing(&mut self, sheet: SheetName, failing: bool) {
        if failing {
            self.failing.insert(sheet);
        } else {
            self.failing.remove(&sheet);
        }
    }

    /// Number of `fetch_csv` calls so far
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SheetSource for MemorySource {
    async fn fetch_csv(&self, sheet: SheetName) -> Result<String, LoadError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&sheet) {
            return Err(LoadError::Status {
                sheet: sheet.title().to_string(),
                status: 500,
            });
        }
        Ok(self.sheets.get(&sheet).cloned().unwrap_or_default())
    }
}

/// Build a dataset from `(sheet, csv)` pairs; missing sheets stay absent.
pub fn dataset(sheets: &[(SheetName, &str)]) -> Dataset {
    Dataset::from_tables(
        sheets
            .iter()
            .map(|(name, csv)| SheetTable::parse_csv(*name, csv).expect("test csv must parse")),
    )
}
