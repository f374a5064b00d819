use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use contracts::usecases::u601_irpv::IrpvTable;

struct Entry {
    table: IrpvTable,
    stored_at: Instant,
}

/// Last computed IRPV table per browser session (in-memory only).
///
/// Entries older than the TTL are invisible to `get` and are pruned on
/// the next `put`.
pub struct SessionStore {
    ttl: Duration,
    tables: Mutex<HashMap<String, Entry>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            tables: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        // a panic while holding the lock leaves the map itself intact
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn is_fresh(&self, entry: &Entry) -> bool {
        entry.stored_at.elapsed() < self.ttl
    }

    pub fn get(&self, session_id: &str) -> Option<IrpvTable> {
        self.lock()
            .get(session_id)
            .filter(|e| self.is_fresh(e))
            .map(|e| e.table.clone())
    }

    pub fn put(&self, session_id: &str, table: IrpvTable) {
        let mut tables = self.lock();
        let before = tables.len();
        tables.retain(|_, e| self.is_fresh(e));
        let pruned = before - tables.len();
        if pruned > 0 {
            tracing::debug!("IRPV: pruned {} expired session(s)", pruned);
        }
        tables.insert(
            session_id.to_string(),
            Entry {
                table,
                stored_at: Instant::now(),
            },
        );
    }

    /// Returns whether there was a table to clear
    pub fn clear(&self, session_id: &str) -> bool {
        self.lock().remove(session_id).is_some()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str) -> IrpvTable {
        IrpvTable {
            rows: Vec::new(),
            sales_file: name.to_string(),
            workshop_file: "taller.csv".to_string(),
            sales_records: 0,
            workshop_records: 0,
            skipped_lines: 0,
        }
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::new(Duration::from_secs(3600));
        store.put("a", table("a.csv"));

        assert_eq!(store.get("a").map(|t| t.sales_file), Some("a.csv".to_string()));
        assert!(store.get("b").is_none());

        store.put("a", table("a2.csv"));
        assert_eq!(store.get("a").map(|t| t.sales_file), Some("a2.csv".to_string()));

        assert!(store.clear("a"));
        assert!(!store.clear("a"));
        assert!(store.get("a").is_none());
    }

    #[test]
    fn test_expired_sessions_are_pruned() {
        let store = SessionStore::new(Duration::ZERO);
        store.put("a", table("a.csv"));
        assert!(store.get("a").is_none());

        store.put("b", table("b.csv"));
        assert_eq!(store.len(), 1);
        assert!(store.clear("b"));
    }
}
