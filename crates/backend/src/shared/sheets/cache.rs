use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use super::error::LoadError;
use super::loader::load_dataset;
use super::source::SheetSource;
use super::table::Dataset;

#[derive(Debug, Clone)]
struct CacheEntry {
    dataset: Arc<Dataset>,
    fetched_at: Instant,
}

/// Process-wide snapshot of the workbook with a time-to-live.
/// Only successful loads are stored.
pub struct DatasetCache {
    ttl: Duration,
    entry: RwLock<Option<CacheEntry>>,
}

impl DatasetCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
        }
    }

    fn fresh(&self, entry: &Option<CacheEntry>) -> Option<Arc<Dataset>> {
        entry
            .as_ref()
            .filter(|e| e.fetched_at.elapsed() < self.ttl)
            .map(|e| e.dataset.clone())
    }

    /// Cached dataset, or a fresh load when the entry is missing or expired.
    pub async fn get_or_load(&self, source: &dyn SheetSource) -> Result<Arc<Dataset>, LoadError> {
        if let Some(dataset) = self.fresh(&*self.entry.read().await) {
            return Ok(dataset);
        }

        let mut guard = self.entry.write().await;
        // another request may have reloaded while we waited
        if let Some(dataset) = self.fresh(&guard) {
            return Ok(dataset);
        }

        let started = Instant::now();
        let dataset = Arc::new(load_dataset(source).await?);
        tracing::info!(
            "Dataset loaded in {}ms, cached for {}s",
            started.elapsed().as_millis(),
            self.ttl.as_secs()
        );

        *guard = Some(CacheEntry {
            dataset: dataset.clone(),
            fetched_at: Instant::now(),
        });
        Ok(dataset)
    }

    /// Drop the cached snapshot; the next request reloads.
    pub async fn invalidate(&self) {
        *self.entry.write().await = None;
    }

    /// Time left before the current entry expires, if there is one
    pub async fn expires_in(&self) -> Option<Duration> {
        self.entry
            .read()
            .await
            .as_ref()
            .map(|e| self.ttl.saturating_sub(e.fetched_at.elapsed()))
    }
}
