use std::sync::Arc;
use std::time::Duration;

use crate::shared::config::Config;
use crate::shared::sheets::{Dataset, DatasetCache, GoogleSheetSource, LoadError, SheetSource};
use crate::usecases::u601_irpv::SessionStore;

/// Everything the handlers share
pub struct AppState {
    pub config: Config,
    pub source: Arc<dyn SheetSource>,
    pub cache: DatasetCache,
    pub sessions: SessionStore,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: Config, source: Arc<dyn SheetSource>) -> Self {
        let cache = DatasetCache::new(Duration::from_secs(config.sheets.cache_ttl_secs));
        let sessions = SessionStore::new(Duration::from_secs(config.irpv.session_ttl_secs));
        Self {
            config,
            source,
            cache,
            sessions,
        }
    }

    /// State backed by the configured remote workbook
    pub fn from_config(config: Config) -> Result<Self, LoadError> {
        let source = Arc::new(GoogleSheetSource::new(&config.sheets)?);
        Ok(Self::new(config, source))
    }

    pub async fn dataset(&self) -> Result<Arc<Dataset>, LoadError> {
        self.cache.get_or_load(self.source.as_ref()).await
    }
}
