use async_trait::async_trait;
use std::time::Duration;

use super::error::LoadError;
use super::table::SheetName;
use crate::shared::config::SheetsConfig;

/// Where sheet CSV comes from. The production source is the public
/// spreadsheet export; tests plug in an in-memory one.
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch_csv(&self, sheet: SheetName) -> Result<String, LoadError>;
}

/// Public CSV export of a Google Sheets workbook
pub struct GoogleSheetSource {
    client: reqwest::Client,
    base_url: String,
    document_id: String,
}

impl GoogleSheetSource {
    pub fn new(config: &SheetsConfig) -> Result<Self, LoadError> {
        if config.document_id.trim().is_empty() {
            return Err(LoadError::Config("sheets.document_id is empty".into()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| LoadError::Config(format!("http client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            document_id: config.document_id.trim().to_string(),
        })
    }

    pub fn export_url(&self, sheet: SheetName) -> String {
        format!(
            "{}/{}/gviz/tq?tqx=out:csv&sheet={}",
            self.base_url,
            self.document_id,
            urlencoding::encode(sheet.title())
        )
    }
}

#[async_trait]
impl SheetSource for GoogleSheetSource {
    async fn fetch_csv(&self, sheet: SheetName) -> Result<String, LoadError> {
        let url = self.export_url(sheet);
        tracing::debug!("Fetching sheet {} from {}", sheet.title(), url);

        let fetch_err = |e: reqwest::Error| LoadError::Fetch {
            sheet: sheet.title().to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(&url).send().await.map_err(fetch_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                sheet: sheet.title().to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(fetch_err)
    }
}
