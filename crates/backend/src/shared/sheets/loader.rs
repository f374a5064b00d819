use futures::future::try_join_all;

use super::error::LoadError;
use super::source::SheetSource;
use super::table::{Dataset, SheetName, SheetTable};

/// Fetch and parse all six sheets concurrently. All-or-nothing: the first
/// fetch or parse failure aborts the load.
pub async fn load_dataset(source: &dyn SheetSource) -> Result<Dataset, LoadError> {
    let fetches = SheetName::ALL.iter().map(|&sheet| async move {
        let text = source.fetch_csv(sheet).await?;
        let table = SheetTable::parse_csv(sheet, &text)?;
        tracing::debug!(
            "Sheet {} loaded: {} columns, {} rows",
            sheet.title(),
            table.columns.len(),
            table.rows.len()
        );
        Ok::<_, LoadError>(table)
    });

    let tables = try_join_all(fetches).await?;
    Ok(Dataset::from_tables(tables))
}
