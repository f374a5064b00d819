pub mod cache;
pub mod columns;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod resolver;
pub mod selector;
pub mod source;
pub mod table;

#[cfg(test)]
pub mod testing;

pub use cache::DatasetCache;
pub use error::LoadError;
pub use selector::{available_periods, select_current, CurrentRow};
pub use source::{GoogleSheetSource, SheetSource};
pub use table::{Dataset, SheetName, SheetTable};
