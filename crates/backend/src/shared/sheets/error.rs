use thiserror::Error;

/// Any of these collapses the whole dataset to "no data".
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch sheet {sheet}: {message}")]
    Fetch { sheet: String, message: String },

    #[error("sheet {sheet} answered HTTP {status}")]
    Status { sheet: String, status: u16 },

    #[error("failed to parse sheet {sheet}: {message}")]
    Parse { sheet: String, message: String },

    #[error("invalid sheet source configuration: {0}")]
    Config(String),
}
