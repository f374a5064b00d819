use thiserror::Error;

/// Shown to the user as-is, so messages are in Spanish.
#[derive(Debug, Error)]
pub enum IrpvError {
    #[error("No se pudo leer el archivo {file}: {message}")]
    Read { file: String, message: String },

    #[error("El archivo {file} no tiene columna de {column}")]
    MissingColumn { file: String, column: &'static str },

    #[error("Falta el archivo de {0}")]
    MissingUpload(&'static str),
}
