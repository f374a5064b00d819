//! Lenient CSV reading for user uploads.

use encoding_rs::WINDOWS_1252;

use super::error::IrpvError;
use crate::shared::sheets::normalize::normalize_header;

/// Candidates in tie-break order
const DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// An uploaded file with normalized headers
#[derive(Debug, Clone, Default)]
pub struct UploadedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Lines dropped because they could not be parsed or had the wrong field count
    pub skipped: usize,
}

impl UploadedTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// UTF-8 when valid, Windows-1252 otherwise (spreadsheet exports from
/// Excel on Windows). A leading BOM is dropped.
pub fn decode_bytes(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            text.into_owned()
        }
    }
}

/// Most frequent candidate in the header line; `,` when none occurs.
pub fn detect_delimiter(text: &str) -> u8 {
    let header = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    let mut best = (b',', 0usize);
    for d in DELIMITERS {
        let count = header.bytes().filter(|b| *b == d).count();
        if count > best.1 {
            best = (d, count);
        }
    }
    best.0
}

pub fn read_table(file: &str, bytes: &[u8]) -> Result<UploadedTable, IrpvError> {
    let text = decode_bytes(bytes);
    if text.trim().is_empty() {
        return Err(IrpvError::Read {
            file: file.to_string(),
            message: "el archivo está vacío".to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(detect_delimiter(&text))
        .flexible(true)
        .has_headers(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| IrpvError::Read {
            file: file.to_string(),
            message: e.to_string(),
        })?
        .iter()
        .map(normalize_header)
        .collect();

    let mut table = UploadedTable {
        columns,
        ..Default::default()
    };

    for record in reader.records() {
        match record {
            Ok(r) if r.iter().all(|f| f.trim().is_empty()) => {}
            Ok(r) if r.len() == table.columns.len() => {
                table.rows.push(r.iter().map(|f| f.trim().to_string()).collect());
            }
            _ => table.skipped += 1,
        }
    }

    tracing::debug!(
        "Upload {}: {} columns, {} rows, {} skipped",
        file,
        table.columns.len(),
        table.rows.len(),
        table.skipped
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("VIN;FECHA;MODELO\n1;2;3"), b';');
        assert_eq!(detect_delimiter("VIN,FECHA\n"), b',');
        assert_eq!(detect_delimiter("VIN\tFECHA\tX\n"), b'\t');
        assert_eq!(detect_delimiter("VIN|FECHA\n"), b'|');
        assert_eq!(detect_delimiter("\n\nVIN;FECHA\n"), b';');
        assert_eq!(detect_delimiter("VIN\n"), b',');
        // tie goes to the earlier candidate
        assert_eq!(detect_delimiter("A,B;C\n"), b',');
    }

    #[test]
    fn test_decode_windows_1252_and_bom() {
        assert_eq!(decode_bytes(b"\xEF\xBB\xBFFecha"), "Fecha");
        assert_eq!(decode_bytes(b"Pa\xF1os"), "Paños");
        assert_eq!(decode_bytes("Paños".as_bytes()), "Paños");
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let text = "VIN;Fecha\nAAA;01/02/2024\nBBB\nCCC;02/02/2024;extra\n;\nDDD;03/02/2024\n";
        let table = read_table("ventas.csv", text.as_bytes()).unwrap();
        assert_eq!(table.columns, vec!["VIN", "FECHA"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.skipped, 2);
        assert_eq!(table.column_index("FECHA"), Some(1));
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let table = read_table("x.csv", b"VIN,FECHA\n\nAAA,01/01/2024\n\n").unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.skipped, 0);
    }

    #[test]
    fn test_empty_file_is_an_error() {
        assert!(matches!(read_table("x.csv", b"  \n"), Err(IrpvError::Read { .. })));
    }
}
