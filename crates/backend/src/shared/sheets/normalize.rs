//! Header and cell cleanup applied to every downloaded sheet.

use chrono::NaiveDate;

/// Header fragments that mark a column as text (dates, channels, statuses).
const TEXT_COLUMN_MARKERS: &[&str] = &["FECHA", "CANAL", "ESTADO"];

/// Normalize a column header: trim, uppercase, fold accents, drop periods,
/// collapse inner whitespace. `" Días  Hábiles "` becomes `DIAS HABILES`.
pub fn normalize_header(raw: &str) -> String {
    let mut upper = String::with_capacity(raw.len());
    for ch in raw.trim_start_matches('\u{FEFF}').chars() {
        let folded = fold_accent(ch);
        if folded == '.' {
            continue;
        }
        upper.extend(folded.to_uppercase());
    }
    upper.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn fold_accent(ch: char) -> char {
    match ch {
        'á' | 'à' | 'ä' | 'â' | 'ã' | 'Á' | 'À' | 'Ä' | 'Â' | 'Ã' => 'A',
        'é' | 'è' | 'ë' | 'ê' | 'É' | 'È' | 'Ë' | 'Ê' => 'E',
        'í' | 'ì' | 'ï' | 'î' | 'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
        'ó' | 'ò' | 'ö' | 'ô' | 'õ' | 'Ó' | 'Ò' | 'Ö' | 'Ô' | 'Õ' => 'O',
        'ú' | 'ù' | 'ü' | 'û' | 'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
        'ñ' | 'Ñ' => 'N',
        'ç' | 'Ç' => 'C',
        '°' | 'º' => ' ',
        other => other,
    }
}

/// Columns kept as text instead of being coerced to numbers.
pub fn is_text_column(normalized: &str) -> bool {
    TEXT_COLUMN_MARKERS.iter().any(|m| normalized.contains(m))
}

pub fn is_date_column(normalized: &str) -> bool {
    normalized.contains("FECHA")
}

/// Parse a spreadsheet number: strips `$`, `%`, whitespace; understands
/// decimal comma with dot thousands (`1.234,5`), plain decimal point
/// (`12.5`), comma thousands (`1,234,567`) and accounting negatives (`(12)`).
///
/// Returns `None` for anything that is not a finite number.
pub fn parse_number(raw: &str) -> Option<f64> {
    let mut s: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '$' | '%' | '€'))
        .collect();

    let negative = s.starts_with('(') && s.ends_with(')') && s.len() > 2;
    if negative {
        s = s[1..s.len() - 1].to_string();
    }
    if s.is_empty() {
        return None;
    }

    let commas = s.matches(',').count();
    let dots = s.matches('.').count();
    let normalized = if commas == 1 {
        s.replace('.', "").replace(',', ".")
    } else if commas > 1 && dots <= 1 {
        s.replace(',', "")
    } else if commas == 0 && dots > 1 {
        s.replace('.', "")
    } else {
        s
    };

    let value = normalized.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(if negative { -value } else { value })
}

/// `parse_number` with the 0.0 default used for every numeric cell.
pub fn clean_number(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(0.0)
}

/// Parse a day-first date (`dd/mm/yyyy`, `dd-mm-yy`, `dd.mm.yyyy`, optional
/// trailing time). ISO `yyyy-mm-dd` is accepted as a fallback.
pub fn parse_date_dayfirst(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().split([' ', 'T']).next()?;
    let parts: Vec<&str> = date_part.split(['/', '-', '.']).collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        return None;
    }

    let nums: Vec<i32> = parts
        .iter()
        .map(|p| p.parse::<i32>().ok())
        .collect::<Option<Vec<_>>>()?;

    let (year, month, day) = if parts[0].len() == 4 {
        (nums[0], nums[1], nums[2])
    } else {
        let year = if parts[2].len() <= 2 { 2000 + nums[2] } else { nums[2] };
        (year, nums[1], nums[0])
    };

    if month < 1 || day < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("Venta Neta Mostrador"), "VENTA NETA MOSTRADOR");
        assert_eq!(normalize_header("\u{FEFF}Fecha"), "FECHA");
        assert_eq!(normalize_header("Paños"), "PANOS");
        assert_eq!(normalize_header("Obj. Facturación M.O."), "OBJ FACTURACION MO");
        assert_eq!(normalize_header("  "), "");
        assert_eq!(normalize_header(" Días  Hábiles "), "DIAS HABILES");
        assert_eq!(normalize_header("Fact. M.O."), "FACT MO");
    }

    #[test]
    fn test_text_columns() {
        assert!(is_text_column("FECHA"));
        assert!(is_text_column("CANAL DE VENTA"));
        assert!(is_text_column("ESTADO OR"));
        assert!(!is_text_column("VENTA MOSTRADOR"));
    }

    #[test]
    fn test_parse_number_formats() {
        assert_eq!(parse_number("$ 1.234.567,89"), Some(1234567.89));
        assert_eq!(parse_number("85,5%"), Some(85.5));
        assert_eq!(parse_number("12.5"), Some(12.5));
        assert_eq!(parse_number("1.234.567"), Some(1234567.0));
        assert_eq!(parse_number("1,234,567"), Some(1234567.0));
        assert_eq!(parse_number("1,234,567.5"), Some(1234567.5));
        assert_eq!(parse_number("(1.500)"), Some(-1.5));
        assert_eq!(parse_number("(1.500,00)"), Some(-1500.0));
        assert_eq!(parse_number("-42"), Some(-42.0));
        assert_eq!(parse_number(" 1 000 "), Some(1000.0));
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("$"), None);
        assert_eq!(parse_number("n/a"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(clean_number("#REF!"), 0.0);
    }

    #[test]
    fn test_clean_number_is_idempotent() {
        for raw in ["$ 1.234.567,89", "85,5%", "12.5", "(300)", "-0,25", "7", "abc"] {
            let once = clean_number(raw);
            let twice = clean_number(&once.to_string());
            assert_eq!(once, twice, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_parse_date_dayfirst() {
        assert_eq!(parse_date_dayfirst("05/03/2025"), NaiveDate::from_ymd_opt(2025, 3, 5));
        assert_eq!(parse_date_dayfirst("5-3-25"), NaiveDate::from_ymd_opt(2025, 3, 5));
        assert_eq!(parse_date_dayfirst("31.12.2024 18:30:00"), NaiveDate::from_ymd_opt(2024, 12, 31));
        assert_eq!(parse_date_dayfirst("2025-03-05"), NaiveDate::from_ymd_opt(2025, 3, 5));
        assert_eq!(parse_date_dayfirst("2025-03-05T10:00:00"), NaiveDate::from_ymd_opt(2025, 3, 5));
    }

    #[test]
    fn test_parse_date_rejects_invalid() {
        assert_eq!(parse_date_dayfirst(""), None);
        assert_eq!(parse_date_dayfirst("31/02/2025"), None);
        assert_eq!(parse_date_dayfirst("13/13/2025"), None);
        assert_eq!(parse_date_dayfirst("marzo"), None);
        assert_eq!(parse_date_dayfirst("1/2"), None);
    }
}
