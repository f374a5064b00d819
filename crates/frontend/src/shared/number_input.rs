/// Parse a number typed by the user: `1.234,5`, `1234.5`, `10.000` and
/// `$ 1.000` are all accepted. A single dot followed by exactly three
/// digits is a thousands separator. Empty or invalid input is `None`.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let s: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '$' | '%'))
        .collect();
    if s.is_empty() {
        return None;
    }

    let normalized = match (s.matches(',').count(), s.matches('.').count()) {
        (1, _) => s.replace('.', "").replace(',', "."),
        (0, dots) if dots > 1 => s.replace('.', ""),
        (0, 1) if is_thousands_group(&s) => s.replace('.', ""),
        _ => s,
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_thousands_group(s: &str) -> bool {
    s.split_once('.').is_some_and(|(int, frac)| {
        !int.trim_start_matches('-').is_empty()
            && frac.len() == 3
            && frac.chars().all(|c| c.is_ascii_digit())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("1.234,5"), Some(1234.5));
        assert_eq!(parse_decimal("1234.5"), Some(1234.5));
        assert_eq!(parse_decimal("$ 1.000.000"), Some(1_000_000.0));
        assert_eq!(parse_decimal("15%"), Some(15.0));
        assert_eq!(parse_decimal("12.5"), Some(12.5));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
    }

    #[test]
    fn test_single_dot_thousands() {
        assert_eq!(parse_decimal("10.000"), Some(10_000.0));
        assert_eq!(parse_decimal("$ 1.000"), Some(1_000.0));
        assert_eq!(parse_decimal(".500"), Some(0.5));
        assert_eq!(parse_decimal("1.50"), Some(1.5));
    }
}
