//! es-AR display formatting: `.` for thousands, `,` for decimals.

use contracts::shared::kpi::ValueFormat;

/// Groups an integer with `.` every three digits: `1234567` becomes `1.234.567`.
pub fn format_thousands(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Round half away from zero, collapsing -0 to 0.
fn round_to_i64(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let r = value.round() as i64;
    if r == 0 {
        0
    } else {
        r
    }
}

/// `$ 1.234.567`, no decimals; negatives as `-$ 1.234`.
pub fn format_money(value: f64) -> String {
    let n = round_to_i64(value);
    if n < 0 {
        format!("-$ {}", format_thousands(-n))
    } else {
        format!("$ {}", format_thousands(n))
    }
}

/// `1.234,5` with a fixed number of decimals.
pub fn format_number(value: f64, decimals: u8) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let text = format!("{:.*}", decimals as usize, value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let int_value: i64 = int_part.parse().unwrap_or(0);
    let mut out = format_thousands(int_value);
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }

    let is_zero = out.chars().all(|c| matches!(c, '0' | '.' | ','));
    if value < 0.0 && !is_zero {
        out.insert(0, '-');
    }
    out
}

/// `85,3 %`
pub fn format_percent(value: f64, decimals: u8) -> String {
    format!("{} %", format_number(value, decimals))
}

/// Hours, units, days: rounded, with separators.
pub fn format_integer(value: f64) -> String {
    format_thousands(round_to_i64(value))
}

pub fn format_value(value: f64, format: ValueFormat) -> String {
    match format {
        ValueFormat::Money => format_money(value),
        ValueFormat::Number { decimals } => format_number(value, decimals),
        ValueFormat::Percent { decimals } => format_percent(value, decimals),
        ValueFormat::Integer => format_integer(value),
    }
}
