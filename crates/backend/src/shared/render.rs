//! Turns computed figures into display fragments for the UI.

use contracts::shared::charts::{ChartKind, ChartPoint, ChartSpec};
use contracts::shared::kpi::{KpiCard, KpiStatus, MetricBadge, ValueFormat};
use contracts::shared::view::DataTable;

use super::format::{format_percent, format_value};
use super::kpi::{target_status, KpiFigures};

/// Slice colours, cycled in point order.
pub const PALETTE: &[&str] = &[
    "#1565c0", "#2e7d32", "#ef6c00", "#6a1b9a", "#00838f", "#ad1457", "#558b2f", "#4e342e",
];

pub fn kpi_card(id: &str, title: &str, format: ValueFormat, k: &KpiFigures) -> KpiCard {
    KpiCard {
        id: id.to_string(),
        title: title.to_string(),
        format,
        value: k.actual,
        value_text: format_value(k.actual, format),
        objective: k.objective,
        objective_text: format_value(k.objective, format),
        partial_objective: k.partial_objective,
        partial_objective_text: format_value(k.partial_objective, format),
        projection: k.projection,
        projection_text: format_value(k.projection, format),
        attainment_pct: k.attainment_pct,
        attainment_text: format_percent(k.attainment_pct, 1),
        status: k.status,
    }
}

/// Informational badge, no colour coding.
pub fn metric_badge(id: &str, title: &str, value: f64, format: ValueFormat) -> MetricBadge {
    MetricBadge {
        id: id.to_string(),
        title: title.to_string(),
        value,
        value_text: format_value(value, format),
        target_text: None,
        status: KpiStatus::Neutral,
    }
}

/// Badge coloured by `value >= target`.
pub fn target_badge(
    id: &str,
    title: &str,
    value: f64,
    target: f64,
    format: ValueFormat,
) -> MetricBadge {
    MetricBadge {
        id: id.to_string(),
        title: title.to_string(),
        value,
        value_text: format_value(value, format),
        target_text: Some(format!("Obj. {}", format_value(target, format))),
        status: target_status(value, target),
    }
}

fn points(values: &[(&str, f64)], format: ValueFormat) -> Vec<ChartPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, (label, value))| ChartPoint {
            label: label.to_string(),
            value: *value,
            value_text: format_value(*value, format),
            color: PALETTE[i % PALETTE.len()].to_string(),
        })
        .collect()
}

fn chart(id: &str, title: &str, kind: ChartKind, values: &[(&str, f64)], format: ValueFormat) -> ChartSpec {
    ChartSpec {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        points: points(values, format),
    }
}

pub fn pie_chart(id: &str, title: &str, values: &[(&str, f64)], format: ValueFormat) -> ChartSpec {
    chart(id, title, ChartKind::Pie, values, format)
}

pub fn donut_chart(id: &str, title: &str, values: &[(&str, f64)], format: ValueFormat) -> ChartSpec {
    chart(id, title, ChartKind::Donut, values, format)
}

pub fn bar_chart(id: &str, title: &str, values: &[(&str, f64)], format: ValueFormat) -> ChartSpec {
    chart(id, title, ChartKind::Bar, values, format)
}

pub fn table(title: &str, columns: &[&str], rows: Vec<Vec<String>>) -> DataTable {
    DataTable {
        title: title.to_string(),
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::kpi::{compute, WorkingDays};

    #[test]
    fn test_kpi_card_texts() {
        let k = compute(800_000.0, 1_000_000.0, WorkingDays::new(20.0, 10.0));
        let card = kpi_card("mo", "Facturación MO", ValueFormat::Money, &k);

        assert_eq!(card.value_text, "$ 800.000");
        assert_eq!(card.objective_text, "$ 1.000.000");
        assert_eq!(card.partial_objective_text, "$ 500.000");
        assert_eq!(card.projection_text, "$ 1.600.000");
        assert_eq!(card.attainment_text, "80,0 %");
        assert_eq!(card.status, KpiStatus::OnTrack);
    }

    #[test]
    fn test_badges() {
        let b = metric_badge("days", "Días hábiles", 21.0, ValueFormat::Integer);
        assert_eq!(b.value_text, "21");
        assert_eq!(b.target_text, None);
        assert_eq!(b.status, KpiStatus::Neutral);

        let b = target_badge("prod", "Productividad", 80.0, 85.0, ValueFormat::Percent { decimals: 1 });
        assert_eq!(b.target_text.as_deref(), Some("Obj. 85,0 %"));
        assert_eq!(b.status, KpiStatus::Behind);
    }

    #[test]
    fn test_chart_colours_cycle() {
        let values: Vec<(&str, f64)> = (0..PALETTE.len() + 1).map(|_| ("x", 1.0)).collect();
        let spec = pie_chart("mix", "Mix", &values, ValueFormat::Money);
        assert_eq!(spec.kind, ChartKind::Pie);
        assert_eq!(spec.points[0].color, spec.points[PALETTE.len()].color);
        assert_eq!(spec.points[0].value_text, "$ 1");
    }
}
