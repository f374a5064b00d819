use contracts::shared::kpi::ValueFormat;
use contracts::shared::period::Period;
use contracts::shared::view::{DashboardSection, DashboardTab, DashboardView};

use crate::shared::config::DashboardConfig;
use crate::shared::kpi::{compute, safe_ratio, WorkingDays};
use crate::shared::render::{donut_chart, kpi_card, metric_badge, pie_chart, target_badge};
use crate::shared::sheets::columns::parts;
use crate::shared::sheets::{select_current, CurrentRow, Dataset, SheetName};

/// Total parts sales. Sheets without a total column get the channel sum.
pub fn total_sales(row: &CurrentRow<'_>) -> f64 {
    if row.has(&parts::TOTAL_SALES) {
        row.number(&parts::TOTAL_SALES)
    } else {
        channel_sales(row).iter().map(|(_, v)| v).sum()
    }
}

fn channel_sales(row: &CurrentRow<'_>) -> [(&'static str, f64); 4] {
    [
        ("Mostrador", row.number(&parts::COUNTER_SALES)),
        ("Taller", row.number(&parts::WORKSHOP_SALES)),
        ("Mayorista", row.number(&parts::WHOLESALE_SALES)),
        ("Interna", row.number(&parts::INTERNAL_SALES)),
    ]
}

/// Gross margin over total sales, in percent
pub fn margin_pct(row: &CurrentRow<'_>) -> f64 {
    let sales = total_sales(row);
    safe_ratio(sales - row.number(&parts::TOTAL_COST), sales) * 100.0
}

pub fn build(dataset: &Dataset, period: Period, config: &DashboardConfig) -> DashboardView {
    let days = WorkingDays::from_calendar(&select_current(dataset.table(SheetName::Calendar), period));
    let row = select_current(dataset.table(SheetName::Parts), period);

    let mut sales = DashboardSection::new("Ventas de repuestos");
    let total = compute(total_sales(&row), row.number(&parts::TOTAL_OBJECTIVE), days);
    sales
        .cards
        .push(kpi_card("parts_total", "Venta total", ValueFormat::Money, &total));

    for (id, title, actual, objective) in [
        ("parts_counter", "Mostrador", &parts::COUNTER_SALES, &parts::COUNTER_OBJECTIVE),
        ("parts_workshop", "Taller", &parts::WORKSHOP_SALES, &parts::WORKSHOP_OBJECTIVE),
        ("parts_wholesale", "Mayorista", &parts::WHOLESALE_SALES, &parts::WHOLESALE_OBJECTIVE),
    ] {
        let k = compute(row.number(actual), row.number(objective), days);
        sales.cards.push(kpi_card(id, title, ValueFormat::Money, &k));
    }

    sales.badges.push(target_badge(
        "parts_margin",
        "Margen bruto",
        margin_pct(&row),
        config.target_margin_pct,
        ValueFormat::Percent { decimals: 1 },
    ));
    sales.badges.push(metric_badge(
        "parts_internal",
        "Venta interna",
        row.number(&parts::INTERNAL_SALES),
        ValueFormat::Money,
    ));

    sales.charts.push(pie_chart(
        "parts_channel_mix",
        "Mix por canal",
        &channel_sales(&row),
        ValueFormat::Money,
    ));

    let mut stock = DashboardSection::new("Salud del stock");
    let healthy = row.number(&parts::HEALTHY_STOCK);
    let at_risk = row.number(&parts::AT_RISK_STOCK);
    let obsolete = row.number(&parts::OBSOLETE_STOCK);
    let stock_total = healthy + at_risk + obsolete;

    stock.badges.push(metric_badge("stock_total", "Stock total", stock_total, ValueFormat::Money));
    stock.badges.push(metric_badge(
        "stock_obsolete_share",
        "Obsoleto",
        safe_ratio(obsolete, stock_total) * 100.0,
        ValueFormat::Percent { decimals: 1 },
    ));
    stock.charts.push(donut_chart(
        "stock_health",
        "Composición del stock",
        &[("Sano", healthy), ("En riesgo", at_risk), ("Obsoleto", obsolete)],
        ValueFormat::Money,
    ));

    DashboardView {
        tab: DashboardTab::Parts,
        period,
        sections: vec![sales, stock],
    }
}

/// Parts sales and objective of the month, for coverage figures
pub fn month_sales_and_objective(dataset: &Dataset, period: Period) -> (f64, f64) {
    let row = select_current(dataset.table(SheetName::Parts), period);
    (total_sales(&row), row.number(&parts::TOTAL_OBJECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::kpi::KpiStatus;
    use crate::shared::sheets::testing::dataset;

    const CALENDAR: &str = "FECHA,DIAS HABILES,DIAS TRANSCURRIDOS\n31/03/2025,20,10\n";
    const PARTS: &str = "\
FECHA,VENTA MOSTRADOR,VENTA TALLER,VENTA MAYORISTA,VENTA INTERNA,OBJ VENTA TOTAL,OBJ MOSTRADOR,COSTO TOTAL,STOCK SANO,STOCK RIESGO,STOCK OBSOLETO
31/03/2025,\"$ 400.000,00\",300000,200000,100000,2000000,600000,800000,700,200,100
";

    fn config() -> DashboardConfig {
        DashboardConfig::default()
    }

    #[test]
    fn test_total_falls_back_to_channel_sum() {
        let ds = dataset(&[(SheetName::Parts, PARTS)]);
        let row = select_current(ds.table(SheetName::Parts), Period::new(2025, 3));
        assert_eq!(total_sales(&row), 1_000_000.0);
        assert_eq!(margin_pct(&row), 20.0);
    }

    #[test]
    fn test_total_column_wins_when_present() {
        let csv = "FECHA,VENTA MOSTRADOR,VENTA TOTAL\n31/03/2025,10,99\n";
        let ds = dataset(&[(SheetName::Parts, csv)]);
        let row = select_current(ds.table(SheetName::Parts), Period::new(2025, 3));
        assert_eq!(total_sales(&row), 99.0);
    }

    #[test]
    fn test_build_view() {
        let ds = dataset(&[(SheetName::Calendar, CALENDAR), (SheetName::Parts, PARTS)]);
        let view = build(&ds, Period::new(2025, 3), &config());

        let sales = &view.sections[0];
        assert_eq!(sales.cards.len(), 4);
        assert_eq!(sales.cards[0].value_text, "$ 1.000.000");
        assert_eq!(sales.cards[0].partial_objective_text, "$ 1.000.000");
        assert_eq!(sales.cards[0].status, KpiStatus::OnTrack);
        // counter: 400k against 300k partial
        assert_eq!(sales.cards[1].status, KpiStatus::OnTrack);
        // no workshop objective: partial is 0
        assert_eq!(sales.cards[2].status, KpiStatus::OnTrack);

        assert_eq!(sales.badges[0].value_text, "20,0 %");
        assert_eq!(sales.badges[0].status, KpiStatus::OnTrack);
        assert_eq!(sales.charts[0].points.len(), 4);

        let stock = &view.sections[1];
        assert_eq!(stock.badges[1].value_text, "10,0 %");
        assert_eq!(stock.charts[0].total(), 1000.0);
    }

    #[test]
    fn test_build_view_without_data_is_zero() {
        let view = build(&Dataset::default(), Period::new(2025, 3), &config());
        let sales = &view.sections[0];
        assert!(sales.cards.iter().all(|c| c.value == 0.0 && c.projection == 0.0));
        assert_eq!(sales.charts[0].total(), 0.0);
    }
}
