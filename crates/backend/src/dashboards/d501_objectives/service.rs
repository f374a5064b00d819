use contracts::shared::kpi::ValueFormat;
use contracts::shared::period::Period;
use contracts::shared::view::{DashboardSection, DashboardTab, DashboardView};

use crate::dashboards::d503_parts::service::total_sales;
use crate::shared::kpi::{compute, KpiFigures, WorkingDays};
use crate::shared::render::{kpi_card, metric_badge, table};
use crate::shared::format::{format_money, format_percent};
use crate::shared::sheets::columns::{bodyshop, parts, services};
use crate::shared::sheets::{select_current, Dataset, SheetName};

pub fn build(dataset: &Dataset, period: Period) -> DashboardView {
    let calendar = select_current(dataset.table(SheetName::Calendar), period);
    let days = WorkingDays::from_calendar(&calendar);

    let mut progress = DashboardSection::new("Avance del mes");
    progress.badges.push(metric_badge("days_available", "Días hábiles", days.available, ValueFormat::Integer));
    progress.badges.push(metric_badge("days_elapsed", "Días transcurridos", days.elapsed, ValueFormat::Integer));
    progress.badges.push(metric_badge("days_remaining", "Días restantes", days.remaining(), ValueFormat::Integer));
    progress.badges.push(metric_badge(
        "month_progress",
        "Avance",
        days.progress_ratio() * 100.0,
        ValueFormat::Percent { decimals: 1 },
    ));

    let services_row = select_current(dataset.table(SheetName::Services), period);
    let parts_row = select_current(dataset.table(SheetName::Parts), period);
    let jujuy_row = select_current(dataset.table(SheetName::BodyshopJujuy), period);
    let salta_row = select_current(dataset.table(SheetName::BodyshopSalta), period);

    let kpis: [(&str, &str, KpiFigures); 4] = [
        (
            "services_labour",
            "Servicios: facturación MO",
            compute(
                services_row.number(&services::LABOUR_BILLING),
                services_row.number(&services::LABOUR_OBJECTIVE),
                days,
            ),
        ),
        (
            "parts_total",
            "Repuestos: venta total",
            compute(total_sales(&parts_row), parts_row.number(&parts::TOTAL_OBJECTIVE), days),
        ),
        (
            "bodyshop_jujuy_labour",
            "CyP Jujuy: facturación MO",
            compute(
                jujuy_row.number(&bodyshop::LABOUR_BILLING),
                jujuy_row.number(&bodyshop::LABOUR_OBJECTIVE),
                days,
            ),
        ),
        (
            "bodyshop_salta_labour",
            "CyP Salta: facturación MO",
            compute(
                salta_row.number(&bodyshop::LABOUR_BILLING),
                salta_row.number(&bodyshop::LABOUR_OBJECTIVE),
                days,
            ),
        ),
    ];

    let mut objectives = DashboardSection::new("Objetivos");
    let mut rows = Vec::with_capacity(kpis.len());
    for (id, title, k) in &kpis {
        objectives.cards.push(kpi_card(id, title, ValueFormat::Money, k));
        rows.push(vec![
            title.to_string(),
            format_money(k.actual),
            format_money(k.objective),
            format_money(k.partial_objective),
            format_money(k.projection),
            format_percent(k.attainment_pct, 1),
        ]);
    }
    objectives.tables.push(table(
        "Cumplimiento",
        &["Indicador", "Real", "Objetivo", "Obj. parcial", "Proyección", "Cumplimiento"],
        rows,
    ));

    DashboardView {
        tab: DashboardTab::Objectives,
        period,
        sections: vec![progress, objectives],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sheets::testing::dataset;
    use contracts::shared::kpi::KpiStatus;

    const CALENDAR: &str = "\
Fecha,Días Hábiles,Días Transcurridos
28/02/2025,19,19
14/03/2025,20,8
21/03/2025,20,10
";
    const SERVICES: &str = "FECHA,FACTURACION MO,OBJ FACTURACION MO\n21/03/2025,800000,1000000\n";
    const JUJUY: &str = "FECHA,FACTURACION MO,OBJ MO\n21/03/2025,100000,1000000\n";

    #[test]
    fn test_objectives_view() {
        let ds = dataset(&[
            (SheetName::Calendar, CALENDAR),
            (SheetName::Services, SERVICES),
            (SheetName::BodyshopJujuy, JUJUY),
        ]);
        let view = build(&ds, Period::new(2025, 3));

        let progress = &view.sections[0];
        assert_eq!(progress.badges[0].value_text, "20");
        assert_eq!(progress.badges[1].value_text, "10");
        assert_eq!(progress.badges[2].value_text, "10");
        assert_eq!(progress.badges[3].value_text, "50,0 %");

        let objectives = &view.sections[1];
        let services = &objectives.cards[0];
        assert_eq!(services.partial_objective_text, "$ 500.000");
        assert_eq!(services.projection_text, "$ 1.600.000");
        assert_eq!(services.status, KpiStatus::OnTrack);

        assert_eq!(objectives.cards[2].status, KpiStatus::Behind);
        // no parts or Salta sheet: 0 against a 0 partial
        assert_eq!(objectives.cards[1].value, 0.0);
        assert_eq!(objectives.cards[3].status, KpiStatus::OnTrack);

        let table = &objectives.tables[0];
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[0][5], "80,0 %");
    }

    #[test]
    fn test_period_without_rows() {
        let ds = dataset(&[(SheetName::Calendar, CALENDAR), (SheetName::Services, SERVICES)]);
        let view = build(&ds, Period::new(2024, 1));
        assert!(view.sections[1].cards.iter().all(|c| c.value == 0.0 && c.partial_objective == 0.0));
        assert_eq!(view.sections[0].badges[0].value, 0.0);
    }
}
