use contracts::shared::kpi::ValueFormat;
use contracts::shared::period::{month_name_es, Period};
use contracts::shared::view::{DashboardSection, DashboardTab, DashboardView};

use crate::dashboards::d503_parts::service::total_sales;
use crate::shared::format::format_money;
use crate::shared::render::{bar_chart, table};
use crate::shared::sheets::columns::{bodyshop, services};
use crate::shared::sheets::{select_current, Dataset, SheetName};

/// Billing of one month, per business line
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthTotals {
    pub month: u32,
    pub services: f64,
    pub parts: f64,
    pub bodyshop_jujuy: f64,
    pub bodyshop_salta: f64,
}

impl MonthTotals {
    pub fn total(&self) -> f64 {
        self.services + self.parts + self.bodyshop_jujuy + self.bodyshop_salta
    }

    fn cells(&self) -> [f64; 5] {
        [
            self.services,
            self.parts,
            self.bodyshop_jujuy,
            self.bodyshop_salta,
            self.total(),
        ]
    }
}

/// Months 1..=`period.month` of `period.year`.
pub fn monthly_totals(dataset: &Dataset, period: Period) -> Vec<MonthTotals> {
    (1..=period.month.min(12))
        .map(|month| {
            let p = Period::new(period.year, month);
            let pick = |sheet| select_current(dataset.table(sheet), p);
            MonthTotals {
                month,
                services: pick(SheetName::Services).number(&services::LABOUR_BILLING),
                parts: total_sales(&pick(SheetName::Parts)),
                bodyshop_jujuy: pick(SheetName::BodyshopJujuy).number(&bodyshop::LABOUR_BILLING),
                bodyshop_salta: pick(SheetName::BodyshopSalta).number(&bodyshop::LABOUR_BILLING),
            }
        })
        .collect()
}

pub fn build(dataset: &Dataset, period: Period) -> DashboardView {
    let months = monthly_totals(dataset, period);

    let ytd = months.iter().fold(MonthTotals::default(), |acc, m| MonthTotals {
        month: 0,
        services: acc.services + m.services,
        parts: acc.parts + m.parts,
        bodyshop_jujuy: acc.bodyshop_jujuy + m.bodyshop_jujuy,
        bodyshop_salta: acc.bodyshop_salta + m.bodyshop_salta,
    });

    let to_row = |label: String, m: &MonthTotals| {
        std::iter::once(label)
            .chain(m.cells().iter().map(|v| format_money(*v)))
            .collect::<Vec<_>>()
    };

    let mut rows: Vec<Vec<String>> = months
        .iter()
        .map(|m| to_row(month_name_es(m.month).to_string(), m))
        .collect();
    rows.push(to_row("Total acumulado".to_string(), &ytd));

    let bars: Vec<(&str, f64)> = months
        .iter()
        .map(|m| (month_name_es(m.month), m.total()))
        .collect();

    let mut section = DashboardSection::new(format!("Evolución {}", period.year));
    section.tables.push(table(
        "Facturación mensual",
        &["Mes", "Servicios MO", "Repuestos", "CyP Jujuy", "CyP Salta", "Total"],
        rows,
    ));
    section.charts.push(bar_chart(
        "historical_monthly_total",
        "Facturación total por mes",
        &bars,
        ValueFormat::Money,
    ));

    DashboardView {
        tab: DashboardTab::Historical,
        period,
        sections: vec![section],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sheets::testing::dataset;

    const SERVICES: &str = "\
FECHA,FACTURACION MO
31/01/2025,100
15/02/2025,150
28/02/2025,200
31/03/2025,300
30/04/2025,999
31/03/2024,5000
";
    const PARTS: &str = "FECHA,VENTA MOSTRADOR,VENTA TALLER\n31/01/2025,10,20\n31/03/2025,30,40\n";

    #[test]
    fn test_monthly_totals_up_to_selected_month() {
        let ds = dataset(&[(SheetName::Services, SERVICES), (SheetName::Parts, PARTS)]);
        let months = monthly_totals(&ds, Period::new(2025, 3));

        assert_eq!(months.len(), 3);
        assert_eq!(months[0].total(), 130.0);
        assert_eq!(months[1].services, 200.0);
        assert_eq!(months[1].parts, 0.0);
        assert_eq!(months[2].total(), 370.0);
    }

    #[test]
    fn test_table_has_ytd_row_and_chart() {
        let ds = dataset(&[(SheetName::Services, SERVICES), (SheetName::Parts, PARTS)]);
        let view = build(&ds, Period::new(2025, 3));
        let section = &view.sections[0];

        let table = &section.tables[0];
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[0][0], "Enero");
        let ytd = &table.rows[3];
        assert_eq!(ytd[0], "Total acumulado");
        assert_eq!(ytd[1], "$ 600");
        assert_eq!(ytd[5], "$ 700");

        let chart = &section.charts[0];
        assert_eq!(chart.points.len(), 3);
        assert_eq!(chart.points[2].label, "Marzo");
        assert_eq!(chart.max_value(), 370.0);
    }
}
