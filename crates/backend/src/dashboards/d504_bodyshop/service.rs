use contracts::shared::kpi::ValueFormat;
use contracts::shared::period::Period;
use contracts::shared::view::{DashboardSection, DashboardTab, DashboardView};

use crate::shared::kpi::{compute, safe_ratio, WorkingDays};
use crate::shared::render::{kpi_card, metric_badge};
use crate::shared::sheets::columns::bodyshop;
use crate::shared::sheets::{select_current, Dataset, SheetName};

/// Bodyshop branches, in display order
pub const BRANCHES: [(SheetName, &str, &str); 2] = [
    (SheetName::BodyshopJujuy, "jujuy", "Jujuy"),
    (SheetName::BodyshopSalta, "salta", "Salta"),
];

pub fn build(dataset: &Dataset, period: Period) -> DashboardView {
    let days = WorkingDays::from_calendar(&select_current(dataset.table(SheetName::Calendar), period));

    let sections = BRANCHES
        .iter()
        .map(|(sheet, key, name)| {
            let row = select_current(dataset.table(*sheet), period);
            let panels = row.number(&bodyshop::PANELS);
            let mut section = DashboardSection::new(format!("Chapa y Pintura {name}"));

            section.cards.push(kpi_card(
                &format!("bodyshop_{key}_labour"),
                "Facturación MO",
                ValueFormat::Money,
                &compute(
                    row.number(&bodyshop::LABOUR_BILLING),
                    row.number(&bodyshop::LABOUR_OBJECTIVE),
                    days,
                ),
            ));
            section.cards.push(kpi_card(
                &format!("bodyshop_{key}_panels"),
                "Paños",
                ValueFormat::Integer,
                &compute(panels, row.number(&bodyshop::PANELS_OBJECTIVE), days),
            ));
            section.badges.push(metric_badge(
                &format!("bodyshop_{key}_parts"),
                "Facturación repuestos",
                row.number(&bodyshop::PARTS_BILLING),
                ValueFormat::Money,
            ));
            section.badges.push(metric_badge(
                &format!("bodyshop_{key}_third_party"),
                "Facturación terceros",
                row.number(&bodyshop::THIRD_PARTY_BILLING),
                ValueFormat::Money,
            ));
            section.badges.push(metric_badge(
                &format!("bodyshop_{key}_panels_per_day"),
                "Paños por día",
                safe_ratio(panels, days.elapsed),
                ValueFormat::Number { decimals: 1 },
            ));
            section
        })
        .collect();

    DashboardView {
        tab: DashboardTab::Bodyshop,
        period,
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sheets::testing::dataset;
    use contracts::shared::kpi::KpiStatus;

    const CALENDAR: &str = "FECHA,DIAS HABILES,DIAS TRANSCURRIDOS\n15/06/2025,22,11\n";
    const SALTA: &str = "\
Fecha,Facturación M.O.,Obj. M.O.,Facturación Repuestos,Paños,Obj. Paños
15/06/2025,300000,500000,120000,165,300
";

    #[test]
    fn test_branch_sections() {
        let ds = dataset(&[(SheetName::Calendar, CALENDAR), (SheetName::BodyshopSalta, SALTA)]);
        let view = build(&ds, Period::new(2025, 6));

        assert_eq!(view.sections.len(), 2);
        assert_eq!(view.sections[0].title, "Chapa y Pintura Jujuy");
        assert!(view.sections[0].cards.iter().all(|c| c.value == 0.0));

        let salta = &view.sections[1];
        assert_eq!(salta.cards[0].value_text, "$ 300.000");
        assert_eq!(salta.cards[0].status, KpiStatus::OnTrack);
        assert_eq!(salta.cards[1].value_text, "165");
        assert_eq!(salta.cards[1].partial_objective_text, "150");
        assert_eq!(salta.badges[0].value_text, "$ 120.000");
        assert_eq!(salta.badges[2].value_text, "15,0");
    }
}
