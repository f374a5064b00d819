use contracts::shared::kpi::ValueFormat;
use contracts::shared::period::Period;
use contracts::shared::view::{DashboardSection, DashboardTab, DashboardView};

use crate::shared::config::DashboardConfig;
use crate::shared::kpi::{compute, safe_ratio, WorkingDays};
use crate::shared::render::{kpi_card, metric_badge, target_badge};
use crate::shared::sheets::columns::{services, workshop};
use crate::shared::sheets::{select_current, Dataset, SheetName};

const PCT: ValueFormat = ValueFormat::Percent { decimals: 1 };

pub fn build(dataset: &Dataset, period: Period, config: &DashboardConfig) -> DashboardView {
    let days = WorkingDays::from_calendar(&select_current(dataset.table(SheetName::Calendar), period));

    let row = select_current(dataset.table(SheetName::Services), period);
    let labour = row.number(&services::LABOUR_BILLING);
    let units = row.number(&services::CUSTOMER_UNITS);

    let mut services_section = DashboardSection::new("Servicios");
    services_section.cards.push(kpi_card(
        "services_labour",
        "Facturación MO",
        ValueFormat::Money,
        &compute(labour, row.number(&services::LABOUR_OBJECTIVE), days),
    ));
    services_section.cards.push(kpi_card(
        "services_cpus",
        "CPUS",
        ValueFormat::Integer,
        &compute(units, row.number(&services::CUSTOMER_UNITS_OBJECTIVE), days),
    ));
    services_section.badges.push(metric_badge(
        "services_ticket",
        "Ticket promedio MO",
        safe_ratio(labour, units),
        ValueFormat::Money,
    ));
    services_section.badges.push(metric_badge(
        "services_prepaid",
        "Servicios prepagos",
        row.number(&services::PREPAID_SERVICES),
        ValueFormat::Integer,
    ));

    let row = select_current(dataset.table(SheetName::Workshop), period);
    let available = row.number(&workshop::AVAILABLE_HOURS);
    let worked = row.number(&workshop::WORKED_HOURS);
    let billed = row.number(&workshop::BILLED_HOURS);

    let mut workshop_section = DashboardSection::new("Taller");
    workshop_section.cards.push(kpi_card(
        "workshop_billed_hours",
        "Horas facturadas",
        ValueFormat::Integer,
        &compute(billed, row.number(&workshop::BILLED_HOURS_OBJECTIVE), days),
    ));
    workshop_section.badges.push(metric_badge("workshop_available", "Horas disponibles", available, ValueFormat::Integer));
    workshop_section.badges.push(metric_badge("workshop_worked", "Horas trabajadas", worked, ValueFormat::Integer));
    workshop_section.badges.push(metric_badge("workshop_billed", "Horas facturadas", billed, ValueFormat::Integer));
    workshop_section.badges.push(target_badge(
        "workshop_productivity",
        "Productividad",
        safe_ratio(worked, available) * 100.0,
        config.productivity_target_pct,
        PCT,
    ));
    workshop_section.badges.push(target_badge(
        "workshop_efficiency",
        "Eficiencia",
        safe_ratio(billed, worked) * 100.0,
        config.efficiency_target_pct,
        PCT,
    ));

    DashboardView {
        tab: DashboardTab::ServicesWorkshop,
        period,
        sections: vec![services_section, workshop_section],
    }
}
