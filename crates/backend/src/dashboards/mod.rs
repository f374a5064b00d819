pub mod d501_objectives;
pub mod d502_services_workshop;
pub mod d503_parts;
pub mod d504_bodyshop;
pub mod d505_historical;

use contracts::shared::period::Period;
use contracts::shared::view::{DashboardTab, DashboardView};

use crate::shared::config::DashboardConfig;
use crate::shared::sheets::Dataset;

/// Compute the view of one tab from a dataset snapshot.
pub fn build_view(
    tab: DashboardTab,
    dataset: &Dataset,
    period: Period,
    config: &DashboardConfig,
) -> DashboardView {
    match tab {
        DashboardTab::Objectives => d501_objectives::service::build(dataset, period),
        DashboardTab::ServicesWorkshop => d502_services_workshop::service::build(dataset, period, config),
        DashboardTab::Parts => d503_parts::service::build(dataset, period, config),
        DashboardTab::Bodyshop => d504_bodyshop::service::build(dataset, period),
        DashboardTab::Historical => d505_historical::service::build(dataset, period),
    }
}
