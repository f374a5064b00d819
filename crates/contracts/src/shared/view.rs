use serde::{Deserialize, Serialize};

use super::charts::ChartSpec;
use super::kpi::{KpiCard, MetricBadge};
use super::period::Period;

/// The five dashboard sections shown in the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashboardTab {
    Objectives,
    ServicesWorkshop,
    Parts,
    Bodyshop,
    Historical,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 5] = [
        DashboardTab::Objectives,
        DashboardTab::ServicesWorkshop,
        DashboardTab::Parts,
        DashboardTab::Bodyshop,
        DashboardTab::Historical,
    ];

    /// URL segment used by `/api/dashboard/:tab`
    pub fn slug(&self) -> &'static str {
        match self {
            DashboardTab::Objectives => "objectives",
            DashboardTab::ServicesWorkshop => "services",
            DashboardTab::Parts => "parts",
            DashboardTab::Bodyshop => "bodyshop",
            DashboardTab::Historical => "historical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Objectives => "Objetivos",
            DashboardTab::ServicesWorkshop => "Servicios y Taller",
            DashboardTab::Parts => "Repuestos",
            DashboardTab::Bodyshop => "Chapa y Pintura",
            DashboardTab::Historical => "Histórico",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }
}

/// Plain text table; cells are already formatted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A titled block of cards, badges, charts and tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSection {
    pub title: String,
    #[serde(default)]
    pub cards: Vec<KpiCard>,
    #[serde(default)]
    pub badges: Vec<MetricBadge>,
    #[serde(default)]
    pub charts: Vec<ChartSpec>,
    #[serde(default)]
    pub tables: Vec<DataTable>,
}

impl DashboardSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Response of `GET /api/dashboard/:tab`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub tab: DashboardTab,
    pub period: Period,
    pub sections: Vec<DashboardSection>,
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}
