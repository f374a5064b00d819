pub mod chart;
pub mod dashboard_page;
pub mod data_table;
pub mod kpi_card;
pub mod metric_badge;
