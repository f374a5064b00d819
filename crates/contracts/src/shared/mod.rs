pub mod charts;
pub mod kpi;
pub mod period;
pub mod view;
