pub mod dataset;
pub mod kpi;
pub mod revenue;
pub mod sale;
