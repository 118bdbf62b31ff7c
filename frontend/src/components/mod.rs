pub mod dashboard_grid;
pub mod dataset_list;
pub mod helpers;
pub mod kpi_cards;
pub mod recent_sales;
pub mod revenue_overview;
pub mod upload_dialog;
pub mod visualizer;
