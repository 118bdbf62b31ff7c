//! Types shared between the dashboard server and the browser UI.
//!
//! - `model`: persisted entities (datasets, KPIs, revenue, sales).
//! - `requests` / `responses`: JSON bodies exchanged over `/api`.
//! - `chart`: projection of dataset rows into chart-ready series.

pub mod chart;
pub mod model;
pub mod requests;
pub mod responses;
