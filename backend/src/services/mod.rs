//! HTTP surface of the dashboard, one sub-module per API area.
//!
//! - `datasets`: list, create, upload (CSV) and fetch datasets.
//! - `seed`: fixture seeding and revenue reseeding.
//! - `dashboard`: fixed-shape KPI, revenue and sales reads.

pub mod dashboard;
pub mod datasets;
pub mod seed;

use crate::error::DashboardResult;
use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};
use common::responses::ErrorBody;
use log::error;

/// Registers every API scope. `dashboard` claims the `/api` prefix and must come last.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(datasets::configure_routes())
        .service(seed::configure_routes())
        .service(dashboard::configure_routes());
}

/// JSON body extractor settings. A body that is too large or does not match
/// the request type answers `500 {error}`, like every other creation failure.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            error!("Rejected JSON body: {}", err);
            let response =
                HttpResponse::InternalServerError().json(ErrorBody::new(err.to_string()));
            InternalError::from_response(err, response).into()
        })
}

/// Runs store work on Actix's blocking pool.
pub(crate) async fn blocking<T, F>(f: F) -> DashboardResult<T>
where
    F: FnOnce() -> DashboardResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(f).await?
}

/// Logs a failed request and builds the `{ "error": ... }` body for it.
pub(crate) fn log_error(context: &str, err: &crate::error::DashboardError) -> ErrorBody {
    error!("{}: {}", context, err);
    ErrorBody::new(err.to_string())
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::registry::DatasetRegistry;
    use crate::state::AppState;
    use crate::store::Database;
    use std::sync::Arc;

    pub fn state(chunk_size: usize) -> AppState {
        let db = Arc::new(Database::open_in_memory().expect("db"));
        AppState::new(DatasetRegistry::new(db, chunk_size), 1024 * 1024)
    }
}
