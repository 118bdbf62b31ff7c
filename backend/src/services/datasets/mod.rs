//! Dataset endpoints under `/api/datasets`.
//!
//! - `GET /api/datasets`: metadata of every dataset, newest first.
//! - `POST /api/datasets`: creates a dataset from `{name, description?, columns, data}`.
//! - `POST /api/datasets/upload`: multipart upload; a `json` part with
//!   `{name, description?}` followed by a `file` part holding the CSV.
//! - `GET /api/datasets/{id}`: metadata plus every row, for the visualizer.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod create;
mod get;
mod list;
mod upload;

const API_PATH: &str = "/api/datasets";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        // before `/{id}` so the literal segment wins
        .route("/upload", post().to(upload::process))
        .route("/{id}", get().to(get::process))
}
