use crate::services::{blocking, log_error};
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::requests::CreateDatasetRequest;
use common::responses::ActionResult;

/// `POST /api/datasets`. Any failure, validation included, answers `500 {error}`.
pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<CreateDatasetRequest>,
) -> impl Responder {
    let registry = state.registry.clone();
    let request = payload.into_inner();
    match blocking(move || registry.create_dataset(request)).await {
        Ok(id) => HttpResponse::Ok().json(ActionResult::created(id, "Dataset uploaded successfully")),
        Err(e) => HttpResponse::InternalServerError().json(log_error("Error saving dataset", &e)),
    }
}
