use crate::services::{blocking, log_error};
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};

pub(crate) async fn process(state: web::Data<AppState>) -> impl Responder {
    let registry = state.registry.clone();
    match blocking(move || registry.list_datasets()).await {
        Ok(datasets) => HttpResponse::Ok().json(datasets),
        Err(e) => HttpResponse::InternalServerError().json(log_error("Error fetching datasets", &e)),
    }
}
