use crate::services::{blocking, log_error};
use crate::state::AppState;
use crate::store::dashboard;
use actix_web::{web, HttpResponse, Responder};

pub(crate) async fn process(state: web::Data<AppState>) -> impl Responder {
    let db = state.db().clone();
    match blocking(move || db.with_conn(dashboard::list_kpis)).await {
        Ok(kpis) => HttpResponse::Ok().json(kpis),
        Err(e) => HttpResponse::InternalServerError().json(log_error("Error fetching KPIs", &e)),
    }
}
