use crate::services::{blocking, log_error};
use crate::state::AppState;
use crate::store::dashboard;
use actix_web::{web, HttpResponse, Responder};

pub(crate) async fn process(state: web::Data<AppState>) -> impl Responder {
    let db = state.db().clone();
    match blocking(move || db.with_conn(dashboard::list_revenue)).await {
        Ok(revenue) => HttpResponse::Ok().json(revenue),
        Err(e) => {
            HttpResponse::InternalServerError().json(log_error("Error fetching revenue", &e))
        }
    }
}
