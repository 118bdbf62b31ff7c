use crate::seed;
use crate::services::{blocking, log_error};
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use chrono::{Datelike, Utc};
use common::responses::ActionResult;

pub(crate) async fn process(state: web::Data<AppState>) -> impl Responder {
    let db = state.db().clone();
    let year = Utc::now().year();
    match blocking(move || seed::reseed_revenue(&db, year, &mut rand::rng())).await {
        Ok(months) => HttpResponse::Ok().json(ActionResult::ok(format!(
            "Revenue reseeded for {} ({} months)",
            year, months
        ))),
        Err(e) => HttpResponse::InternalServerError()
            .json(ActionResult::failed(log_error("Error reseeding revenue", &e).error)),
    }
}
