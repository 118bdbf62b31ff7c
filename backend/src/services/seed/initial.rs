use crate::seed;
use crate::services::{blocking, log_error};
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use common::responses::ActionResult;

pub(crate) async fn process(state: web::Data<AppState>) -> impl Responder {
    let db = state.db().clone();
    let today = Utc::now().date_naive();
    match blocking(move || seed::seed_initial_data(&db, today, &mut rand::rng())).await {
        Ok(outcome) => HttpResponse::Ok().json(ActionResult::ok(outcome.message())),
        Err(e) => HttpResponse::InternalServerError()
            .json(ActionResult::failed(log_error("Error seeding database", &e).error)),
    }
}
