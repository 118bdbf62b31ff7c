use crate::services::{blocking, log_error};
use crate::state::AppState;
use crate::store::dashboard;
use actix_web::{web, HttpResponse, Responder};

/// Number of sales shown in the "Recent Sales" card.
const RECENT_SALES: usize = 5;

pub(crate) async fn process(state: web::Data<AppState>) -> impl Responder {
    let db = state.db().clone();
    match blocking(move || db.with_conn(|conn| dashboard::recent_sales(conn, RECENT_SALES))).await
    {
        Ok(sales) => HttpResponse::Ok().json(sales),
        Err(e) => HttpResponse::InternalServerError().json(log_error("Error fetching sales", &e)),
    }
}
