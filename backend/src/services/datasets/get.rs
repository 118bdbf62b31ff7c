//! `GET /api/datasets/{id}`: a dataset with all of its rows.
//!
//! The body always has a `success` flag; on failure it carries `error`
//! instead of `dataset` and `data`.

use crate::error::DashboardError;
use crate::services::{blocking, log_error};
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::responses::DatasetData;

pub(crate) async fn process(state: web::Data<AppState>, id: web::Path<i64>) -> impl Responder {
    let registry = state.registry.clone();
    let id = id.into_inner();
    match blocking(move || registry.get_dataset(id)).await {
        Ok(found) => HttpResponse::Ok().json(DatasetData::loaded(found.dataset, found.rows)),
        Err(e @ DashboardError::NotFound(_)) => {
            HttpResponse::NotFound().json(DatasetData::failed(e.to_string()))
        }
        Err(e) => HttpResponse::InternalServerError().json(DatasetData::failed(
            log_error("Error fetching dataset data", &e).error,
        )),
    }
}

#[cfg(test)]
mod tests {
    use crate::services::{configure, testing};
    use actix_web::{test, web, App};
    use common::responses::DatasetData;

    #[actix_web::test]
    async fn unknown_id_is_404_with_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(100)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/datasets/404").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 404);
        let body: DatasetData = test::read_body_json(resp).await;
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Dataset not found: 404"));
    }
}
