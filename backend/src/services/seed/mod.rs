//! Fixture seeding.
//!
//! - `GET /api/seed`: seeds the store unless KPIs already exist.
//! - `POST /api/seed/revenue`: replaces revenue with a fresh current year.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod initial;
mod revenue;

const API_PATH: &str = "/api/seed";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(initial::process))
        .route("/revenue", post().to(revenue::process))
}

#[cfg(test)]
mod tests {
    use crate::services::{configure, testing};
    use actix_web::{test, web, App};
    use common::model::dataset::DatasetSummary;
    use common::model::revenue::RevenueEntry;
    use common::responses::ActionResult;

    #[actix_web::test]
    async fn seeding_twice_reports_existing_data() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(100)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/seed").to_request();
        let first: ActionResult = test::call_and_read_body_json(&app, req).await;
        let req = test::TestRequest::get().uri("/api/seed").to_request();
        let second: ActionResult = test::call_and_read_body_json(&app, req).await;

        assert!(first.success && second.success);
        assert_eq!(first.message.as_deref(), Some("Database seeded successfully"));
        assert_eq!(second.message.as_deref(), Some("Database already has data"));

        let req = test::TestRequest::get().uri("/api/datasets").to_request();
        let datasets: Vec<DatasetSummary> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(datasets.len(), 1);
    }

    #[actix_web::test]
    async fn reseed_replaces_revenue() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(100)))
                .configure(configure),
        )
        .await;

        for _ in 0..2 {
            let req = test::TestRequest::post().uri("/api/seed/revenue").to_request();
            let result: ActionResult = test::call_and_read_body_json(&app, req).await;
            assert!(result.success);
        }

        let req = test::TestRequest::get().uri("/api/revenue").to_request();
        let revenue: Vec<RevenueEntry> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(revenue.len(), 12);
    }

    #[actix_web::test]
    async fn failed_reseed_answers_500_with_action_result() {
        let state = testing::state(100);
        state
            .db()
            .with_conn(|conn| Ok(conn.execute_batch("DROP TABLE revenue")?))
            .expect("drop revenue");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/seed/revenue").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 500);

        let result: ActionResult = test::read_body_json(resp).await;
        assert!(!result.success);
        assert!(result.message.is_none());
        assert!(result.error.expect("error").contains("revenue"));
    }
}
