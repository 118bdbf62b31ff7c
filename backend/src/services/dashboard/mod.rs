//! Fixed-shape reads behind the overview tab.
//!
//! - `GET /api/kpi`: every KPI ordered by id.
//! - `GET /api/revenue`: revenue ordered by year then calendar month.
//! - `GET /api/sales`: the five most recent sales.

use actix_web::web::{get, scope};
use actix_web::Scope;

mod kpi;
mod revenue;
mod sales;

const API_PATH: &str = "/api";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/kpi", get().to(kpi::process))
        .route("/revenue", get().to(revenue::process))
        .route("/sales", get().to(sales::process))
}

#[cfg(test)]
mod tests {
    use crate::seed;
    use crate::services::{configure, testing};
    use actix_web::{test, web, App};
    use chrono::NaiveDate;
    use common::model::kpi::Kpi;
    use common::model::revenue::RevenueEntry;
    use common::model::sale::SaleEntry;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[actix_web::test]
    async fn seeded_overview_endpoints() {
        let state = testing::state(100);
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).expect("date");
        seed::seed_initial_data(state.db(), today, &mut StdRng::seed_from_u64(3)).expect("seed");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/kpi").to_request();
        let kpis: Vec<Kpi> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(kpis.len(), 4);
        assert!(kpis.windows(2).all(|w| w[0].id < w[1].id));

        let req = test::TestRequest::get().uri("/api/revenue").to_request();
        let revenue: Vec<RevenueEntry> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(revenue.len(), 12);
        assert_eq!(revenue[0].month, "Jan");
        assert_eq!(revenue[11].month, "Dec");

        let req = test::TestRequest::get().uri("/api/sales").to_request();
        let sales: Vec<SaleEntry> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(sales.len(), 5);
        assert_eq!(sales[0].date, today);
        assert!(sales.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[actix_web::test]
    async fn empty_store_answers_empty_lists() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(100)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/kpi").to_request();
        let kpis: Vec<Kpi> = test::call_and_read_body_json(&app, req).await;
        assert!(kpis.is_empty());
    }
}
