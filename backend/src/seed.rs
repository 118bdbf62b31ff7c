//! Fixture data for a fresh dashboard.
//!
//! Seeding is idempotent: a populated `kpi` table means the database has been
//! seeded before and nothing is written.

use crate::error::DashboardResult;
use crate::store::{dashboard, datasets, Database};
use chrono::{Datelike, Duration, NaiveDate, Utc};
use common::model::dataset::{CellValue, RowData};
use common::model::revenue::{RevenueEntry, MONTHS};
use common::model::sale::SaleEntry;
use log::info;
use rand::Rng;
use rusqlite::Connection;

const BASE_REVENUE: f64 = 10_000.0;
const MONTHLY_GROWTH: f64 = 0.05;

const KPIS: [(&str, f64, f64, &str); 4] = [
    ("Total Revenue", 45231.89, 20.1, "last month"),
    ("Subscriptions", 2350.0, 180.1, "last month"),
    ("Sales", 12234.0, 19.0, "last month"),
    ("Active Now", 573.0, 201.0, "last hour"),
];

const CUSTOMERS: [(&str, &str, f64, &str); 10] = [
    ("Olivia Martin", "olivia.martin@example.com", 1999.0, "Premium Plan"),
    ("Jackson Lee", "jackson.lee@example.com", 39.0, "Basic Plan"),
    ("Isabella Nguyen", "isabella.nguyen@example.com", 299.0, "Pro Plan"),
    ("William Kim", "will@example.com", 99.0, "Standard Plan"),
    ("Sofia Davis", "sofia.davis@example.com", 39.0, "Basic Plan"),
    ("Ethan Johnson", "ethan.j@example.com", 149.0, "Pro Plan"),
    ("Emma Wilson", "emma.w@example.com", 1299.0, "Enterprise Plan"),
    ("Noah Garcia", "noah.g@example.com", 59.0, "Standard Plan"),
    ("Ava Martinez", "ava.m@example.com", 39.0, "Basic Plan"),
    ("Liam Taylor", "liam.t@example.com", 299.0, "Pro Plan"),
];

const SAMPLE_DATASET_NAME: &str = "Sample Financial Data";
const SAMPLE_DATASET_DESCRIPTION: &str = "A sample dataset with monthly financial metrics";
const SAMPLE_COLUMNS: [&str; 4] = ["month", "sales", "expenses", "profit"];
const SAMPLE_ROWS: [(&str, i64, i64, i64); 6] = [
    ("January", 45000, 32000, 13000),
    ("February", 52000, 34000, 18000),
    ("March", 49000, 33000, 16000),
    ("April", 58000, 36000, 22000),
    ("May", 55000, 35000, 20000),
    ("June", 62000, 38000, 24000),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded,
    AlreadySeeded,
}

impl SeedOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SeedOutcome::Seeded => "Database seeded successfully",
            SeedOutcome::AlreadySeeded => "Database already has data",
        }
    }
}

/// Twelve months of revenue for `year`, growing about 5% a month with some noise.
pub fn generate_revenue<R: Rng + ?Sized>(year: i32, rng: &mut R) -> Vec<RevenueEntry> {
    let mut total = BASE_REVENUE;
    MONTHS
        .iter()
        .map(|month| {
            let factor: f64 = rng.random_range(0.9..1.2);
            total = (total * (1.0 + MONTHLY_GROWTH * factor)).round();
            RevenueEntry {
                month: month.to_string(),
                year,
                total,
            }
        })
        .collect()
}

/// Ten sales, one per day going back from `today`.
pub fn generate_sales(today: NaiveDate) -> Vec<SaleEntry> {
    CUSTOMERS
        .iter()
        .enumerate()
        .map(|(i, (name, email, amount, product))| SaleEntry {
            date: today - Duration::days(i as i64),
            amount: *amount,
            customer_name: name.to_string(),
            customer_email: email.to_string(),
            product: product.to_string(),
        })
        .collect()
}

fn sample_rows() -> Vec<RowData> {
    SAMPLE_ROWS
        .iter()
        .map(|(month, sales, expenses, profit)| {
            RowData::from([
                ("month".to_string(), CellValue::from(*month)),
                ("sales".to_string(), CellValue::from(*sales)),
                ("expenses".to_string(), CellValue::from(*expenses)),
                ("profit".to_string(), CellValue::from(*profit)),
            ])
        })
        .collect()
}

/// Seeds KPIs, revenue, sales and a sample dataset unless `kpi` already has rows.
pub fn seed_initial_data<R: Rng + ?Sized>(
    db: &Database,
    today: NaiveDate,
    rng: &mut R,
) -> DashboardResult<SeedOutcome> {
    let outcome = db.with_transaction(|tx| {
        if dashboard::count_kpis(tx)? > 0 {
            return Ok(SeedOutcome::AlreadySeeded);
        }

        for (name, value, change, period) in KPIS {
            dashboard::insert_kpi(tx, name, value, change, period)?;
        }
        insert_revenue_year(tx, today.year(), rng)?;
        for sale in generate_sales(today) {
            dashboard::insert_sale(tx, &sale)?;
        }

        let columns: Vec<String> = SAMPLE_COLUMNS.iter().map(|c| c.to_string()).collect();
        let dataset_id = datasets::insert_dataset(
            tx,
            SAMPLE_DATASET_NAME,
            Some(SAMPLE_DATASET_DESCRIPTION),
            &columns,
            Utc::now(),
        )?;
        datasets::insert_rows(tx, dataset_id, &sample_rows())?;

        Ok(SeedOutcome::Seeded)
    })?;

    info!("{}", outcome.message());
    Ok(outcome)
}

/// Replaces all revenue rows with a freshly generated year.
pub fn reseed_revenue<R: Rng + ?Sized>(
    db: &Database,
    year: i32,
    rng: &mut R,
) -> DashboardResult<usize> {
    let written = db.with_transaction(|tx| {
        let removed = dashboard::clear_revenue(tx)?;
        info!("Cleared {} revenue rows", removed);
        insert_revenue_year(tx, year, rng)
    })?;
    info!("Reseeded revenue for {} ({} months)", year, written);
    Ok(written)
}

fn insert_revenue_year<R: Rng + ?Sized>(
    conn: &Connection,
    year: i32,
    rng: &mut R,
) -> DashboardResult<usize> {
    let entries = generate_revenue(year, rng);
    for entry in &entries {
        dashboard::insert_revenue(conn, entry)?;
    }
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    #[test]
    fn revenue_grows_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let entries = generate_revenue(2025, &mut rng);

        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0].month, "Jan");
        assert_eq!(entries[11].month, "Dec");
        let mut previous = BASE_REVENUE;
        for entry in &entries {
            assert!(entry.total >= (previous * 1.045).round() - 1.0);
            assert!(entry.total <= (previous * 1.06).round() + 1.0);
            assert_eq!(entry.total.fract(), 0.0);
            previous = entry.total;
        }
    }

    #[test]
    fn sales_step_back_one_day_each() {
        let sales = generate_sales(today());
        assert_eq!(sales.len(), 10);
        assert_eq!(sales[0].date, today());
        assert_eq!(sales[9].date, NaiveDate::from_ymd_opt(2025, 3, 6).unwrap());
    }

    #[test]
    fn seeding_is_idempotent() {
        let db = Database::open_in_memory().expect("db");
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(seed_initial_data(&db, today(), &mut rng).expect("seed"), SeedOutcome::Seeded);
        assert_eq!(
            seed_initial_data(&db, today(), &mut rng).expect("seed"),
            SeedOutcome::AlreadySeeded
        );

        let (kpis, revenue, sales, datasets) = db
            .with_conn(|conn| {
                Ok((
                    dashboard::list_kpis(conn)?.len(),
                    dashboard::list_revenue(conn)?.len(),
                    dashboard::recent_sales(conn, 100)?.len(),
                    datasets::list_datasets(conn)?,
                ))
            })
            .expect("read back");
        assert_eq!((kpis, revenue, sales), (4, 12, 10));
        assert_eq!(datasets.len(), 1);
        assert_eq!(datasets[0].name, SAMPLE_DATASET_NAME);
    }

    #[test]
    fn reseed_replaces_revenue() {
        let db = Database::open_in_memory().expect("db");
        let mut rng = StdRng::seed_from_u64(3);
        seed_initial_data(&db, today(), &mut rng).expect("seed");

        let written = reseed_revenue(&db, 2026, &mut rng).expect("reseed");

        let revenue = db.with_conn(dashboard::list_revenue).expect("revenue");
        assert_eq!(written, 12);
        assert_eq!(revenue.len(), 12);
        assert!(revenue.iter().all(|entry| entry.year == 2026));
    }
}
