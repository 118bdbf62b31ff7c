//! Fixed-shape queries behind the KPI cards, revenue chart and recent sales list.

use crate::error::DashboardResult;
use chrono::NaiveDate;
use common::model::kpi::Kpi;
use common::model::revenue::RevenueEntry;
use common::model::sale::SaleEntry;
use rusqlite::{params, Connection};

pub fn list_kpis(conn: &Connection) -> DashboardResult<Vec<Kpi>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, value, change_percentage, period FROM kpi ORDER BY id ASC",
    )?;
    let kpis = stmt
        .query_map([], |row| {
            Ok(Kpi {
                id: row.get(0)?,
                name: row.get(1)?,
                value: row.get(2)?,
                change_percentage: row.get(3)?,
                period: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(kpis)
}

pub fn count_kpis(conn: &Connection) -> DashboardResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM kpi", [], |row| row.get(0))?)
}

pub fn insert_kpi(
    conn: &Connection,
    name: &str,
    value: f64,
    change_percentage: f64,
    period: &str,
) -> DashboardResult<()> {
    conn.execute(
        "INSERT INTO kpi (name, value, change_percentage, period) VALUES (?1, ?2, ?3, ?4)",
        params![name, value, change_percentage, period],
    )?;
    Ok(())
}

/// Revenue ordered by year, then calendar month (not month name).
pub fn list_revenue(conn: &Connection) -> DashboardResult<Vec<RevenueEntry>> {
    let mut stmt = conn.prepare(
        "SELECT month, year, total FROM revenue
         ORDER BY year ASC,
                  CASE month
                      WHEN 'Jan' THEN 1 WHEN 'Feb' THEN 2 WHEN 'Mar' THEN 3
                      WHEN 'Apr' THEN 4 WHEN 'May' THEN 5 WHEN 'Jun' THEN 6
                      WHEN 'Jul' THEN 7 WHEN 'Aug' THEN 8 WHEN 'Sep' THEN 9
                      WHEN 'Oct' THEN 10 WHEN 'Nov' THEN 11 WHEN 'Dec' THEN 12
                      ELSE 13
                  END ASC,
                  id ASC",
    )?;
    let entries = stmt
        .query_map([], |row| {
            Ok(RevenueEntry {
                month: row.get(0)?,
                year: row.get(1)?,
                total: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

pub fn insert_revenue(conn: &Connection, entry: &RevenueEntry) -> DashboardResult<()> {
    conn.execute(
        "INSERT INTO revenue (month, year, total) VALUES (?1, ?2, ?3)",
        params![entry.month, entry.year, entry.total],
    )?;
    Ok(())
}

pub fn clear_revenue(conn: &Connection) -> DashboardResult<usize> {
    Ok(conn.execute("DELETE FROM revenue", [])?)
}

/// The `limit` most recent sales, newest first.
pub fn recent_sales(conn: &Connection, limit: usize) -> DashboardResult<Vec<SaleEntry>> {
    let mut stmt = conn.prepare(
        "SELECT date, amount, customer_name, customer_email, product
         FROM sales
         ORDER BY date DESC, id DESC
         LIMIT ?1",
    )?;
    let sales = stmt
        .query_map(params![limit as i64], |row| {
            Ok(SaleEntry {
                date: row.get::<_, NaiveDate>(0)?,
                amount: row.get(1)?,
                customer_name: row.get(2)?,
                customer_email: row.get(3)?,
                product: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(sales)
}

pub fn insert_sale(conn: &Connection, sale: &SaleEntry) -> DashboardResult<()> {
    conn.execute(
        "INSERT INTO sales (date, amount, customer_name, customer_email, product)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            sale.date,
            sale.amount,
            sale.customer_name,
            sale.customer_email,
            sale.product
        ],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Database;

    fn revenue(month: &str, year: i32) -> RevenueEntry {
        RevenueEntry {
            month: month.to_string(),
            year,
            total: 1000.0,
        }
    }

    fn sale(day: u32, name: &str) -> SaleEntry {
        SaleEntry {
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            amount: 39.0,
            customer_name: name.to_string(),
            customer_email: format!("{}@example.com", name.to_lowercase()),
            product: "Basic Plan".to_string(),
        }
    }

    #[test]
    fn revenue_is_ordered_by_year_then_calendar_month() {
        let db = Database::open_in_memory().expect("db");

        let listed = db
            .with_conn(|conn| {
                for entry in [revenue("Jan", 2025), revenue("Dec", 2024), revenue("Apr", 2025)] {
                    insert_revenue(conn, &entry)?;
                }
                list_revenue(conn)
            })
            .expect("list");

        let order: Vec<_> = listed.iter().map(|r| (r.month.as_str(), r.year)).collect();
        assert_eq!(order, vec![("Dec", 2024), ("Jan", 2025), ("Apr", 2025)]);
    }

    #[test]
    fn recent_sales_keeps_five_newest() {
        let db = Database::open_in_memory().expect("db");

        let listed = db
            .with_conn(|conn| {
                for day in 1..=7 {
                    insert_sale(conn, &sale(day, &format!("Customer{}", day)))?;
                }
                recent_sales(conn, 5)
            })
            .expect("sales");

        let days: Vec<_> = listed.iter().map(|s| s.date.format("%d").to_string()).collect();
        assert_eq!(days, vec!["07", "06", "05", "04", "03"]);
        assert_eq!(listed[0].customer_email, "customer7@example.com");
    }

    #[test]
    fn kpis_come_back_in_insertion_order() {
        let db = Database::open_in_memory().expect("db");

        let names: Vec<String> = db
            .with_conn(|conn| {
                insert_kpi(conn, "Total Revenue", 45231.89, 20.1, "last month")?;
                insert_kpi(conn, "Active Now", 573.0, 201.0, "last hour")?;
                list_kpis(conn)
            })
            .expect("kpis")
            .into_iter()
            .map(|k| k.name)
            .collect();

        assert_eq!(names, vec!["Total Revenue", "Active Now"]);
    }
}
