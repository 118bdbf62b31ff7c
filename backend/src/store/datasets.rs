//! Queries over `uploaded_datasets` and `dataset_rows`.
//!
//! Column lists and row payloads are stored as JSON text and come back
//! verbatim; the store never looks inside a row.

use crate::error::DashboardResult;
use chrono::{DateTime, Utc};
use common::model::dataset::{Dataset, DatasetSummary, RowData};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

pub fn insert_dataset(
    conn: &Connection,
    name: &str,
    description: Option<&str>,
    columns: &[String],
    created_at: DateTime<Utc>,
) -> DashboardResult<i64> {
    let columns_json = serde_json::to_string(columns)?;
    conn.execute(
        "INSERT INTO uploaded_datasets (name, description, columns, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![name, description, columns_json, created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Inserts `rows` with a single multi-row `INSERT`. Returns the number of rows written.
pub fn insert_rows(conn: &Connection, dataset_id: i64, rows: &[RowData]) -> DashboardResult<usize> {
    if rows.is_empty() {
        return Ok(0);
    }

    let placeholders = vec!["(?, ?)"; rows.len()].join(", ");
    let sql = format!(
        "INSERT INTO dataset_rows (dataset_id, row_data) VALUES {}",
        placeholders
    );

    let mut values = Vec::with_capacity(rows.len() * 2);
    for row in rows {
        values.push(Value::Integer(dataset_id));
        values.push(Value::Text(serde_json::to_string(row)?));
    }

    Ok(conn.execute(&sql, params_from_iter(values))?)
}

/// All datasets, newest first.
pub fn list_datasets(conn: &Connection) -> DashboardResult<Vec<DatasetSummary>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, description, created_at
         FROM uploaded_datasets
         ORDER BY created_at DESC, id DESC",
    )?;
    let datasets = stmt
        .query_map([], |row| {
            Ok(DatasetSummary {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(datasets)
}

pub fn find_dataset(conn: &Connection, id: i64) -> DashboardResult<Option<Dataset>> {
    let found = conn
        .query_row(
            "SELECT id, name, description, columns, created_at
             FROM uploaded_datasets
             WHERE id = ?1",
            params![id],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, DateTime<Utc>>(4)?,
                ))
            },
        )
        .optional()?;

    match found {
        Some((id, name, description, columns_json, created_at)) => Ok(Some(Dataset {
            id,
            name,
            description,
            columns: serde_json::from_str(&columns_json)?,
            created_at,
        })),
        None => Ok(None),
    }
}

/// Row payloads of a dataset in insertion order.
pub fn dataset_rows(conn: &Connection, dataset_id: i64) -> DashboardResult<Vec<RowData>> {
    let mut stmt = conn.prepare(
        "SELECT row_data FROM dataset_rows WHERE dataset_id = ?1 ORDER BY id ASC",
    )?;
    let raw = stmt
        .query_map(params![dataset_id], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    raw.iter()
        .map(|json| serde_json::from_str(json).map_err(Into::into))
        .collect()
}

#[cfg(test)]
pub fn count_rows(conn: &Connection, dataset_id: i64) -> DashboardResult<i64> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM dataset_rows WHERE dataset_id = ?1",
        params![dataset_id],
        |row| row.get(0),
    )?)
}

#[cfg(test)]
pub fn count_datasets(conn: &Connection) -> DashboardResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM uploaded_datasets", [], |row| row.get(0))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Database;
    use chrono::{Duration, TimeZone};
    use common::model::dataset::CellValue;

    fn sample_row(month: &str, sales: i64) -> RowData {
        RowData::from([
            ("month".to_string(), CellValue::from(month)),
            ("sales".to_string(), CellValue::from(sales)),
        ])
    }

    #[test]
    fn rows_round_trip_verbatim_and_in_order() {
        let db = Database::open_in_memory().expect("db");
        let columns = vec!["month".to_string(), "sales".to_string()];
        let rows = vec![sample_row("Jan", 10), sample_row("Feb", 20), sample_row("Mar", 30)];

        let (dataset, stored) = db
            .with_conn(|conn| {
                let id = insert_dataset(conn, "Q1", Some("first quarter"), &columns, Utc::now())?;
                assert_eq!(insert_rows(conn, id, &rows)?, 3);
                Ok((find_dataset(conn, id)?, dataset_rows(conn, id)?))
            })
            .expect("round trip");

        let dataset = dataset.expect("dataset exists");
        assert_eq!(dataset.columns, columns);
        assert_eq!(dataset.description.as_deref(), Some("first quarter"));
        assert_eq!(stored, rows);
    }

    #[test]
    fn listing_is_newest_first() {
        let db = Database::open_in_memory().expect("db");
        let base = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let columns = vec!["a".to_string()];

        let listed = db
            .with_conn(|conn| {
                insert_dataset(conn, "old", None, &columns, base)?;
                insert_dataset(conn, "new", None, &columns, base + Duration::days(1))?;
                insert_dataset(conn, "same-instant", None, &columns, base + Duration::days(1))?;
                list_datasets(conn)
            })
            .expect("list");

        let names: Vec<_> = listed.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["same-instant", "new", "old"]);
        assert_eq!(listed[2].created_at, base);
    }

    #[test]
    fn unknown_dataset_is_none() {
        let db = Database::open_in_memory().expect("db");
        let found = db.with_conn(|conn| find_dataset(conn, 42)).expect("query");
        assert!(found.is_none());
    }

    #[test]
    fn rows_are_removed_with_their_dataset() {
        let db = Database::open_in_memory().expect("db");

        let remaining = db
            .with_conn(|conn| {
                let id = insert_dataset(conn, "tmp", None, &["a".to_string()], Utc::now())?;
                insert_rows(conn, id, &[sample_row("Jan", 1)])?;
                conn.execute("DELETE FROM uploaded_datasets WHERE id = ?1", params![id])?;
                count_rows(conn, id)
            })
            .expect("cascade");

        assert_eq!(remaining, 0);
    }
}
