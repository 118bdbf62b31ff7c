//! Thin SQLite adapter.
//!
//! `Database` owns the single connection and hands it out either directly
//! (`with_conn`) or wrapped in a transaction (`with_transaction`). The query
//! functions in `datasets` and `dashboard` take a `&Connection`, so the same
//! function works inside or outside a transaction.

pub mod dashboard;
pub mod datasets;

use crate::error::{DashboardError, DashboardResult};
use rusqlite::{Connection, Transaction};
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

const SCHEMA_SQL: &str = include_str!("schema.sql");

#[derive(Debug)]
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Opens (creating if needed) the database file and applies the schema.
    pub fn open(path: &Path) -> DashboardResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|err| DashboardError::Internal(err.to_string()))?;
        }
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> DashboardResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> DashboardResult<Self> {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> DashboardResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| DashboardError::Internal("database mutex poisoned".to_string()))
    }

    pub fn with_conn<T, F>(&self, f: F) -> DashboardResult<T>
    where
        F: FnOnce(&Connection) -> DashboardResult<T>,
    {
        let conn = self.lock()?;
        f(&conn)
    }

    /// Runs `f` in a transaction: committed when `f` returns `Ok`, rolled back otherwise.
    pub fn with_transaction<T, F>(&self, f: F) -> DashboardResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> DashboardResult<T>,
    {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_database_keeps_data_across_opens() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("dash.sqlite");

        {
            let db = Database::open(&path).expect("open");
            db.with_conn(|conn| {
                dashboard::insert_kpi(conn, "Sales", 12234.0, 19.0, "last month")
            })
            .expect("insert");
        }

        let db = Database::open(&path).expect("reopen");
        let kpis = db.with_conn(dashboard::list_kpis).expect("list");
        assert_eq!(kpis.len(), 1);
        assert_eq!(kpis[0].name, "Sales");
    }

    #[test]
    fn failed_transaction_rolls_back() {
        let db = Database::open_in_memory().expect("db");

        let result: DashboardResult<()> = db.with_transaction(|tx| {
            dashboard::insert_kpi(tx, "Active Now", 573.0, 201.0, "last hour")?;
            Err(DashboardError::Internal("abort".to_string()))
        });

        assert!(result.is_err());
        assert_eq!(db.with_conn(dashboard::count_kpis).expect("count"), 0);
    }
}
