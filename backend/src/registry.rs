//! Dataset Registry Service: create, list and fetch uploaded datasets.
//!
//! Rows are written in fixed-size chunks so that no single `INSERT` grows past
//! the store's statement limits. The dataset record and all of its chunks are
//! written inside one transaction: if any chunk fails the error is reported as
//! `PartialWrite` and nothing of the dataset remains in the store.

use crate::error::{DashboardError, DashboardResult};
use crate::seed::{self, SeedOutcome};
use crate::store::{datasets, Database};
use chrono::Utc;
use common::model::dataset::{Dataset, DatasetSummary, RowData};
use common::requests::CreateDatasetRequest;
use log::{debug, info};
use std::sync::Arc;

/// Upper bound on rows per chunk; two bound parameters per row must stay
/// below SQLite's variable limit.
pub const MAX_CHUNK_ROWS: usize = 10_000;

/// A dataset together with every row, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetWithRows {
    pub dataset: Dataset,
    pub rows: Vec<RowData>,
}

#[derive(Clone, Debug)]
pub struct DatasetRegistry {
    db: Arc<Database>,
    chunk_size: usize,
}

impl DatasetRegistry {
    pub fn new(db: Arc<Database>, chunk_size: usize) -> Self {
        Self {
            db,
            chunk_size: chunk_size.clamp(1, MAX_CHUNK_ROWS),
        }
    }

    pub fn db(&self) -> &Arc<Database> {
        &self.db
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Start-up pre-flight. Seeds fixture data when asked to; seeding itself
    /// is a no-op once the `kpi` table has rows.
    pub fn initialize(&self, seed_on_startup: bool) -> DashboardResult<Option<SeedOutcome>> {
        if !seed_on_startup {
            debug!("Start-up seeding disabled");
            return Ok(None);
        }
        seed::seed_initial_data(&self.db, Utc::now().date_naive(), &mut rand::rng()).map(Some)
    }

    /// Stores a new dataset and its rows; returns the new dataset id.
    pub fn create_dataset(&self, request: CreateDatasetRequest) -> DashboardResult<i64> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(DashboardError::InvalidRequest(
                "Dataset name is required".to_string(),
            ));
        }
        if request.columns.is_empty() {
            return Err(DashboardError::InvalidRequest(
                "A dataset needs at least one column".to_string(),
            ));
        }
        let description = request
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty());

        let chunk_size = self.chunk_size;
        let dataset_id = self.db.with_transaction(|tx| {
            let dataset_id =
                datasets::insert_dataset(tx, name, description, &request.columns, Utc::now())?;

            let mut rows_written = 0;
            for (chunk_index, chunk) in request.data.chunks(chunk_size).enumerate() {
                let written = datasets::insert_rows(tx, dataset_id, chunk).map_err(|err| {
                    DashboardError::PartialWrite {
                        dataset_id,
                        chunk_index,
                        rows_written,
                        message: err.to_string(),
                    }
                })?;
                rows_written += written;
                debug!(
                    "Dataset {}: wrote chunk {} ({} rows so far)",
                    dataset_id, chunk_index, rows_written
                );
            }
            Ok(dataset_id)
        })?;

        info!(
            "Created dataset {} '{}' with {} columns and {} rows",
            dataset_id,
            name,
            request.columns.len(),
            request.data.len()
        );
        Ok(dataset_id)
    }

    pub fn list_datasets(&self) -> DashboardResult<Vec<DatasetSummary>> {
        self.db.with_conn(datasets::list_datasets)
    }

    pub fn get_dataset(&self, id: i64) -> DashboardResult<DatasetWithRows> {
        self.db.with_conn(|conn| {
            let dataset = datasets::find_dataset(conn, id)?.ok_or(DashboardError::NotFound(id))?;
            let rows = datasets::dataset_rows(conn, id)?;
            Ok(DatasetWithRows { dataset, rows })
        })
    }
}
