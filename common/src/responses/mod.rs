//! JSON bodies returned by the `/api` endpoints.
//!
//! Failures always carry a human readable `error` string; the browser shows it
//! in a toast and the user may retry the same action.

use crate::model::dataset::{Dataset, RowData};
use serde::{Deserialize, Serialize};

/// Outcome of a write action (dataset creation, seeding).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Id of the dataset created by the action, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            id: None,
            error: None,
        }
    }

    pub fn created(id: i64, message: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            ..Self::ok(message)
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            id: None,
            error: Some(error.into()),
        }
    }
}

/// Plain `{ "error": ... }` body used by the listing and creation endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Dataset metadata together with every row, as needed by the visualizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetData {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<Dataset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<RowData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DatasetData {
    pub fn loaded(dataset: Dataset, data: Vec<RowData>) -> Self {
        Self {
            success: true,
            dataset: Some(dataset),
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            dataset: None,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_only_carry_the_error() {
        let body = serde_json::to_value(ActionResult::failed("boom")).unwrap();
        assert_eq!(body, serde_json::json!({ "success": false, "error": "boom" }));

        let body = serde_json::to_value(DatasetData::failed("Dataset not found: 7")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "error": "Dataset not found: 7" })
        );
    }
}
