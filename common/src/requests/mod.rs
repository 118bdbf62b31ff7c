use crate::model::dataset::RowData;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/datasets`, and the creation request the CSV upload
/// builds once the file has been parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDatasetRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub columns: Vec<String>,
    /// Row payloads. Keys are expected to come from `columns` but are not checked.
    #[serde(default)]
    pub data: Vec<RowData>,
}

/// The `json` part of a multipart CSV upload. Must be sent before the `file` part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadMetadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
