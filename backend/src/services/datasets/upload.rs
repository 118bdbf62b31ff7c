use crate::error::{DashboardError, DashboardResult};
use crate::ingest::{self, Ingested};
use crate::services::{blocking, log_error};
use crate::state::AppState;
use actix_multipart::{Field, Multipart};
use actix_web::{web, HttpResponse, Responder};
use common::requests::UploadMetadata;
use common::responses::ActionResult;
use futures_util::StreamExt;
use log::debug;
use serde_json::from_slice;

/// HTTP handler wrapper that converts the ingestion result to an `HttpResponse`.
///
/// - On success: `200 OK` with `{success, message, id}`.
/// - On a bad upload (empty file, malformed row, bad header, bad parts): `400`.
/// - Anything else: `500`.
pub(crate) async fn process(state: web::Data<AppState>, payload: Multipart) -> impl Responder {
    match upload_dataset(state.get_ref().clone(), payload).await {
        Ok((ingested, filename)) => HttpResponse::Ok().json(ActionResult::created(
            ingested.dataset_id,
            format!("Uploaded {} with {} rows", filename, ingested.rows),
        )),
        Err(e) if e.is_client_error() => {
            HttpResponse::BadRequest().json(log_error("Rejected CSV upload", &e))
        }
        Err(e) => HttpResponse::InternalServerError().json(log_error("Error uploading CSV", &e)),
    }
}

/// Reads the `json` metadata part and the `file` part, then ingests the file.
///
/// The metadata must arrive before the file so a bad request is refused
/// before any file bytes are buffered.
async fn upload_dataset(
    state: AppState,
    mut payload: Multipart,
) -> DashboardResult<(Ingested, String)> {
    let mut metadata: Option<UploadMetadata> = None;
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let part_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match part_name.as_deref() {
            Some("json") => {
                let bytes = read_part(&mut field, "Dataset metadata", state.upload_limit).await?;
                let parsed: UploadMetadata = from_slice(&bytes).map_err(|e| {
                    DashboardError::InvalidRequest(format!("Invalid dataset metadata: {}", e))
                })?;
                metadata = Some(parsed);
            }

            Some("file") => {
                if metadata.is_none() {
                    return Err(DashboardError::InvalidRequest(
                        "Dataset metadata must be sent before the file".to_string(),
                    ));
                }
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
                    .unwrap_or_default();
                if !filename.to_ascii_lowercase().ends_with(".csv") {
                    return Err(DashboardError::InvalidRequest(
                        "The file must end with .csv".to_string(),
                    ));
                }

                let bytes = read_part(&mut field, "File", state.upload_limit).await?;
                debug!("Received {} ({} bytes)", filename, bytes.len());
                upload = Some((filename, bytes));
            }

            _ => {}
        }
    }

    let metadata = metadata
        .ok_or_else(|| DashboardError::InvalidRequest("Missing dataset metadata".to_string()))?;
    let (filename, bytes) =
        upload.ok_or_else(|| DashboardError::InvalidRequest("Missing file".to_string()))?;

    let registry = state.registry.clone();
    let ingested = blocking(move || ingest::ingest_csv(&registry, metadata, &bytes)).await?;
    Ok((ingested, filename))
}

/// Buffers one multipart part, refusing it once it grows past `limit` bytes.
async fn read_part(field: &mut Field, what: &str, limit: usize) -> DashboardResult<Vec<u8>> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        if bytes.len() + chunk.len() > limit {
            return Err(DashboardError::Multipart(format!(
                "{} exceeds the upload limit of {} bytes",
                what, limit
            )));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}
