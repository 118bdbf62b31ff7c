use gloo_net::http::Request;
use web_sys::FormData;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::responses::ActionResult;

use crate::components::helpers::{error_message, show_toast};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::messages::Msg;
use super::state::UploadDialog;

pub fn update(component: &mut UploadDialog, ctx: &Context<UploadDialog>, msg: Msg) -> bool {
    match msg {
        Msg::Open => {
            open_top_sheet(component.sheet_ref.clone());
            false
        }
        Msg::Close => {
            close_top_sheet(component.sheet_ref.clone());
            component.reset();
            true
        }
        Msg::SetName(name) => {
            component.name = name;
            true
        }
        Msg::SetDescription(description) => {
            component.description = description;
            true
        }
        Msg::FileSelected(file) => {
            if let Some(f) = &file {
                if !f.name().to_ascii_lowercase().ends_with(".csv") {
                    show_toast("Please choose a .csv file.");
                    component.file = None;
                    return true;
                }
            }
            component.file = file;
            true
        }
        Msg::Submit => {
            let Some(file) = component.file.clone() else {
                show_toast("Please choose a CSV file first.");
                return false;
            };
            if component.name.trim().is_empty() {
                show_toast("Please give the dataset a name.");
                return false;
            }

            let form = match build_form(component, &file) {
                Ok(form) => form,
                Err(err) => {
                    show_toast(&err);
                    return false;
                }
            };

            component.uploading = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Uploaded(send_form(form).await));
            });
            true
        }
        Msg::Uploaded(Ok((id, message))) => {
            show_toast(&message);
            close_top_sheet(component.sheet_ref.clone());
            component.reset();
            ctx.props().on_uploaded.emit(id);
            true
        }
        Msg::Uploaded(Err(err)) => {
            component.uploading = false;
            gloo_console::error!(format!("Upload failed: {}", err));
            show_toast(&format!("Upload failed: {}", err));
            true
        }
    }
}

/// The metadata part goes first; the server refuses a file that precedes it.
fn build_form(component: &UploadDialog, file: &web_sys::File) -> Result<FormData, String> {
    let metadata = serde_json::to_string(&component.metadata()).map_err(|e| e.to_string())?;
    let form = FormData::new().map_err(|_| "Could not create form data".to_string())?;
    form.append_with_str("json", &metadata)
        .map_err(|_| "Could not attach dataset details".to_string())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "Could not attach the file".to_string())?;
    Ok(form)
}

async fn send_form(form: FormData) -> Result<(i64, String), String> {
    let response = Request::post("/api/datasets/upload")
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: ActionResult = response.json().await.map_err(|e| e.to_string())?;
    match result.id {
        Some(id) if result.success => Ok((id, result.message.unwrap_or_default())),
        _ => Err(result
            .error
            .unwrap_or_else(|| "The server did not return a dataset id".to_string())),
    }
}
