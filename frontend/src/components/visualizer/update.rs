use common::chart::AxisSelection;
use common::responses::DatasetData;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::show_toast;

use super::messages::Msg;
use super::state::DatasetVisualizer;

pub fn update(component: &mut DatasetVisualizer, ctx: &Context<DatasetVisualizer>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            component.loading = true;
            let id = ctx.props().dataset_id;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(fetch_dataset(id).await));
            });
            true
        }
        Msg::Loaded(Ok(DatasetData {
            success: true,
            dataset: Some(dataset),
            data,
            ..
        })) => {
            component.loading = false;
            component.axes = AxisSelection::defaults(&dataset.columns);
            component.rows = data.unwrap_or_default();
            component.dataset = Some(dataset);
            true
        }
        Msg::Loaded(Ok(failed)) => {
            component.loading = false;
            show_toast(&failed.error.unwrap_or_else(|| "Failed to load dataset".to_string()));
            true
        }
        Msg::Loaded(Err(err)) => {
            component.loading = false;
            show_toast(&format!("Failed to load dataset: {}", err));
            true
        }
        Msg::SetMode(mode) => {
            component.mode = mode;
            true
        }
        Msg::SetXAxis(x_axis) => match component.axes.as_mut() {
            Some(axes) => {
                axes.x_axis = x_axis;
                true
            }
            None => false,
        },
        Msg::SetYAxis(y_axis) => match component.axes.as_mut() {
            Some(axes) => {
                axes.y_axis = y_axis;
                true
            }
            None => false,
        },
    }
}

/// Failure bodies (`success: false`) still decode, so the server's message reaches the toast.
async fn fetch_dataset(id: i64) -> Result<DatasetData, String> {
    let response = gloo_net::http::Request::get(&format!("/api/datasets/{}", id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response.json::<DatasetData>().await.map_err(|e| e.to_string())
}
