use crate::components::helpers::{get_json, show_toast};
use common::model::dataset::DatasetSummary;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DatasetListProps {
    #[prop_or_default]
    pub refresh: u32,
    /// Emits the id of the dataset whose "View" button was clicked.
    pub on_view: Callback<i64>,
}

pub enum Msg {
    Load,
    Loaded(Result<Vec<DatasetSummary>, String>),
}

/// Table of uploaded datasets, newest first.
pub struct DatasetList {
    datasets: Vec<DatasetSummary>,
    loading: bool,
}

impl Component for DatasetList {
    type Message = Msg;
    type Properties = DatasetListProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            datasets: Vec::new(),
            loading: true,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().refresh != old_props.refresh {
            ctx.link().send_message(Msg::Load);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                self.loading = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Loaded(get_json("/api/datasets").await));
                });
                true
            }
            Msg::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(datasets) => self.datasets = datasets,
                    Err(err) => show_toast(&format!("Failed to load datasets: {}", err)),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading && self.datasets.is_empty() {
            return html! { <div class="card"><p>{ "Loading datasets..." }</p></div> };
        }
        if self.datasets.is_empty() {
            return html! {
                <div class="card">
                    <p>{ "No datasets yet. Upload a CSV file to get started." }</p>
                </div>
            };
        }

        let on_view = ctx.props().on_view.clone();
        html! {
            <div class="card">
                <table class="dataset-table">
                    <thead>
                        <tr>
                            <th>{ "Name" }</th>
                            <th>{ "Description" }</th>
                            <th>{ "Uploaded" }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for self.datasets.iter().map(|dataset| dataset_row(dataset, &on_view)) }
                    </tbody>
                </table>
            </div>
        }
    }
}

fn dataset_row(dataset: &DatasetSummary, on_view: &Callback<i64>) -> Html {
    let id = dataset.id;
    let onclick = on_view.reform(move |_: MouseEvent| id);
    html! {
        <tr key={id.to_string()}>
            <td>{ dataset.name.clone() }</td>
            <td>{ dataset.description.clone().unwrap_or_default() }</td>
            <td>{ dataset.created_at.format("%Y-%m-%d %H:%M").to_string() }</td>
            <td><button {onclick}>{ "View" }</button></td>
        </tr>
    }
}
