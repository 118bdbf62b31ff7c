use crate::components::dashboard_grid::DashboardGrid;
use crate::components::dataset_list::DatasetList;
use crate::components::helpers::{error_message, show_toast};
use crate::components::kpi_cards::KpiCards;
use crate::components::recent_sales::RecentSales;
use crate::components::revenue_overview::RevenueOverview;
use crate::components::upload_dialog::UploadDialog;
use crate::components::visualizer::DatasetVisualizer;
use common::responses::ActionResult;
use gloo_net::http::{Request, RequestBuilder};
use yew::platform::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Datasets,
}

pub enum Msg {
    SetTab(Tab),
    ViewDataset(i64),
    CloseVisualizer,
    Uploaded(i64),
    Seed,
    ReseedRevenue,
    /// Result of a seed action; a success reloads every panel.
    ActionDone(Result<String, String>),
}

pub struct App {
    tab: Tab,
    viewing: Option<i64>,
    /// Bumped to make the panels fetch again.
    refresh: u32,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            tab: Tab::Overview,
            viewing: None,
            refresh: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                self.tab = tab;
                true
            }
            Msg::ViewDataset(id) => {
                self.tab = Tab::Datasets;
                self.viewing = Some(id);
                true
            }
            Msg::CloseVisualizer => {
                self.viewing = None;
                true
            }
            Msg::Uploaded(id) => {
                self.refresh += 1;
                ctx.link().send_message(Msg::ViewDataset(id));
                false
            }
            Msg::Seed => {
                run_action(ctx, Request::get("/api/seed"));
                false
            }
            Msg::ReseedRevenue => {
                run_action(ctx, Request::post("/api/seed/revenue"));
                false
            }
            Msg::ActionDone(Ok(message)) => {
                show_toast(&message);
                self.refresh += 1;
                true
            }
            Msg::ActionDone(Err(err)) => {
                show_toast(&err);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div>
                <header class="dashboard-header">
                    <h1>{ "Dashboard" }</h1>
                    <div class="header-actions">
                        <button onclick={link.callback(|_| Msg::Seed)}>{ "Seed data" }</button>
                        <button onclick={link.callback(|_| Msg::ReseedRevenue)}>{ "Reseed revenue" }</button>
                        <UploadDialog on_uploaded={link.callback(Msg::Uploaded)} />
                    </div>
                </header>
                <nav class="tabs">
                    { self.tab_button(link, Tab::Overview, "Overview") }
                    { self.tab_button(link, Tab::Datasets, "Datasets") }
                </nav>
                {
                    match self.tab {
                        Tab::Overview => self.overview(),
                        Tab::Datasets => self.datasets(link),
                    }
                }
            </div>
        }
    }
}

impl App {
    fn tab_button(&self, link: &Scope<Self>, tab: Tab, label: &str) -> Html {
        let class = if self.tab == tab { "active" } else { "" };
        html! {
            <button class={class} onclick={link.callback(move |_| Msg::SetTab(tab))}>{ label }</button>
        }
    }

    fn overview(&self) -> Html {
        html! {
            <>
                <DashboardGrid columns={4}>
                    <KpiCards refresh={self.refresh} />
                </DashboardGrid>
                <DashboardGrid columns={2}>
                    <RevenueOverview refresh={self.refresh} />
                    <RecentSales refresh={self.refresh} />
                </DashboardGrid>
            </>
        }
    }

    fn datasets(&self, link: &Scope<Self>) -> Html {
        html! {
            <DashboardGrid columns={1}>
                {
                    match self.viewing {
                        Some(id) => html! {
                            <DatasetVisualizer dataset_id={id}
                                on_close={link.callback(|_| Msg::CloseVisualizer)} />
                        },
                        None => html! {
                            <DatasetList refresh={self.refresh}
                                on_view={link.callback(Msg::ViewDataset)} />
                        },
                    }
                }
            </DashboardGrid>
        }
    }
}

fn run_action(ctx: &Context<App>, request: RequestBuilder) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = match request.send().await {
            Ok(response) if response.ok() => match response.json::<ActionResult>().await {
                Ok(result) => Ok(result.message.unwrap_or_default()),
                Err(e) => Err(e.to_string()),
            },
            Ok(response) => Err(error_message(response).await),
            Err(e) => Err(e.to_string()),
        };
        link.send_message(Msg::ActionDone(outcome));
    });
}
