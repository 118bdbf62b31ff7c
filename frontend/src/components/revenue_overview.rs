//! Revenue bar chart for the overview tab, one bar per month in
//! `(year, month)` order as served by `/api/revenue`.

use crate::components::helpers::{format_number, get_json, show_toast};
use common::chart::LinearScale;
use common::model::revenue::RevenueEntry;
use yew::platform::spawn_local;
use yew::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 260.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_BOTTOM: f64 = 24.0;

#[derive(Properties, PartialEq, Clone)]
pub struct RevenueOverviewProps {
    #[prop_or_default]
    pub refresh: u32,
}

pub enum Msg {
    Load,
    Loaded(Result<Vec<RevenueEntry>, String>),
}

pub struct RevenueOverview {
    revenue: Vec<RevenueEntry>,
}

impl Component for RevenueOverview {
    type Message = Msg;
    type Properties = RevenueOverviewProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self { revenue: Vec::new() }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().refresh != old_props.refresh {
            ctx.link().send_message(Msg::Load);
        }
        false
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Loaded(get_json("/api/revenue").await));
                });
                false
            }
            Msg::Loaded(Ok(revenue)) => {
                self.revenue = revenue;
                true
            }
            Msg::Loaded(Err(err)) => {
                show_toast(&format!("Failed to load revenue: {}", err));
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="card">
                <h3>{ "Overview" }</h3>
                { self.chart() }
            </div>
        }
    }
}

impl RevenueOverview {
    fn chart(&self) -> Html {
        if self.revenue.is_empty() {
            return html! { <p>{ "No revenue data." }</p> };
        }

        let scale = LinearScale::fit(self.revenue.iter().map(|entry| entry.total));
        let plot_height = HEIGHT - MARGIN_BOTTOM;
        let slot = (WIDTH - MARGIN_LEFT) / self.revenue.len() as f64;
        let bar_width = slot * 0.7;

        let ticks = scale.ticks(4).into_iter().map(|tick| {
            let y = plot_height - scale.position(tick, plot_height);
            html! {
                <text x={(MARGIN_LEFT - 6.0).to_string()} y={y.to_string()}
                      text-anchor="end" font-size="11" fill="#6b7280">
                    { format!("${}", format_number(tick)) }
                </text>
            }
        });

        let bars = self.revenue.iter().enumerate().map(|(i, entry)| {
            let height = scale.position(entry.total, plot_height);
            let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
            html! {
                <g>
                    <rect x={x.to_string()} y={(plot_height - height).to_string()}
                          width={bar_width.to_string()} height={height.to_string()}
                          rx="3" fill="#111827">
                        <title>{ format!("{} {}: ${}", entry.month, entry.year, format_number(entry.total)) }</title>
                    </rect>
                    <text x={(x + bar_width / 2.0).to_string()} y={(HEIGHT - 6.0).to_string()}
                          text-anchor="middle" font-size="11" fill="#6b7280">
                        { entry.month.clone() }
                    </text>
                </g>
            }
        });

        html! {
            <svg viewBox={format!("0 0 {} {}", WIDTH, HEIGHT)} width="100%">
                { for ticks }
                { for bars }
            </svg>
        }
    }
}
