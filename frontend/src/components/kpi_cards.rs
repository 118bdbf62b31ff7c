use crate::components::helpers::{format_change, format_money, format_number, get_json, show_toast};
use common::model::kpi::Kpi;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct KpiCardsProps {
    /// Bumped by the parent whenever the store may have changed.
    #[prop_or_default]
    pub refresh: u32,
}

pub enum Msg {
    Load,
    Loaded(Result<Vec<Kpi>, String>),
}

/// One card per KPI: name, value and the signed change against its period.
pub struct KpiCards {
    kpis: Vec<Kpi>,
}

impl Component for KpiCards {
    type Message = Msg;
    type Properties = KpiCardsProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self { kpis: Vec::new() }
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
                    link.send_message(Msg::Loaded(get_json::<Vec<Kpi>>("/api/kpi").await));
                });
                false
            }
            Msg::Loaded(Ok(kpis)) => {
                self.kpis = kpis;
                true
            }
            Msg::Loaded(Err(err)) => {
                show_toast(&format!("Failed to load KPIs: {}", err));
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                { for self.kpis.iter().map(kpi_card) }
            </>
        }
    }
}

fn kpi_card(kpi: &Kpi) -> Html {
    let value = if kpi.is_monetary() {
        format_money(kpi.value)
    } else {
        format_number(kpi.value)
    };
    let direction = if kpi.change_percentage >= 0.0 { "up" } else { "down" };

    html! {
        <div class="card" key={kpi.id.to_string()}>
            <h3>{ kpi.name.clone() }</h3>
            <div class="kpi-value">{ value }</div>
            <div class={classes!("kpi-change", direction)}>
                { format!("{} from {}", format_change(kpi.change_percentage), kpi.period) }
            </div>
        </div>
    }
}
