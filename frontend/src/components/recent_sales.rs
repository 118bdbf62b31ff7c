use crate::components::helpers::{format_money, get_json, show_toast};
use common::model::sale::SaleEntry;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RecentSalesProps {
    #[prop_or_default]
    pub refresh: u32,
}

pub enum Msg {
    Load,
    Loaded(Result<Vec<SaleEntry>, String>),
}

pub struct RecentSales {
    sales: Vec<SaleEntry>,
}

impl Component for RecentSales {
    type Message = Msg;
    type Properties = RecentSalesProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self { sales: Vec::new() }
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
                    link.send_message(Msg::Loaded(get_json("/api/sales").await));
                });
                false
            }
            Msg::Loaded(Ok(sales)) => {
                self.sales = sales;
                true
            }
            Msg::Loaded(Err(err)) => {
                show_toast(&format!("Failed to load sales: {}", err));
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="card">
                <h3>{ "Recent Sales" }</h3>
                {
                    if self.sales.is_empty() {
                        html! { <p>{ "No sales yet." }</p> }
                    } else {
                        html! { <>{ for self.sales.iter().map(sale_row) }</> }
                    }
                }
            </div>
        }
    }
}

fn sale_row(sale: &SaleEntry) -> Html {
    html! {
        <div class="sale-row">
            <div class="avatar">{ sale.initials() }</div>
            <div>
                <div>{ sale.customer_name.clone() }</div>
                <small>{ sale.customer_email.clone() }</small>
            </div>
            <div class="sale-amount">{ format!("+{}", format_money(sale.amount)) }</div>
        </div>
    }
}
