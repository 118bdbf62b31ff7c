//! Dataset visualizer: loads one dataset with its rows and draws the
//! projection chosen through the axis selectors and the mode tabs.
//!
//! Responsibilities
//! - Fetch `/api/datasets/{id}` on mount and whenever `dataset_id` changes.
//! - Default the axes to the first two columns.
//! - Delegate state changes to `update::update` and rendering to `view::view`.

use yew::prelude::*;

mod charts;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::VisualizerProps;
pub use state::DatasetVisualizer;

impl Component for DatasetVisualizer {
    type Message = Msg;
    type Properties = VisualizerProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        DatasetVisualizer::new()
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().dataset_id != old_props.dataset_id {
            ctx.link().send_message(Msg::Load);
        }
        false
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
