use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct DashboardGridProps {
    /// Number of equal-width columns.
    pub columns: usize,
    pub children: Children,
}

/// Card layout for the overview tab.
pub struct DashboardGrid;

impl Component for DashboardGrid {
    type Message = ();
    type Properties = DashboardGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DashboardGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "grid-template-columns: repeat({}, minmax(0, 1fr));",
            props.columns.max(1)
        );

        html! {
            <div class="dashboard-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
