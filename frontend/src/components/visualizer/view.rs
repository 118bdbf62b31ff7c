use common::chart::ChartMode;
use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

use super::charts;
use super::messages::Msg;
use super::state::DatasetVisualizer;

/// Rows shown in the data preview under the chart.
const PREVIEW_ROWS: usize = 10;

pub fn view(component: &DatasetVisualizer, ctx: &Context<DatasetVisualizer>) -> Html {
    let on_close = ctx.props().on_close.reform(|_: MouseEvent| ());

    let Some(dataset) = component.dataset.as_ref() else {
        let text = if component.loading { "Loading dataset..." } else { "Dataset unavailable." };
        return html! {
            <div class="card">
                <button onclick={on_close}>{ "Back" }</button>
                <p>{ text }</p>
            </div>
        };
    };
    let link = ctx.link();

    html! {
        <div class="card">
            <div class="axis-controls">
                <button onclick={on_close}>{ "Back" }</button>
                <h3>{ dataset.name.clone() }</h3>
            </div>
            if let Some(description) = &dataset.description {
                <p>{ description.clone() }</p>
            }
            { mode_tabs(component, link) }
            { axis_controls(component, link) }
            if component.axes_out_of_range() {
                <p class="chart-hint">{ "The selected axis is not a column of this dataset; the series is blank." }</p>
            }
            { render_chart(component) }
            { data_preview(component) }
        </div>
    }
}

fn mode_tabs(component: &DatasetVisualizer, link: &Scope<DatasetVisualizer>) -> Html {
    html! {
        <div class="tabs">
            { for ChartMode::ALL.into_iter().map(|mode| {
                let class = if mode == component.mode { "active" } else { "" };
                html! {
                    <button class={class} onclick={link.callback(move |_| Msg::SetMode(mode))}>
                        { mode.label() }
                    </button>
                }
            }) }
        </div>
    }
}

fn axis_controls(component: &DatasetVisualizer, link: &Scope<DatasetVisualizer>) -> Html {
    let Some(axes) = component.axes.as_ref() else {
        return html! { <p>{ "This dataset has no columns to chart." }</p> };
    };
    let columns = component.columns();

    let on_x = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetXAxis(select.value())
    });
    let on_y = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetYAxis(select.value())
    });

    html! {
        <div class="axis-controls">
            <label>{ "X axis " }{ column_select(columns, &axes.x_axis, on_x) }</label>
            <label>{ "Y axis " }{ column_select(columns, &axes.y_axis, on_y) }</label>
        </div>
    }
}

fn column_select(columns: &[String], selected: &str, onchange: Callback<Event>) -> Html {
    html! {
        <select {onchange}>
            { for columns.iter().map(|column| html! {
                <option value={column.clone()} selected={column == selected}>{ column.clone() }</option>
            }) }
        </select>
    }
}

fn render_chart(component: &DatasetVisualizer) -> Html {
    let points = component.points();
    if points.is_empty() {
        return html! { <p>{ "No rows to chart." }</p> };
    }
    match component.mode {
        ChartMode::Bar => charts::bar_chart(&points),
        ChartMode::Line => charts::line_chart(&points),
        ChartMode::Pie => charts::pie_chart(&points),
    }
}

fn data_preview(component: &DatasetVisualizer) -> Html {
    let columns = component.columns();
    let rows = component.rows.iter().take(PREVIEW_ROWS);

    html! {
        <table class="dataset-table">
            <thead>
                <tr>{ for columns.iter().map(|c| html! { <th>{ c.clone() }</th> }) }</tr>
            </thead>
            <tbody>
                { for rows.map(|row| html! {
                    <tr>
                        { for columns.iter().map(|c| html! {
                            <td>{ row.get(c).map(ToString::to_string).unwrap_or_default() }</td>
                        }) }
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
