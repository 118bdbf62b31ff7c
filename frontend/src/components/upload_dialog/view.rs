use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

use super::messages::Msg;
use super::state::UploadDialog;

pub fn view(component: &UploadDialog, ctx: &Context<UploadDialog>) -> Html {
    let link = ctx.link();

    let on_name = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetName(input.value())
    });
    let on_description = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetDescription(input.value())
    });
    let on_file = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileSelected(input.files().and_then(|files| files.get(0)))
    });
    let submit_label = if component.uploading { "Uploading..." } else { "Upload" };

    html! {
        <>
            <button class="primary" onclick={link.callback(|_| Msg::Open)}>{ "Upload CSV" }</button>
            <YwMaterialTopSheet node_ref={component.sheet_ref.clone()}>
                <h3>{ "Upload dataset" }</h3>
                <div class="form-row">
                    <label>{ "Name" }</label>
                    <input id="dataset-name" type="text" value={component.name.clone()} oninput={on_name} />
                </div>
                <div class="form-row">
                    <label>{ "Description" }</label>
                    <input id="dataset-description" type="text"
                           value={component.description.clone()} oninput={on_description} />
                </div>
                <div class="form-row">
                    <label>{ "CSV file" }</label>
                    <input id="dataset-file" type="file" accept=".csv,text/csv"
                           ref={component.file_input_ref.clone()} onchange={on_file} />
                </div>
                <div class="header-actions">
                    <button onclick={link.callback(|_| Msg::Close)}>{ "Cancel" }</button>
                    <button class="primary" disabled={!component.can_submit()}
                            onclick={link.callback(|_| Msg::Submit)}>
                        { submit_label }
                    </button>
                </div>
            </YwMaterialTopSheet>
        </>
    }
}
