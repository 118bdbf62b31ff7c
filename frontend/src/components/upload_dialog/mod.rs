//! CSV upload dialog: a header button that opens a top sheet with name,
//! description and file inputs, posting them as multipart form data to
//! `/api/datasets/upload`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::UploadDialogProps;
pub use state::UploadDialog;

impl Component for UploadDialog {
    type Message = Msg;
    type Properties = UploadDialogProps;

    fn create(_ctx: &Context<Self>) -> Self {
        UploadDialog::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
