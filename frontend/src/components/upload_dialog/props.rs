use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UploadDialogProps {
    /// Called with the new dataset id after a successful upload.
    pub on_uploaded: Callback<i64>,
}
