use common::requests::UploadMetadata;
use yew::prelude::*;

pub struct UploadDialog {
    pub name: String,
    pub description: String,
    pub file: Option<web_sys::File>,
    /// Set while the request is in flight; disables the submit button.
    pub uploading: bool,
    pub sheet_ref: NodeRef,
    pub file_input_ref: NodeRef,
}

impl UploadDialog {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            file: None,
            uploading: false,
            sheet_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
        }
    }

    pub fn metadata(&self) -> UploadMetadata {
        let description = self.description.trim();
        UploadMetadata {
            name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.uploading && !self.name.trim().is_empty() && self.file.is_some()
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.description.clear();
        self.file = None;
        self.uploading = false;
        if let Some(input) = self.file_input_ref.cast::<web_sys::HtmlInputElement>() {
            input.set_value("");
        }
    }
}
