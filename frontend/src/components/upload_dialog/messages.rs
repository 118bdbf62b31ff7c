pub enum Msg {
    Open,
    Close,
    SetName(String),
    SetDescription(String),
    FileSelected(Option<web_sys::File>),
    Submit,
    Uploaded(Result<(i64, String), String>),
}
