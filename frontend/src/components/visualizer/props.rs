use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VisualizerProps {
    pub dataset_id: i64,
    /// Back to the dataset list.
    pub on_close: Callback<()>,
}
