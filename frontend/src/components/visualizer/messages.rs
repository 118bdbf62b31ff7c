use common::chart::ChartMode;
use common::responses::DatasetData;

pub enum Msg {
    Load,
    Loaded(Result<DatasetData, String>),
    SetMode(ChartMode),
    SetXAxis(String),
    SetYAxis(String),
}
