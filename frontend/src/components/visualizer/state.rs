use common::chart::{self, AxisSelection, ChartMode, ChartPoint};
use common::model::dataset::{Dataset, RowData};

pub struct DatasetVisualizer {
    pub dataset: Option<Dataset>,
    pub rows: Vec<RowData>,
    /// `None` until a dataset with at least one column is loaded.
    pub axes: Option<AxisSelection>,
    pub mode: ChartMode,
    pub loading: bool,
}

impl DatasetVisualizer {
    pub fn new() -> Self {
        Self {
            dataset: None,
            rows: Vec::new(),
            axes: None,
            mode: ChartMode::default(),
            loading: true,
        }
    }

    pub fn columns(&self) -> &[String] {
        self.dataset
            .as_ref()
            .map(|dataset| dataset.columns.as_slice())
            .unwrap_or_default()
    }

    pub fn points(&self) -> Vec<ChartPoint> {
        match &self.axes {
            Some(axes) => chart::project(&self.rows, axes),
            None => Vec::new(),
        }
    }

    /// The current axes name a column the dataset does not have.
    pub fn axes_out_of_range(&self) -> bool {
        self.axes
            .as_ref()
            .is_some_and(|axes| !axes.is_within(self.columns()))
    }
}
