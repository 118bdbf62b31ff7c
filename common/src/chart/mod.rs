//! Axis-driven projection of dataset rows into chart series.
//!
//! A dataset has no fixed schema, so the axes are picked at render time from
//! its column list. Projection never fails: a column that a row lacks, or an
//! axis that is not a column at all, simply yields absent values and the
//! renderer draws a blank series.

mod pie;
mod scale;

pub use pie::{pie_slices, slice_angles, PieSlice};
pub use scale::LinearScale;

use crate::model::dataset::{CellValue, RowData};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a projected series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    #[default]
    Bar,
    Line,
    Pie,
}

impl ChartMode {
    pub const ALL: [ChartMode; 3] = [ChartMode::Bar, ChartMode::Line, ChartMode::Pie];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartMode::Bar => "bar",
            ChartMode::Line => "line",
            ChartMode::Pie => "pie",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartMode::Bar => "Bar",
            ChartMode::Line => "Line",
            ChartMode::Pie => "Pie",
        }
    }
}

impl fmt::Display for ChartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pair of columns a chart is drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSelection {
    pub x_axis: String,
    pub y_axis: String,
}

impl AxisSelection {
    pub fn new(x_axis: impl Into<String>, y_axis: impl Into<String>) -> Self {
        Self {
            x_axis: x_axis.into(),
            y_axis: y_axis.into(),
        }
    }

    /// First column on x, second on y (or the first again for a single column dataset).
    pub fn defaults(columns: &[String]) -> Option<Self> {
        let x = columns.first()?;
        let y = columns.get(1).unwrap_or(x);
        Some(Self::new(x.clone(), y.clone()))
    }

    /// Whether both axes name one of `columns`. Projection does not require it.
    pub fn is_within(&self, columns: &[String]) -> bool {
        columns.contains(&self.x_axis) && columns.contains(&self.y_axis)
    }
}

/// One projected row: the raw x value and the coerced y value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: Option<CellValue>,
    pub y: Option<CellValue>,
}

impl ChartPoint {
    /// Category label for the x value; blank when absent.
    pub fn label(&self) -> String {
        self.x.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// Height of the mark. Non-numeric and absent values draw as zero.
    pub fn magnitude(&self) -> f64 {
        self.y.as_ref().and_then(CellValue::as_f64).unwrap_or(0.0)
    }
}

/// Turns numeric-looking text into a number and leaves everything else alone.
pub fn coerce_numeric(value: &CellValue) -> CellValue {
    match value {
        CellValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return value.clone();
            }
            match trimmed.parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => numeric_cell(trimmed, parsed),
                _ => value.clone(),
            }
        }
        other => other.clone(),
    }
}

// Integers stay integers so `"10"` projects to `10`, not `10.0`.
fn numeric_cell(text: &str, parsed: f64) -> CellValue {
    match text.parse::<i64>() {
        Ok(int) => CellValue::from(int),
        Err(_) => CellValue::from(parsed),
    }
}

/// Projects every row onto the chosen axes, preserving row order.
pub fn project(rows: &[RowData], axes: &AxisSelection) -> Vec<ChartPoint> {
    rows.iter()
        .map(|row| ChartPoint {
            x: row.get(&axes.x_axis).cloned(),
            y: row.get(&axes.y_axis).map(coerce_numeric),
        })
        .collect()
}

/// Key-named form of a projected series, `{ <x_axis>: x, <y_axis>: y }`.
///
/// Absent values are left out. When both axes are the same column the
/// coerced y value is the one kept.
pub fn to_records(points: &[ChartPoint], axes: &AxisSelection) -> Vec<RowData> {
    points
        .iter()
        .map(|point| {
            let mut record = RowData::new();
            if let Some(x) = &point.x {
                record.insert(axes.x_axis.clone(), x.clone());
            }
            if let Some(y) = &point.y {
                record.insert(axes.y_axis.clone(), y.clone());
            }
            record
        })
        .collect()
}
