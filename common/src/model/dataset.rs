use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single cell of an uploaded dataset.
///
/// Rows are open records: any column may be missing and values are only
/// interpreted when a chart is projected from them. Serialized untagged, so a
/// row travels as a plain JSON object such as `{"month": "Jan", "sales": 45000}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Number(serde_json::Number),
    Text(String),
}

impl CellValue {
    /// Numeric view of the cell. Text is not parsed here; see `chart::coerce_numeric`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value.into())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(CellValue::Number)
            .unwrap_or(CellValue::Null)
    }
}

/// Column name to value mapping for one dataset row.
pub type RowData = BTreeMap<String, CellValue>;

/// Metadata of an uploaded dataset, including its ordered column list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Header names in file order. The first two drive the default chart axes.
    pub columns: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Listing entry for a dataset. Carries neither columns nor rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_data_keeps_scalars_untagged() {
        let row: RowData =
            serde_json::from_str(r#"{"month":"Jan","sales":45000,"note":null}"#).unwrap();

        assert_eq!(row["month"], CellValue::from("Jan"));
        assert_eq!(row["sales"], CellValue::from(45000_i64));
        assert_eq!(row["note"], CellValue::Null);
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"month":"Jan","note":null,"sales":45000}"#
        );
    }

    #[test]
    fn numeric_view_does_not_parse_text() {
        assert_eq!(CellValue::from(2.5_f64).as_f64(), Some(2.5));
        assert_eq!(CellValue::from("2.5").as_f64(), None);
        assert_eq!(CellValue::from(f64::NAN), CellValue::Null);
    }
}
