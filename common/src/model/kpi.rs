use serde::{Deserialize, Serialize};

/// A headline metric shown as a card on the overview tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub id: i64,
    pub name: String,
    pub value: f64,
    pub change_percentage: f64,
    /// Human label for the comparison window, e.g. `last month`.
    pub period: String,
}

impl Kpi {
    /// Revenue and sales figures are money and get a currency prefix.
    pub fn is_monetary(&self) -> bool {
        self.name.contains("Revenue") || self.name.contains("Sales")
    }
}
