use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleEntry {
    pub date: NaiveDate,
    pub amount: f64,
    pub customer_name: String,
    pub customer_email: String,
    pub product: String,
}

impl SaleEntry {
    /// Initials used for the avatar bubble in the recent sales list.
    pub fn initials(&self) -> String {
        self.customer_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        let sale = SaleEntry {
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            amount: 39.0,
            customer_name: "isabella de la nguyen".to_string(),
            customer_email: "isabella@example.com".to_string(),
            product: "Pro Plan".to_string(),
        };
        assert_eq!(sale.initials(), "ID");
    }
}
