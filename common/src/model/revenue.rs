use serde::{Deserialize, Serialize};

/// Month abbreviations in calendar order. Revenue rows store these verbatim.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// 1-based calendar index of a month abbreviation.
pub fn month_index(month: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(month))
        .map(|i| i as u32 + 1)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueEntry {
    pub month: String,
    pub year: i32,
    pub total: f64,
}

impl RevenueEntry {
    /// Display key: year first, then calendar month. Unknown months sort last.
    pub fn sort_key(&self) -> (i32, u32) {
        (self.year, month_index(&self.month).unwrap_or(13))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_index_follows_calendar() {
        assert_eq!(month_index("Jan"), Some(1));
        assert_eq!(month_index("dec"), Some(12));
        assert_eq!(month_index("January"), None);
    }

    #[test]
    fn sort_key_is_year_major() {
        let dec = RevenueEntry { month: "Dec".into(), year: 2024, total: 1.0 };
        let jan = RevenueEntry { month: "Jan".into(), year: 2025, total: 1.0 };
        let apr = RevenueEntry { month: "Apr".into(), year: 2025, total: 1.0 };

        let mut entries = vec![apr.clone(), jan.clone(), dec.clone()];
        entries.sort_by_key(RevenueEntry::sort_key);
        assert_eq!(entries, vec![dec, jan, apr]);
    }
}
