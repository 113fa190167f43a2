use serde::{Deserialize, Serialize};

/// Fixed month labels for one generated fiscal year.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One month of financials, ordered by `id` ascending.
///
/// Remote rows are dynamic-shaped; every derived field defaults to zero when
/// the store omits the column, so a sparse row degrades instead of failing
/// the whole read. Wire names are camelCase to match the seeded table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub revenue: i64,
    #[serde(default)]
    pub cogs: i64,
    #[serde(default)]
    pub opex: i64,
    #[serde(default, rename = "netIncome")]
    pub net_income: i64,
    #[serde(default, rename = "cashOnHand")]
    pub cash_on_hand: i64,
    #[serde(default)]
    pub headcount: u32,
}

/// Where the currently displayed records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Remote,
    Local,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Remote => "remote",
            Origin::Local => "local",
        }
    }

    /// Label shown by the source indicator.
    pub fn indicator(&self) -> &'static str {
        match self {
            Origin::Remote => "Live Connection",
            Origin::Local => "Demo Data",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_row_deserializes_with_defaults() {
        let row: FinancialRecord = serde_json::from_str(r#"{"id": 3, "month": "Apr"}"#).unwrap();
        assert_eq!(row.id, 3);
        assert_eq!(row.month, "Apr");
        assert_eq!(row.revenue, 0);
        assert_eq!(row.net_income, 0);
        assert_eq!(row.cash_on_hand, 0);
        assert_eq!(row.headcount, 0);
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let record = FinancialRecord {
            id: 0,
            month: "Jan".to_string(),
            revenue: 46_000,
            cogs: 18_400,
            opex: 11_500,
            net_income: 16_100,
            cash_on_hand: 61_100,
            headcount: 5,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["netIncome"], 16_100);
        assert_eq!(json["cashOnHand"], 61_100);
        assert!(json.get("net_income").is_none());
    }

    #[test]
    fn test_origin_labels() {
        assert_eq!(Origin::Remote.as_str(), "remote");
        assert_eq!(Origin::Local.as_str(), "local");
        assert_eq!(Origin::Local.indicator(), "Demo Data");
    }
}
