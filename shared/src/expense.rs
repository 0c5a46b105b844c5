//! Expense records as the backend stores them and as the form submits them.

use chrono::{DateTime, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Date format used on every write to the backend.
pub const WIRE_DATE_FORMAT: &str = "%Y/%m/%d";

// Enough to keep any entered amount, few enough to drop f64 sum noise
const AMOUNT_DECIMALS: usize = 10;

/// Plain decimal text for an amount: no currency symbol, no trailing zeros.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let text = format!("{:.*}", AMOUNT_DECIMALS, amount);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" => "0".to_string(),
        _ => text.to_string(),
    }
}

/// Fixed set of spending categories offered by the form and the tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Health,
    Others,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Health,
        Category::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Backend-assigned identifier of a persisted expense.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calendar date of an expense, day granularity.
///
/// Serializes as `YYYY/MM/DD`. Deserialization also accepts `YYYY-MM-DD` and
/// RFC 3339 timestamps, since backends commonly echo dates back as full
/// timestamps; only the date part is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExpenseDate(NaiveDate);

impl ExpenseDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The `YYYY/MM/DD` form sent to the backend.
    pub fn to_wire(&self) -> String {
        self.0.format(WIRE_DATE_FORMAT).to_string()
    }

    /// Parse any of the date shapes a backend may return.
    pub fn parse_flexible(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Ok(date) = NaiveDate::parse_from_str(value, WIRE_DATE_FORMAT) {
            return Some(Self(date));
        }
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Some(Self(date));
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
            return Some(Self(timestamp.date_naive()));
        }
        // Timestamps without an offset, e.g. "2024-03-01T00:00:00.000"
        value
            .split_once('T')
            .and_then(|(date_part, _)| NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok())
            .map(Self)
    }
}

impl fmt::Display for ExpenseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl Serialize for ExpenseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for ExpenseDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ExpenseDate::parse_flexible(&raw)
            .ok_or_else(|| de::Error::custom(format!("unrecognised date: {}", raw)))
    }
}

/// A persisted expense as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: ExpenseId,
    pub amount: f64,
    pub category: Category,
    pub date: ExpenseDate,
    pub description: String,
}

impl ExpenseRecord {
    pub fn from_input(id: ExpenseId, input: ExpenseInput) -> Self {
        Self {
            id,
            amount: input.amount,
            category: input.category,
            date: input.date,
            description: input.description,
        }
    }

    /// The writable fields of this record.
    pub fn to_input(&self) -> ExpenseInput {
        ExpenseInput {
            amount: self.amount,
            category: self.category,
            date: self.date,
            description: self.description.clone(),
        }
    }
}

/// Body of a create or full-replacement update request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseInput {
    pub amount: f64,
    pub category: Category,
    pub date: ExpenseDate,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunch() -> ExpenseInput {
        ExpenseInput {
            amount: 42.0,
            category: Category::Food,
            date: ExpenseDate::from_ymd(2024, 3, 1).unwrap(),
            description: "Lunch".to_string(),
        }
    }

    #[test]
    fn test_category_parse_and_display() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("Groceries".parse::<Category>().is_err());
        assert!("food".parse::<Category>().is_err());
        let error = "Rent".parse::<Category>().unwrap_err();
        assert_eq!(error, UnknownCategory("Rent".to_string()));
        assert_eq!(error.to_string(), "Unknown category: Rent");
        assert_eq!(Category::Entertainment.to_string(), "Entertainment");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(42.0), "42");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(1.239), "1.239");
        assert_eq!(format_amount(0.1 + 0.2), "0.3");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn test_input_serializes_date_with_slashes() {
        let json = serde_json::to_value(lunch()).unwrap();
        assert_eq!(json["date"], "2024/03/01");
        assert_eq!(json["category"], "Food");
        assert_eq!(json["amount"], 42.0);
        assert_eq!(json["description"], "Lunch");
    }

    #[test]
    fn test_record_reads_document_store_shape() {
        let json = r#"{
            "_id": "65e1f0c2a1b2c3d4e5f60718",
            "amount": 12.5,
            "category": "Transport",
            "date": "2024-03-01T00:00:00.000Z",
            "description": "Bus",
            "__v": 0
        }"#;
        let record: ExpenseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_str(), "65e1f0c2a1b2c3d4e5f60718");
        assert_eq!(record.category, Category::Transport);
        assert_eq!(record.date, ExpenseDate::from_ymd(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_record_accepts_plain_id() {
        let json = r#"{"id":"7","amount":1,"category":"Health","date":"2024/12/31","description":"Plasters"}"#;
        let record: ExpenseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, ExpenseId::new("7"));
        assert_eq!(record.date.to_wire(), "2024/12/31");
    }

    #[test]
    fn test_record_rejects_unknown_category() {
        let json = r#"{"_id":"1","amount":1,"category":"Rent","date":"2024/01/01","description":"x"}"#;
        assert!(serde_json::from_str::<ExpenseRecord>(json).is_err());
    }

    #[test]
    fn test_parse_flexible_dates() {
        let expected = ExpenseDate::from_ymd(2024, 3, 1);
        assert_eq!(ExpenseDate::parse_flexible("2024/03/01"), expected);
        assert_eq!(ExpenseDate::parse_flexible("2024-03-01"), expected);
        assert_eq!(ExpenseDate::parse_flexible("2024-03-01T23:30:00+02:00"), expected);
        assert_eq!(ExpenseDate::parse_flexible("2024-03-01T00:00:00.000"), expected);
        assert_eq!(ExpenseDate::parse_flexible("01/03/2024"), None);
        assert_eq!(ExpenseDate::parse_flexible(""), None);
    }

    #[test]
    fn test_record_input_conversion() {
        let record = ExpenseRecord::from_input(ExpenseId::new("abc"), lunch());
        assert_eq!(record.to_input(), lunch());
        assert_eq!(record.id.to_string(), "abc");
    }
}
