//! Aggregated spending rows and the chart series built from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Total spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    #[serde(rename = "_id")]
    pub category: String,
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
}

/// Bucket key of an aggregate row. Backends group by a formatted string
/// (`"2024-03"`) or by a bare month number (`3`); either is shown as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BucketLabel {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl fmt::Display for BucketLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketLabel::Integer(value) => write!(f, "{}", value),
            BucketLabel::Decimal(value) => write!(f, "{}", value),
            BucketLabel::Text(value) => f.write_str(value),
        }
    }
}

/// Total spent in one period (the in-memory store uses `YYYY-MM`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    #[serde(rename = "_id")]
    pub period: BucketLabel,
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
}

/// One labelled value on a chart axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Points in the order the backend returned them.
pub fn category_series(totals: &[CategoryTotal]) -> Vec<ChartPoint> {
    totals
        .iter()
        .map(|total| ChartPoint {
            label: total.category.clone(),
            value: total.total_amount,
        })
        .collect()
}

/// Points in the order the backend returned them; the period key is opaque.
pub fn monthly_series(totals: &[MonthlyTotal]) -> Vec<ChartPoint> {
    totals
        .iter()
        .map(|total| ChartPoint {
            label: total.period.to_string(),
            value: total.total_amount,
        })
        .collect()
}

/// Upper bound for the value axis: 10% headroom over the largest value, at least 1.
pub fn axis_max(points: &[ChartPoint]) -> f64 {
    let largest = points
        .iter()
        .map(|point| point.value)
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);
    (largest * 1.1).max(1.0)
}
