// Core structs: SaleRecord, Dataset, Bin, AnalysisResult
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Columns every input table must carry before analysis may run.
pub const REQUIRED_COLUMNS: [&str; 5] = ["date_sale", "birth_date", "price", "sold", "individual"];

/// One row of the input table. `None` marks a missing cell, not a missing
/// column. The trailing fields are derived during analysis and stay `None`
/// on freshly ingested records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub date_sale: Option<NaiveDate>,
    pub birth_date: Option<NaiveDate>,
    pub price: Option<f64>,
    pub sold: Option<f64>,
    pub individual: Option<f64>,
    #[serde(skip_deserializing)]
    pub age_at_purchase: Option<f64>,
    #[serde(skip_deserializing)]
    pub age_at_purchase_rounded: Option<f64>,
    #[serde(skip_deserializing)]
    pub age_interval: Option<Bin>,
    #[serde(skip_deserializing)]
    pub price_interval: Option<Bin>,
}

impl SaleRecord {
    pub fn new(
        date_sale: Option<NaiveDate>,
        birth_date: Option<NaiveDate>,
        price: Option<f64>,
        sold: Option<f64>,
        individual: Option<f64>,
    ) -> Self {
        Self {
            date_sale,
            birth_date,
            price,
            sold,
            individual,
            age_at_purchase: None,
            age_at_purchase_rounded: None,
            age_interval: None,
            price_interval: None,
        }
    }
}

/// An ordered sequence of records plus the column names the source table
/// actually carried. Row order is insertion order and is preserved by the
/// analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub records: Vec<SaleRecord>,
    pub columns: Vec<String>,
}

impl Dataset {
    /// Builds a dataset from typed records. Every required column is present
    /// by construction.
    pub fn from_records(records: Vec<SaleRecord>) -> Self {
        Self {
            records,
            columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Required columns the source table did not carry.
    pub fn missing_required_columns(&self) -> Vec<String> {
        REQUIRED_COLUMNS
            .iter()
            .filter(|required| !self.columns.iter().any(|have| have == *required))
            .map(|required| required.to_string())
            .collect()
    }
}

/// One equal-width interval, labeled `(lower, upper]` with edges rounded to
/// whole units. Assignment happens against the exact fitted edges; the label
/// only carries the rounded ones. Ordering follows `index`, so interval-keyed
/// maps iterate low range to high range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bin {
    pub index: u32,
    pub lower: i64,
    pub upper: i64,
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}]", self.lower, self.upper)
    }
}

/// Per-price-interval occupancy split into sold and unsold records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBucket {
    pub count: u64,
    pub not_sold: f64,
    pub sold: f64,
}

/// 2x2 matrix over the (age_at_purchase, price) pair. Row/column 0 is age,
/// row/column 1 is price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Matrix2(pub [[f64; 2]; 2]);

/// Everything one analysis pass produces. `data` is an enriched copy of the
/// input; the caller's dataset is never touched.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub data: Dataset,
    pub sold_by_age: BTreeMap<Bin, f64>,
    pub all_properties_by_price: BTreeMap<Bin, PriceBucket>,
    pub sold_properties_by_price: BTreeMap<Bin, f64>,
    pub covariance: Matrix2,
    pub correlation: Matrix2,
    pub correlation_no_na: Matrix2,
}

/// The only error surfaced to callers. Numeric edge cases show up as NaN in
/// the output matrices instead of failing.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("column `{column}` has an invalid value at row {row}: {detail}")]
    InvalidColumn {
        column: String,
        row: usize,
        detail: String,
    },
}
