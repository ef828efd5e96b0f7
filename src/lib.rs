//! Descriptive statistics over property sale records: age-at-purchase and
//! price distributions, sold versus unsold counts per price interval and the
//! relationship between buyer age and sale price.
//!
//! Feed a [`Dataset`] to [`DatasetAnalyzer::analyze`] and consume the
//! returned [`AnalysisResult`] bundle. The pass is synchronous, pure and
//! borrows its input; independent datasets can be analyzed in parallel by
//! the caller.

pub mod analyzer;
pub mod config;
pub mod ingest;
pub mod model;
pub mod utils;

pub use analyzer::DatasetAnalyzer;
pub use config::{load_config, AnalyzerConfig};
pub use ingest::rows_to_dataset;
pub use model::{
    AnalysisResult, Bin, Dataset, Matrix2, PriceBucket, SaleRecord, SchemaError,
};
