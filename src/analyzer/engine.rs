use crate::analyzer::binning::BinSpec;
use crate::analyzer::{aggregate, correlation, derive};
use crate::config::AnalyzerConfig;
use crate::model::{AnalysisResult, Dataset, SchemaError};
use tracing::debug;

/// Runs the whole descriptive-statistics pass over one dataset: derived
/// columns, interval assignment, grouped aggregates and the age/price
/// relationship matrices.
pub struct DatasetAnalyzer;

impl DatasetAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyzes with the default configuration (ten intervals per column).
    pub fn analyze(&self, dataset: &Dataset) -> Result<AnalysisResult, SchemaError> {
        self.analyze_with(dataset, &AnalyzerConfig::default())
    }

    /// Analyzes with an explicit configuration. The schema is checked before
    /// any computation; the input is only borrowed and the result carries an
    /// enriched copy.
    pub fn analyze_with(
        &self,
        dataset: &Dataset,
        cfg: &AnalyzerConfig,
    ) -> Result<AnalysisResult, SchemaError> {
        let missing = dataset.missing_required_columns();
        if !missing.is_empty() {
            return Err(SchemaError::MissingColumns(missing));
        }

        let mut data = dataset.clone();

        derive::compute_ages(&mut data.records);
        debug!("derived ages for {} records", data.records.len());

        let ages: Vec<f64> = data
            .records
            .iter()
            .filter_map(|r| r.age_at_purchase)
            .collect();
        if let Some(spec) = BinSpec::fit(&ages, cfg.age_bins) {
            for record in data.records.iter_mut() {
                record.age_interval = record.age_at_purchase.map(|age| spec.bin_of(age));
            }
        }
        let sold_by_age =
            aggregate::sold_by_bin(data.records.iter().map(|r| (r.age_interval, r.sold)));
        debug!("{} age intervals occupied", sold_by_age.len());

        let prices: Vec<f64> = data.records.iter().filter_map(|r| r.price).collect();
        if let Some(spec) = BinSpec::fit(&prices, cfg.price_bins) {
            for record in data.records.iter_mut() {
                record.price_interval = record.price.map(|price| spec.bin_of(price));
            }
        }
        let sold_properties_by_price =
            aggregate::sold_by_bin(data.records.iter().map(|r| (r.price_interval, r.sold)));
        let all_properties_by_price = aggregate::price_buckets(&data.records);
        debug!("{} price intervals occupied", all_properties_by_price.len());

        let (covariance, correlation, correlation_no_na) =
            correlation::sold_individual_matrices(&data.records);

        Ok(AnalysisResult {
            data,
            sold_by_age,
            all_properties_by_price,
            sold_properties_by_price,
            covariance,
            correlation,
            correlation_no_na,
        })
    }
}

impl Default for DatasetAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
