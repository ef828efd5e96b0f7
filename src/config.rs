use serde::Deserialize;
use std::fs;

/// Tuning knobs for the analysis pass. The defaults reproduce the standard
/// report shape: ten equal-width intervals per distribution.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub age_bins: u32,
    pub price_bins: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            age_bins: 10,
            price_bins: 10,
        }
    }
}

pub fn load_config(path: &str) -> Result<AnalyzerConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AnalyzerConfig = serde_json::from_str(&content)?;
    Ok(config)
}
