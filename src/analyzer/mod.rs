// Analyzer module: aggregates submodules for different aspects of analysis.

pub mod aggregate;
pub mod binning;
pub mod correlation;
pub mod derive;
pub mod engine;

// Re-export the main analyzer implementation for ease of use.
pub use engine::DatasetAnalyzer;
