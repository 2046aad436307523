//! # stirling_cycle_analyzer
//!
//! The `stirling_cycle_analyzer` crate compares pressure/volume data logged on a Stirling
//! engine test rig with the ideal Stirling cycle between the same two reservoirs.
//!
//! ```no_run
//! use stirling_cycle_analyzer::AnalysisBuilder;
//!
//! let mut builder = AnalysisBuilder::new();
//! builder.data_file("data.csv", b',').unwrap().resolution(100);
//! let analysis = builder.build().unwrap();
//! println!("{}", analysis);
//! analysis.plot();
//! ```

mod core;
pub mod cycle;
pub mod engine;
pub mod error;
pub mod gas;
pub mod measurement;
pub mod numerics;
pub mod plotting;

// Re-exporting
pub use crate::core::analysis::Analysis;
pub use crate::core::analysis_builder::AnalysisBuilder;
pub use crate::core::traits::Diagram;
pub use crate::engine::json_reader::RigConfig;
pub use crate::error::AnalysisError;
pub use crate::measurement::samples::{Sample, SampleSet};

/// Corner of the ideal cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct StatePoint {
    pub number: u8,
    pub pressure: f64,        // Pa
    pub specific_volume: f64, // m³/kg
    pub temperature: f64,     // K
    pub entropy: f64,         // J/(kg.K)
}

impl StatePoint {
    pub fn new(number: u8, pressure: f64, specific_volume: f64, temperature: f64, entropy: f64) -> StatePoint {
        StatePoint {
            number,
            pressure,
            specific_volume,
            temperature,
            entropy,
        }
    }
}

impl std::fmt::Display for StatePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "state {}: pressure: {:.2} [kPa]\tvolume: {:.5} [m³/kg]\ttemperature: {:.2} [K]\tentropy: {:.2} [J/(kg.K)]",
            self.number,
            self.pressure / 1000.0,
            self.specific_volume,
            self.temperature,
            self.entropy
        )
    }
}
