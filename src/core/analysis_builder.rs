use super::analysis::Analysis;
use crate::engine::json_reader::RigConfig;
use crate::error::{AnalysisError, Result};
use crate::measurement::samples::SampleSet;
use log::info;
use std::path::Path;

pub struct AnalysisBuilder {
    rig: RigConfig,
    samples: Option<SampleSet>,
}

impl AnalysisBuilder {
    /// Creates an `AnalysisBuilder` for the reference rig. The run is described by the
    /// object methods; once the measurements are given, `build()` derives everything.
    pub fn new() -> AnalysisBuilder {
        AnalysisBuilder {
            rig: RigConfig::default(),
            samples: None,
        }
    }

    /// Replaces the whole rig description.
    pub fn rig<'a>(&'a mut self, rig: RigConfig) -> &'a mut Self {
        self.rig = rig;
        self
    }

    /// Reads the rig description from a `.json` file.
    pub fn rig_file<'a, P: AsRef<Path>>(&'a mut self, file_name: P) -> Result<&'a mut Self> {
        let file_name = file_name.as_ref();
        self.rig = RigConfig::from_file(file_name)?;
        info!("rig description read from {}", file_name.display());
        Ok(self)
    }

    /// Number of points per branch of the ideal cycle.
    pub fn resolution<'a>(&'a mut self, resolution: usize) -> &'a mut Self {
        self.rig.cycle.resolution = resolution;
        self
    }

    pub fn samples<'a>(&'a mut self, samples: SampleSet) -> &'a mut Self {
        self.samples = Some(samples);
        self
    }

    /// Reads the measurements from a delimited file with `t`, `Pmeas` and `Vmeas` columns.
    pub fn data_file<'a, P: AsRef<Path>>(&'a mut self, file_name: P, delimiter: u8) -> Result<&'a mut Self> {
        self.samples = Some(SampleSet::from_file(file_name, delimiter)?);
        Ok(self)
    }

    pub fn rig_config(&self) -> &RigConfig {
        &self.rig
    }

    /// Build the `Analysis`. `AnalysisBuilder` is consumed in the process.
    pub fn build(self) -> Result<Analysis> {
        let samples = match self.samples {
            Some(s) => s,
            None => return Err(AnalysisError::EmptyData),
        };
        Analysis::new(&self.rig, samples)
    }
}

impl Default for AnalysisBuilder {
    fn default() -> Self {
        AnalysisBuilder::new()
    }
}
