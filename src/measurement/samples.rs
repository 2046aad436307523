#![allow(non_snake_case)]

use crate::error::{AnalysisError, Result};
use log::{debug, info};
use ndarray::*;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Columns every measurement file must carry
pub const REQUIRED_COLUMNS: [&str; 3] = ["t", "Pmeas", "Vmeas"];

/// One reading logged by the rig's microcontroller.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub t: f64,     // [s]
    pub Pmeas: f64, // [kPa] - gauge pressure
    pub Vmeas: f64, // [cm³] - volume change from mid-stroke
}

/// Time-ordered samples of one run.
#[derive(Debug, Clone)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    /// Reads a delimited file with a header row. Extra columns are ignored.
    pub fn from_file<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<SampleSet> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let set = SampleSet::from_reader(BufReader::new(file), delimiter)?;
        info!("read {} samples from {}", set.len(), path.display());
        Ok(set)
    }

    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<SampleSet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS.iter() {
            if !headers.iter().any(|h| h == *column) {
                return Err(AnalysisError::MissingColumn(column.to_string()));
            }
        }
        debug!("measurement columns: {:?}", headers);

        let mut samples = Vec::new();
        for record in csv_reader.deserialize() {
            let sample: Sample = record?;
            samples.push(sample);
        }
        SampleSet::new(samples)
    }

    pub fn new(samples: Vec<Sample>) -> Result<SampleSet> {
        if samples.is_empty() {
            return Err(AnalysisError::EmptyData);
        }
        Ok(SampleSet { samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Sample times [s]
    pub fn time(&self) -> Array1<f64> {
        self.samples.iter().map(|s| s.t).collect()
    }

    /// Raw gauge pressure readings [kPa]
    pub fn pressure(&self) -> Array1<f64> {
        self.samples.iter().map(|s| s.Pmeas).collect()
    }

    /// Raw volume change readings [cm³]
    pub fn volume_change(&self) -> Array1<f64> {
        self.samples.iter().map(|s| s.Vmeas).collect()
    }
}
