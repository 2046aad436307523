//! Shared helpers for the integration tests
#![allow(dead_code)]

use stirling_cycle_analyzer::cycle::ideal_cycle::IdealCycle;
use stirling_cycle_analyzer::measurement::measured_series::{PRESSURE_SCALE, VOLUME_SCALE};
use stirling_cycle_analyzer::{Analysis, AnalysisBuilder, RigConfig, Sample, SampleSet};

/// Relative error between computed and expected value
pub fn relative_error(computed: f64, expected: f64) -> f64 {
    ((computed - expected) / expected).abs()
}

/// A single vented, mid-stroke reading
pub fn resting_sample() -> Sample {
    Sample {
        t: 0.0,
        Pmeas: 0.0,
        Vmeas: 0.0,
    }
}

pub fn analysis_of(rig: RigConfig, samples: Vec<Sample>) -> Analysis {
    let mut builder = AnalysisBuilder::new();
    builder.rig(rig).samples(SampleSet::new(samples).unwrap());
    builder.build().unwrap()
}

pub fn reference_analysis(samples: Vec<Sample>) -> Analysis {
    analysis_of(RigConfig::default(), samples)
}

/// Raw readings that reproduce a given absolute pressure [Pa] and specific volume [m³/kg]
pub fn raw_sample(analysis: &Analysis, t: f64, pressure: f64, specific_volume: f64) -> Sample {
    let geometry = analysis.geometry();
    let mass = analysis.working_gas().mass();
    let patm = analysis.thermal().atmospheric_pressure();
    Sample {
        t,
        Pmeas: (pressure - patm) / PRESSURE_SCALE,
        Vmeas: (specific_volume * mass - geometry.min_volume() - geometry.mid_stroke_offset())
            / VOLUME_SCALE,
    }
}

/// Samples running along the hot isotherm from state 1 to 2, then back along the cold
/// isotherm from 3 to 4, the way an ideal engine would log them.
pub fn ideal_trace(analysis: &Analysis, cycle: &IdealCycle) -> Vec<Sample> {
    let num = cycle.resolution();
    let mut samples = Vec::with_capacity(2 * num);
    for i in 0..num {
        samples.push(raw_sample(analysis, i as f64, cycle.hot_pressure()[i], cycle.volume()[i]));
    }
    for i in (0..num).rev() {
        let t = (2 * num - i) as f64;
        samples.push(raw_sample(analysis, t, cycle.cold_pressure()[i], cycle.volume()[i]));
    }
    samples
}
