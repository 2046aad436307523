#![allow(non_snake_case)]

use crate::engine::geometry::EngineGeometry;
use crate::gas::thermal_state::ThermalState;
use crate::gas::working_gas::{GasProperties, WorkingGas};
use crate::measurement::samples::SampleSet;
use log::debug;
use ndarray::*;

/// Pressure sensor scale [Pa/kPa]
pub const PRESSURE_SCALE: f64 = 1000.0;
/// Volume sensor scale [m³/cm³]
pub const VOLUME_SCALE: f64 = 1e-6;

/// Absolute pressure [Pa] from a gauge reading [kPa]
pub fn absolute_pressure(raw: f64, atmospheric_pressure: f64) -> f64 {
    raw * PRESSURE_SCALE + atmospheric_pressure
}

/// Specific volume [m³/kg] from a volume change reading [cm³], which is zero at mid-stroke
pub fn specific_volume(raw: f64, geometry: &EngineGeometry, mass: f64) -> f64 {
    (raw * VOLUME_SCALE + geometry.min_volume() + geometry.mid_stroke_offset()) / mass
}

/// Measured samples expressed in the coordinates of the ideal cycle.
///
/// Temperature follows from the ideal gas law. Entropy treats each sample as reached
/// from state 1 by a polytropic process, so it shares the ideal cycle's reference.
#[derive(Debug, Clone)]
pub struct MeasuredSeries {
    time: Array1<f64>,            // [s]
    pressure: Array1<f64>,        // [Pa]
    specific_volume: Array1<f64>, // [m³/kg]
    temperature: Array1<f64>,     // [K]
    entropy: Array1<f64>,         // [J/(kg.K)]
}

impl MeasuredSeries {
    pub fn new(
        samples: &SampleSet,
        geometry: &EngineGeometry,
        gas: &GasProperties,
        thermal: &ThermalState,
        working_gas: &WorkingGas,
        reference_entropy: f64,
    ) -> MeasuredSeries {
        let R = gas.R();
        let cv = gas.cv();
        let Th = thermal.hot();
        let V1 = working_gas.V1();
        let mass = working_gas.mass();
        let Patm = thermal.atmospheric_pressure();

        let time = samples.time();
        let specific_volume = samples.volume_change().mapv(|v| self::specific_volume(v, geometry, mass));
        let pressure = samples.pressure().mapv(|p| absolute_pressure(p, Patm));

        let mut temperature = Array1::<f64>::zeros(samples.len());
        let mut entropy = Array1::<f64>::zeros(samples.len());
        for i in 0..samples.len() {
            temperature[i] = pressure[i] * specific_volume[i] / R;
            entropy[i] = R * (specific_volume[i] / V1).ln() - cv * (Th / temperature[i]).ln() + reference_entropy;
        }
        debug!(
            "measured temperature range: {:.2} K to {:.2} K",
            temperature.fold(f64::INFINITY, |a, &b| a.min(b)),
            temperature.fold(f64::NEG_INFINITY, |a, &b| a.max(b))
        );

        MeasuredSeries {
            time,
            pressure,
            specific_volume,
            temperature,
            entropy,
        }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &Array1<f64> {
        &self.time
    }

    /// Absolute pressure [Pa]
    pub fn pressure(&self) -> &Array1<f64> {
        &self.pressure
    }

    /// Specific volume [m³/kg]
    pub fn specific_volume(&self) -> &Array1<f64> {
        &self.specific_volume
    }

    /// Gas temperature [K]
    pub fn temperature(&self) -> &Array1<f64> {
        &self.temperature
    }

    /// Specific entropy [J/(kg.K)]
    pub fn entropy(&self) -> &Array1<f64> {
        &self.entropy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::ideal_cycle::REFERENCE_ENTROPY;
    use crate::engine::json_reader::{JsonGas, JsonGeometry, JsonThermal};
    use crate::measurement::samples::Sample;

    fn series_of(samples: Vec<Sample>) -> (MeasuredSeries, EngineGeometry, WorkingGas) {
        let gas = GasProperties::new(&JsonGas::default()).unwrap();
        let geometry = EngineGeometry::new(&JsonGeometry::default()).unwrap();
        let thermal = ThermalState::new(&JsonThermal::default()).unwrap();
        let working_gas = WorkingGas::new(&gas, &geometry, &thermal);
        let samples = SampleSet::new(samples).unwrap();
        let series = MeasuredSeries::new(&samples, &geometry, &gas, &thermal, &working_gas, REFERENCE_ENTROPY);
        (series, geometry, working_gas)
    }

    #[test]
    fn zero_reading_is_the_mid_stroke_reference() {
        let (series, geometry, working_gas) = series_of(vec![Sample {
            t: 0.0,
            Pmeas: 0.0,
            Vmeas: 0.0,
        }]);
        assert_eq!(series.pressure()[0], 101325.0);
        let expected = (geometry.min_volume() + 0.5 * geometry.swept_volume()) / working_gas.mass();
        assert!((series.specific_volume()[0] - expected).abs() / expected < 1e-14);
    }

    #[test]
    fn zero_reading_sits_at_ambient_temperature() {
        // vented, centred piston defines the gas mass at Tc
        let (series, geometry, _) = series_of(vec![Sample {
            t: 0.0,
            Pmeas: 0.0,
            Vmeas: 0.0,
        }]);
        let expected = 291.15 * geometry.mid_stroke_volume() / geometry.min_volume();
        assert!((series.temperature()[0] - expected).abs() < 1e-9);
    }

    #[test]
    fn temperature_follows_ideal_gas_law() {
        let (series, _, _) = series_of(vec![
            Sample { t: 0.00, Pmeas: 1.5, Vmeas: -0.6 },
            Sample { t: 0.01, Pmeas: 0.2, Vmeas: 0.4 },
            Sample { t: 0.02, Pmeas: -1.1, Vmeas: 0.8 },
        ]);
        for i in 0..series.len() {
            let expected = series.pressure()[i] * series.specific_volume()[i] / 287.0;
            assert_eq!(series.temperature()[i], expected);
        }
    }

    #[test]
    fn entropy_at_state_one_is_the_reference() {
        let (series, geometry, working_gas) = series_of(vec![Sample {
            t: 0.0,
            Pmeas: 0.0,
            Vmeas: 0.0,
        }]);
        // a sample sitting exactly at V1 and Th reproduces the reference entropy
        let V1 = working_gas.V1();
        let P1 = 287.0 * 363.15 / V1;
        let raw_p = (P1 - 101325.0) / PRESSURE_SCALE;
        let raw_v = -geometry.mid_stroke_offset() / VOLUME_SCALE;
        let (at_state_one, _, _) = series_of(vec![Sample { t: 0.0, Pmeas: raw_p, Vmeas: raw_v }]);
        assert!((at_state_one.entropy()[0] - REFERENCE_ENTROPY).abs() < 1e-6);
        assert!(series.entropy()[0] < REFERENCE_ENTROPY);
    }
}
