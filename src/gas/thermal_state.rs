use crate::engine::json_reader::JsonThermal;
use crate::error::{AnalysisError, Result};

/// Offset between the Celsius and Kelvin scales
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Reservoir temperatures and the ambient pressure of the rig.
#[derive(Debug, Clone)]
pub struct ThermalState {
    hot: f64,                  // [K] - heat source (water bath)
    cold: f64,                 // [K] - heat sink (ambient)
    atmospheric_pressure: f64, // [Pa]
}

impl ThermalState {
    /// Creates the thermal state from a rig file section, where temperatures are in `°C`.
    pub fn new(thermal_info: &JsonThermal) -> Result<ThermalState> {
        let hot = thermal_info.hot_source_temperature + CELSIUS_TO_KELVIN;
        let cold = thermal_info.cold_sink_temperature + CELSIUS_TO_KELVIN;
        ThermalState::from_kelvin(hot, cold, thermal_info.atmospheric_pressure)
    }

    pub fn from_kelvin(hot: f64, cold: f64, atmospheric_pressure: f64) -> Result<ThermalState> {
        if cold <= 0.0 {
            return Err(AnalysisError::InvalidThermalState(format!(
                "cold sink temperature must be above absolute zero: Tc = {} K",
                cold
            )));
        } else if hot <= cold {
            return Err(AnalysisError::InvalidThermalState(format!(
                "heat source must be hotter than the sink: Th = {} K, Tc = {} K",
                hot, cold
            )));
        } else if atmospheric_pressure <= 0.0 {
            return Err(AnalysisError::InvalidThermalState(format!(
                "atmospheric pressure must be greater than zero: {} Pa",
                atmospheric_pressure
            )));
        }
        Ok(ThermalState {
            hot,
            cold,
            atmospheric_pressure,
        })
    }

    /// Heat source temperature `Th` [K]
    pub fn hot(&self) -> f64 {
        self.hot
    }

    /// Heat sink temperature `Tc` [K]
    pub fn cold(&self) -> f64 {
        self.cold
    }

    pub fn atmospheric_pressure(&self) -> f64 {
        self.atmospheric_pressure
    }

    pub fn carnot_efficiency(&self) -> f64 {
        1.0 - self.cold / self.hot
    }
}
