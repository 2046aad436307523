#![allow(non_snake_case)]

use crate::engine::geometry::EngineGeometry;
use crate::engine::json_reader::JsonGas;
use crate::error::{AnalysisError, Result};
use crate::gas::thermal_state::ThermalState;
use log::info;

/// Calorically perfect gas: constant `cp` and `cv`.
#[derive(Debug, Clone)]
pub struct GasProperties {
    R: f64,  // ideal gas constant [J/(kg.K)]
    cp: f64, // specific heat capacity - cp [J/(kg.K)]
    cv: f64, // specific heat capacity - cv [J/(kg.K)]
}

impl GasProperties {
    pub fn new(gas_info: &JsonGas) -> Result<GasProperties> {
        let R = gas_info.gas_constant;
        let cp = gas_info.cp;
        if R <= 0.0 {
            return Err(AnalysisError::InvalidGas(format!(
                "gas constant must be greater than zero: R = {}",
                R
            )));
        } else if cp <= R {
            return Err(AnalysisError::InvalidGas(format!(
                "cp must exceed the gas constant: cp = {}, R = {}",
                cp, R
            )));
        }
        Ok(GasProperties { R, cp, cv: cp - R })
    }

    pub fn R(&self) -> f64 {
        self.R
    }

    pub fn cp(&self) -> f64 {
        self.cp
    }

    pub fn cv(&self) -> f64 {
        self.cv
    }

    /// cp/cv
    pub fn k(&self) -> f64 {
        self.cp / self.cv
    }
}

/// Air trapped inside the engine.
///
/// With the pressure port open and the piston centred the gas sits at atmospheric
/// pressure and ambient temperature; the mass sealed in at that moment is taken from
/// the ideal gas law at the minimum volume `v1`. Every specific quantity of the run
/// divides by this mass.
#[derive(Debug, Clone)]
pub struct WorkingGas {
    mass: f64, // [kg]
    V1: f64,   // specific volume at v1 [m³/kg]
    V2: f64,   // specific volume at v2 [m³/kg]
}

impl WorkingGas {
    pub fn new(gas: &GasProperties, geometry: &EngineGeometry, thermal: &ThermalState) -> WorkingGas {
        let v1 = geometry.min_volume();
        let v2 = geometry.max_volume();
        let mass = thermal.atmospheric_pressure() * v1 / gas.R() / thermal.cold();
        info!("mass of working gas: {:e} kg", mass);
        WorkingGas {
            mass,
            V1: v1 / mass,
            V2: v2 / mass,
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Minimum specific volume [m³/kg]
    pub fn V1(&self) -> f64 {
        self.V1
    }

    /// Maximum specific volume [m³/kg]
    pub fn V2(&self) -> f64 {
        self.V2
    }

    /// Converts an internal volume [m³] into a specific volume [m³/kg]
    pub fn specific_volume(&self, volume: f64) -> f64 {
        volume / self.mass
    }
}
