//! Rig description read from a `.json` file.
//!
//! Every field is optional; anything left out keeps the value of the reference rig
//! (90 mm foam-displacer engine on a 90 °C water bath). An example file:
//!
//! ```text
//! {
//!     "thermal": {
//!         "hot_source_temperature": 90.0,
//!         "cold_sink_temperature": 18.0,
//!         "atmospheric_pressure": 101325.0
//!     },
//!     "gas": { "gas_constant": 287.0, "cp": 1004.0 },
//!     "geometry": {
//!         "cylinder_diameter": 0.09,
//!         "cylinder_height": 0.02,
//!         "displacer_clearance": 0.0025,
//!         "displacer_height": 0.008,
//!         "porosity": 0.9,
//!         "piston_diameter": 0.016,
//!         "stroke": 0.008
//!     },
//!     "cycle": { "resolution": 100, "polytropic_index": 1.0, "reference_entropy": 4018.6 }
//! }
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RigConfig {
    pub thermal: JsonThermal,
    pub gas: JsonGas,
    pub geometry: JsonGeometry,
    pub cycle: JsonCycle,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct JsonThermal {
    pub hot_source_temperature: f64, // [°C]
    pub cold_sink_temperature: f64,  // [°C]
    pub atmospheric_pressure: f64,   // [Pa]
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct JsonGas {
    pub gas_constant: f64, // [J/(kg.K)]
    pub cp: f64,           // [J/(kg.K)]
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct JsonGeometry {
    pub cylinder_diameter: f64,   // [m]
    pub cylinder_height: f64,     // [m]
    pub displacer_clearance: f64, // [m] - diametral gap between displacer and cylinder
    pub displacer_height: f64,    // [m]
    pub porosity: f64,            // [-]
    pub piston_diameter: f64,     // [m]
    pub stroke: f64,              // [m]
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct JsonCycle {
    pub resolution: usize,
    pub polytropic_index: f64,
    pub reference_entropy: f64, // [J/(kg.K)]
}

impl RigConfig {
    /// Reads a rig file. Missing sections and fields fall back to the reference rig.
    pub fn from_file<P: AsRef<Path>>(file_name: P) -> Result<RigConfig> {
        let json_file = std::fs::read_to_string(file_name)?;
        RigConfig::from_json(&json_file)
    }

    pub fn from_json(json: &str) -> Result<RigConfig> {
        let data: RigConfig = serde_json::from_str(json)?;
        Ok(data)
    }
}

impl Default for JsonThermal {
    fn default() -> Self {
        JsonThermal {
            hot_source_temperature: 90.0,
            cold_sink_temperature: 18.0,
            atmospheric_pressure: 101325.0,
        }
    }
}

impl Default for JsonGas {
    fn default() -> Self {
        // dry air
        JsonGas {
            gas_constant: 287.0,
            cp: 1004.0,
        }
    }
}

impl Default for JsonGeometry {
    fn default() -> Self {
        JsonGeometry {
            cylinder_diameter: 90e-3,
            cylinder_height: 20e-3,
            displacer_clearance: 2.5e-3,
            displacer_height: 8e-3,
            porosity: 0.9,
            piston_diameter: 16e-3,
            stroke: 2.0 * 4e-3,
        }
    }
}

impl Default for JsonCycle {
    fn default() -> Self {
        JsonCycle {
            resolution: 100,
            polytropic_index: 1.0,
            reference_entropy: crate::cycle::ideal_cycle::REFERENCE_ENTROPY,
        }
    }
}
