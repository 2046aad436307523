use crate::engine::json_reader::JsonGeometry;
use crate::error::{AnalysisError, Result};
use std::f64::consts::PI;

/// Internal volumes of a displacer-type Stirling engine.
///
/// The minimum volume is the large cylinder minus the solid fraction of the foam
/// displacer; the maximum adds the full sweep of the power piston.
#[derive(Debug, Clone)]
pub struct EngineGeometry {
    cylinder_diameter: f64,  // [m]
    cylinder_height: f64,    // [m]
    displacer_diameter: f64, // [m]
    displacer_height: f64,   // [m]
    porosity: f64,           // [-]
    piston_diameter: f64,    // [m]
    stroke: f64,             // [m] - total piston travel
    min_volume: f64,         // [m³]
    max_volume: f64,         // [m³]
}

impl EngineGeometry {
    /// Creates the geometry from a rig file section. Inputs units must be: `m`.
    pub fn new(geometry_info: &JsonGeometry) -> Result<EngineGeometry> {
        let cylinder_diameter = geometry_info.cylinder_diameter;
        let cylinder_height = geometry_info.cylinder_height;
        let displacer_diameter = cylinder_diameter - geometry_info.displacer_clearance;
        let displacer_height = geometry_info.displacer_height;
        let porosity = geometry_info.porosity;
        let piston_diameter = geometry_info.piston_diameter;
        let stroke = geometry_info.stroke;

        if !(0.0..=1.0).contains(&porosity) {
            return Err(AnalysisError::InvalidGeometry(format!(
                "porosity must lie between 0 and 1: {}",
                porosity
            )));
        } else if piston_diameter <= 0.0 || stroke <= 0.0 {
            return Err(AnalysisError::InvalidGeometry(format!(
                "piston diameter and stroke must be greater than zero: d = {}, h = {}",
                piston_diameter, stroke
            )));
        }

        let min_volume = PI / 4.0 * cylinder_diameter.powi(2) * cylinder_height
            - (1.0 - porosity) * PI / 4.0 * displacer_diameter.powi(2) * displacer_height;
        let max_volume = min_volume + PI / 4.0 * piston_diameter.powi(2) * stroke;

        if min_volume <= 0.0 {
            return Err(AnalysisError::InvalidGeometry(format!(
                "minimum internal volume must be greater than zero: v1 = {} m³",
                min_volume
            )));
        } else if max_volume <= min_volume {
            return Err(AnalysisError::InvalidGeometry(format!(
                "maximum internal volume must exceed the minimum: v1 = {} m³, v2 = {} m³",
                min_volume, max_volume
            )));
        }

        Ok(EngineGeometry {
            cylinder_diameter,
            cylinder_height,
            displacer_diameter,
            displacer_height,
            porosity,
            piston_diameter,
            stroke,
            min_volume,
            max_volume,
        })
    }

    /// Minimum internal volume `v1` [m³]
    pub fn min_volume(&self) -> f64 {
        self.min_volume
    }

    /// Maximum internal volume `v2` [m³]
    pub fn max_volume(&self) -> f64 {
        self.max_volume
    }

    /// Volume displaced by the power piston over a full stroke [m³]
    pub fn swept_volume(&self) -> f64 {
        PI / 4.0 * self.piston_diameter.powi(2) * self.stroke
    }

    /// Offset added to a raw volume-change reading: half a sweep above `v1`, since the
    /// volume sensor reads zero with the piston centred.
    pub fn mid_stroke_offset(&self) -> f64 {
        0.5 * PI / 4.0 * self.piston_diameter.powi(2) * self.stroke
    }

    /// Internal volume with the piston centred [m³]
    pub fn mid_stroke_volume(&self) -> f64 {
        self.min_volume + self.mid_stroke_offset()
    }

    pub fn compression_ratio(&self) -> f64 {
        self.max_volume / self.min_volume
    }

    pub fn cylinder_diameter(&self) -> f64 {
        self.cylinder_diameter
    }

    pub fn cylinder_height(&self) -> f64 {
        self.cylinder_height
    }

    pub fn displacer_diameter(&self) -> f64 {
        self.displacer_diameter
    }

    pub fn displacer_height(&self) -> f64 {
        self.displacer_height
    }

    pub fn porosity(&self) -> f64 {
        self.porosity
    }

    pub fn piston_diameter(&self) -> f64 {
        self.piston_diameter
    }

    pub fn stroke(&self) -> f64 {
        self.stroke
    }
}

impl std::fmt::Display for EngineGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "v1: {:.4e} [m³]\tv2: {:.4e} [m³]\tswept: {:.4e} [m³]\tv2/v1: {:.5}",
            self.min_volume,
            self.max_volume,
            self.swept_volume(),
            self.compression_ratio()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_rig_volumes_are_ordered() {
        let geometry = EngineGeometry::new(&JsonGeometry::default()).unwrap();
        assert!(geometry.min_volume() > 0.0);
        assert!(geometry.max_volume() > geometry.min_volume());
        assert_eq!(geometry.displacer_diameter(), 90e-3 - 2.5e-3);
    }

    #[test]
    fn reference_rig_volumes_match_closed_form() {
        let geometry = EngineGeometry::new(&JsonGeometry::default()).unwrap();
        let d_disp: f64 = 90e-3 - 2.5e-3;
        let v1 = PI / 4.0 * 0.09f64.powi(2) * 0.02 - 0.1 * PI / 4.0 * d_disp.powi(2) * 8e-3;
        let swept = PI / 4.0 * 0.016f64.powi(2) * 8e-3;
        assert!((geometry.min_volume() - v1).abs() < 1e-15);
        assert!((geometry.swept_volume() - swept).abs() < 1e-15);
        assert!((geometry.mid_stroke_volume() - (v1 + 0.5 * swept)).abs() < 1e-15);
    }

    #[test]
    fn solid_displacer_filling_the_cylinder_is_rejected() {
        let info = JsonGeometry {
            displacer_clearance: 0.0,
            displacer_height: 20e-3,
            porosity: 0.0,
            ..JsonGeometry::default()
        };
        assert!(matches!(
            EngineGeometry::new(&info),
            Err(AnalysisError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn porosity_outside_unit_interval_is_rejected() {
        let info = JsonGeometry {
            porosity: 1.2,
            ..JsonGeometry::default()
        };
        assert!(EngineGeometry::new(&info).is_err());
    }
}
