#![allow(non_snake_case)]

use crate::engine::json_reader::JsonCycle;
use crate::error::{AnalysisError, Result};
use crate::gas::thermal_state::ThermalState;
use crate::gas::working_gas::{GasProperties, WorkingGas};
use crate::numerics::sequences::{cumulative_sum, linspace};
use crate::StatePoint;
use log::debug;
use ndarray::*;

/// Specific entropy of air at `Th` and `P1` [J/(kg.K)]. Only differences are meaningful;
/// this anchors the whole T-s diagram.
pub const REFERENCE_ENTROPY: f64 = 4.0186e3;

/// Discretization of the ideal cycle.
#[derive(Debug, Clone)]
pub struct CycleParameters {
    resolution: usize,      // points per branch
    polytropic_index: f64,  // n = 1: isothermal
    reference_entropy: f64, // [J/(kg.K)]
}

impl CycleParameters {
    pub fn new(cycle_info: &JsonCycle) -> Result<CycleParameters> {
        // the midpoint arrows need indices N/2 - 1 and N/2 + 1
        if cycle_info.resolution < 3 {
            return Err(AnalysisError::InvalidResolution(format!(
                "at least 3 points per branch are required: N = {}",
                cycle_info.resolution
            )));
        } else if cycle_info.polytropic_index <= 0.0 {
            return Err(AnalysisError::InvalidResolution(format!(
                "polytropic index must be greater than zero: n = {}",
                cycle_info.polytropic_index
            )));
        }
        Ok(CycleParameters {
            resolution: cycle_info.resolution,
            polytropic_index: cycle_info.polytropic_index,
            reference_entropy: cycle_info.reference_entropy,
        })
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn polytropic_index(&self) -> f64 {
        self.polytropic_index
    }

    pub fn reference_entropy(&self) -> f64 {
        self.reference_entropy
    }
}

impl Default for CycleParameters {
    fn default() -> Self {
        CycleParameters {
            resolution: 100,
            polytropic_index: 1.0,
            reference_entropy: REFERENCE_ENTROPY,
        }
    }
}

/// Ideal Stirling cycle between the two reservoirs:
///
/// * 1-2: isothermal heat addition at `Th`, `V1 -> V2`
/// * 2-3: isochoric heat removal at `V2`, `Th -> Tc`
/// * 3-4: isothermal heat removal at `Tc`, `V2 -> V1`
/// * 4-1: isochoric heat addition at `V1`, `Tc -> Th`
///
/// Both isotherms share the volume grid `V` (increasing from `V1`) and both isochores
/// share the temperature grid `T` (decreasing from `Th`). Each entropy sequence starts
/// from the value the previous branch ended on, so the four of them form one continuous
/// reference frame.
#[derive(Debug, Clone)]
pub struct IdealCycle {
    states: [StatePoint; 4],
    polytropic_index: f64,
    volume: Array1<f64>,        // V [m³/kg]
    temperature: Array1<f64>,   // T [K]
    hot_pressure: Array1<f64>,  // Ph [Pa]
    cold_pressure: Array1<f64>, // Pc [Pa]
    entropy_12: Array1<f64>,    // [J/(kg.K)]
    entropy_23: Array1<f64>,
    entropy_34: Array1<f64>,
    entropy_41: Array1<f64>,
    reference_volume: Array1<f64>,
    hot_reference_pressure: Array1<f64>,
    cold_reference_pressure: Array1<f64>,
}

impl IdealCycle {
    pub fn new(
        gas: &GasProperties,
        thermal: &ThermalState,
        working_gas: &WorkingGas,
        params: &CycleParameters,
    ) -> IdealCycle {
        let num = params.resolution;
        let n = params.polytropic_index;
        let R = gas.R();
        let cv = gas.cv();
        let (Th, Tc) = (thermal.hot(), thermal.cold());
        let (V1, V2) = (working_gas.V1(), working_gas.V2());

        // Process 1-2: isothermal heat addition
        let P1 = R * Th / V1;
        let P2 = R * Th / V2;
        let volume = linspace(V1, V2, num);
        let hot_pressure = volume.mapv(|v| (P1 * V1.powf(n)) / v.powf(n));
        let mut ds = Array1::<f64>::zeros(num);
        ds[0] = params.reference_entropy;
        for i in 1..num {
            ds[i] = R * (hot_pressure[i - 1] / hot_pressure[i]).ln();
        }
        let entropy_12 = cumulative_sum(&ds);

        // Process 2-3: constant volume heat removal
        let V3 = V2;
        let P3 = R * Tc / V3;
        let temperature = linspace(Th, Tc, num);
        let entropy_23 = IdealCycle::isochoric_entropy(&temperature, cv, entropy_12[num - 1]);

        // Process 3-4: isothermal heat removal, traversed from V2 back to V1
        let V4 = V1;
        let P4 = R * Tc / V4;
        let cold_pressure = volume.mapv(|v| (P4 * V4.powf(n)) / v.powf(n));
        let mut ds = Array1::<f64>::zeros(num);
        ds[0] = entropy_23[num - 1];
        for i in (1..num).rev() {
            ds[i] = R * (cold_pressure[i] / cold_pressure[i - 1]).ln();
        }
        let entropy_34 = cumulative_sum(&ds);

        // Process 4-1: constant volume heat addition, closing back on state 1
        let entropy_41 = IdealCycle::isochoric_entropy(&temperature, cv, entropy_12[0]);

        // Isotherms extended slightly past the cycle, for reference
        let reference_volume = linspace(V1 * 0.99, V2 * 1.01, num);
        let v_ref = reference_volume[0];
        let hot_reference_pressure = reference_volume.mapv(|v| (R * Th / v_ref) * v_ref.powf(n) / v.powf(n));
        let cold_reference_pressure = reference_volume.mapv(|v| (R * Tc / v_ref) * v_ref.powf(n) / v.powf(n));

        let states = [
            StatePoint::new(1, P1, V1, Th, entropy_12[0]),
            StatePoint::new(2, P2, V2, Th, entropy_23[0]),
            StatePoint::new(3, P3, V3, Tc, entropy_34[0]),
            StatePoint::new(4, P4, V4, Tc, entropy_41[num - 1]),
        ];
        for state in states.iter() {
            debug!("ideal cycle {}", state);
        }

        IdealCycle {
            states,
            polytropic_index: n,
            volume,
            temperature,
            hot_pressure,
            cold_pressure,
            entropy_12,
            entropy_23,
            entropy_34,
            entropy_41,
            reference_volume,
            hot_reference_pressure,
            cold_reference_pressure,
        }
    }

    /// Cumulative entropy along an isochore: `ds = cv ln(T[i]/T[i-1])`, seeded with `start`.
    fn isochoric_entropy(temperature: &Array1<f64>, cv: f64, start: f64) -> Array1<f64> {
        let mut ds = Array1::<f64>::zeros(temperature.len());
        ds[0] = start;
        for i in 1..temperature.len() {
            ds[i] = cv * (temperature[i] / temperature[i - 1]).ln();
        }
        cumulative_sum(&ds)
    }

    /// State point `1` to `4`.
    ///
    /// # Panics
    /// Panics if `number` is not in `1..=4`.
    pub fn state(&self, number: usize) -> &StatePoint {
        &self.states[number - 1]
    }

    pub fn states(&self) -> &[StatePoint; 4] {
        &self.states
    }

    /// Points per branch
    pub fn resolution(&self) -> usize {
        self.volume.len()
    }

    /// Index where the process arrows are drawn
    pub fn midpoint(&self) -> usize {
        self.resolution() / 2
    }

    pub fn polytropic_index(&self) -> f64 {
        self.polytropic_index
    }

    /// Specific volume grid shared by both isotherms [m³/kg]
    pub fn volume(&self) -> &Array1<f64> {
        &self.volume
    }

    /// Temperature grid shared by both isochores, from `Th` down to `Tc` [K]
    pub fn temperature(&self) -> &Array1<f64> {
        &self.temperature
    }

    /// Pressure along the `Th` isotherm [Pa]
    pub fn hot_pressure(&self) -> &Array1<f64> {
        &self.hot_pressure
    }

    /// Pressure along the `Tc` isotherm [Pa]
    pub fn cold_pressure(&self) -> &Array1<f64> {
        &self.cold_pressure
    }

    pub fn entropy_12(&self) -> &Array1<f64> {
        &self.entropy_12
    }

    pub fn entropy_23(&self) -> &Array1<f64> {
        &self.entropy_23
    }

    pub fn entropy_34(&self) -> &Array1<f64> {
        &self.entropy_34
    }

    pub fn entropy_41(&self) -> &Array1<f64> {
        &self.entropy_41
    }

    pub fn reference_volume(&self) -> &Array1<f64> {
        &self.reference_volume
    }

    pub fn hot_reference_pressure(&self) -> &Array1<f64> {
        &self.hot_reference_pressure
    }

    pub fn cold_reference_pressure(&self) -> &Array1<f64> {
        &self.cold_reference_pressure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::geometry::EngineGeometry;
    use crate::engine::json_reader::{JsonGas, JsonGeometry, JsonThermal};

    fn reference_cycle(resolution: usize) -> (IdealCycle, WorkingGas) {
        let gas = GasProperties::new(&JsonGas::default()).unwrap();
        let geometry = EngineGeometry::new(&JsonGeometry::default()).unwrap();
        let thermal = ThermalState::new(&JsonThermal::default()).unwrap();
        let working_gas = WorkingGas::new(&gas, &geometry, &thermal);
        let params = CycleParameters::new(&JsonCycle {
            resolution,
            ..JsonCycle::default()
        })
        .unwrap();
        (IdealCycle::new(&gas, &thermal, &working_gas, &params), working_gas)
    }

    #[test]
    fn branches_have_resolution_points() {
        let (cycle, _) = reference_cycle(100);
        assert_eq!(cycle.volume().len(), 100);
        assert_eq!(cycle.temperature().len(), 100);
        assert_eq!(cycle.entropy_34().len(), 100);
        assert_eq!(cycle.reference_volume().len(), 100);
        assert_eq!(cycle.midpoint(), 50);
    }

    #[test]
    fn state_points_sit_on_the_grids() {
        let (cycle, working_gas) = reference_cycle(100);
        assert_eq!(cycle.volume()[0], working_gas.V1());
        assert_eq!(cycle.volume()[99], working_gas.V2());
        assert_eq!(cycle.hot_pressure()[0], cycle.state(1).pressure);
        assert_eq!(cycle.cold_pressure()[0], cycle.state(4).pressure);
        assert_eq!(cycle.temperature()[0], cycle.state(1).temperature);
        assert_eq!(cycle.temperature()[99], cycle.state(3).temperature);
    }

    #[test]
    fn entropy_starts_at_reference_value() {
        let (cycle, _) = reference_cycle(100);
        assert_eq!(cycle.entropy_12()[0], REFERENCE_ENTROPY);
        assert_eq!(cycle.state(1).entropy, REFERENCE_ENTROPY);
    }

    #[test]
    fn each_branch_starts_where_the_previous_ended() {
        let (cycle, _) = reference_cycle(100);
        assert_eq!(cycle.entropy_23()[0], cycle.entropy_12()[99]);
        assert_eq!(cycle.entropy_34()[0], cycle.entropy_23()[99]);
        assert_eq!(cycle.entropy_41()[0], cycle.entropy_12()[0]);
    }

    #[test]
    fn cycle_closes_at_state_four() {
        let (cycle, _) = reference_cycle(100);
        let end_34 = cycle.entropy_34()[99];
        let end_41 = cycle.entropy_41()[99];
        assert!((end_34 - end_41).abs() < 1e-9, "{} != {}", end_34, end_41);
    }

    #[test]
    fn entropy_rises_on_heat_addition_and_falls_on_removal() {
        let (cycle, _) = reference_cycle(100);
        assert!(cycle.entropy_12()[99] > cycle.entropy_12()[0]);
        assert!(cycle.entropy_23()[99] < cycle.entropy_23()[0]);
        assert!(cycle.entropy_34()[99] < cycle.entropy_34()[0]);
        // the 4-1 grid runs from Th to Tc, so it reads backwards along the process
        assert!(cycle.entropy_41()[99] < cycle.entropy_41()[0]);
    }

    #[test]
    fn compression_branch_drops_by_isothermal_entropy() {
        let (cycle, _) = reference_cycle(100);
        let R = 287.0;
        let V1 = cycle.state(1).specific_volume;
        let V2 = cycle.state(2).specific_volume;
        let drop_34 = cycle.entropy_34()[0] - cycle.entropy_34()[99];
        assert!((drop_34 - R * (V2 / V1).ln()).abs() < 1e-9);
    }

    #[test]
    fn isotherms_keep_pv_constant() {
        let (cycle, _) = reference_cycle(100);
        let hot = cycle.state(1).pressure * cycle.state(1).specific_volume;
        let cold = cycle.state(4).pressure * cycle.state(4).specific_volume;
        for i in 0..100 {
            let v = cycle.volume()[i];
            assert!((cycle.hot_pressure()[i] * v - hot).abs() / hot < 1e-12);
            assert!((cycle.cold_pressure()[i] * v - cold).abs() / cold < 1e-12);
        }
    }

    #[test]
    fn too_coarse_resolution_is_rejected() {
        let info = JsonCycle {
            resolution: 2,
            ..JsonCycle::default()
        };
        assert!(matches!(
            CycleParameters::new(&info),
            Err(AnalysisError::InvalidResolution(_))
        ));
    }
}
