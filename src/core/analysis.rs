use super::traits::Diagram;
use crate::cycle::ideal_cycle::{CycleParameters, IdealCycle};
use crate::cycle::performance::CyclePerformance;
use crate::engine::geometry::EngineGeometry;
use crate::engine::json_reader::RigConfig;
use crate::error::Result;
use crate::gas::thermal_state::ThermalState;
use crate::gas::working_gas::{GasProperties, WorkingGas};
use crate::measurement::measured_series::MeasuredSeries;
use crate::measurement::samples::SampleSet;
use crate::plotting;
use crate::plotting::pv_diagram::{MeasuredPvDiagram, PvDiagram};
use crate::plotting::sensor_traces::SensorTraces;
use crate::plotting::ts_diagram::TsDiagram;
use ansi_term::Style;
use log::info;

/// One complete run: rig constants, the ideal cycle they define and the measured data
/// in the same units. Everything is derived once, in dependency order, by `new`.
pub struct Analysis {
    geometry: EngineGeometry,
    gas: GasProperties,
    thermal: ThermalState,
    working_gas: WorkingGas,
    params: CycleParameters,
    cycle: IdealCycle,
    samples: SampleSet,
    series: MeasuredSeries,
    performance: CyclePerformance,
}

impl Analysis {
    pub fn new(rig: &RigConfig, samples: SampleSet) -> Result<Analysis> {
        // constants of the rig
        let geometry = EngineGeometry::new(&rig.geometry)?;
        let gas = GasProperties::new(&rig.gas)?;
        let thermal = ThermalState::new(&rig.thermal)?;
        let params = CycleParameters::new(&rig.cycle)?;
        info!("engine geometry: {}", geometry);

        // mass of air
        let working_gas = WorkingGas::new(&gas, &geometry, &thermal);
        info!(
            "specific volumes: V1 = {:.5} m³/kg, V2 = {:.5} m³/kg",
            working_gas.V1(),
            working_gas.V2()
        );

        // ideal cycle
        let cycle = IdealCycle::new(&gas, &thermal, &working_gas, &params);
        info!(
            "ideal cycle: {} points per branch, n = {}",
            cycle.resolution(),
            cycle.polytropic_index()
        );

        // measured data
        let series = MeasuredSeries::new(
            &samples,
            &geometry,
            &gas,
            &thermal,
            &working_gas,
            cycle.state(1).entropy,
        );
        info!("converted {} samples", series.len());

        let performance = CyclePerformance::new(&cycle, &gas, &thermal, &working_gas, &series);
        info!(
            "ideal net work {:.3} J/kg, indicated work {:.3} J/kg",
            performance.net_work(),
            performance.indicated_work()
        );

        Ok(Analysis {
            geometry,
            gas,
            thermal,
            working_gas,
            params,
            cycle,
            samples,
            series,
            performance,
        })
    }

    /// The four figures of the run, in display order.
    pub fn diagrams(&self) -> Vec<Box<dyn Diagram + '_>> {
        vec![
            Box::new(SensorTraces::new(&self.samples)),
            Box::new(MeasuredPvDiagram::new(&self.series)),
            Box::new(PvDiagram::new(&self.cycle, &self.series)),
            Box::new(TsDiagram::new(&self.cycle, &self.series)),
        ]
    }

    /// Opens a gnuplot window per figure.
    pub fn plot(&self) {
        plotting::show(&self.diagrams());
    }

    pub fn geometry(&self) -> &EngineGeometry {
        &self.geometry
    }

    pub fn gas(&self) -> &GasProperties {
        &self.gas
    }

    pub fn thermal(&self) -> &ThermalState {
        &self.thermal
    }

    pub fn working_gas(&self) -> &WorkingGas {
        &self.working_gas
    }

    pub fn params(&self) -> &CycleParameters {
        &self.params
    }

    pub fn cycle(&self) -> &IdealCycle {
        &self.cycle
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn series(&self) -> &MeasuredSeries {
        &self.series
    }

    pub fn performance(&self) -> &CyclePerformance {
        &self.performance
    }
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", Style::new().bold().paint("Stirling cycle analysis"))?;
        writeln!(f, "{}", Style::new().underline().paint("Rig"))?;
        writeln!(f, "  Th: {:.2} [K]\tTc: {:.2} [K]\tPatm: {} [Pa]", self.thermal.hot(), self.thermal.cold(), self.thermal.atmospheric_pressure())?;
        writeln!(f, "  {}", self.geometry)?;
        writeln!(f, "  mass of air: {:.6e} [kg]", self.working_gas.mass())?;
        writeln!(f, "  samples: {}", self.samples.len())?;
        writeln!(f, "{}", Style::new().underline().paint("State points"))?;
        for state in self.cycle.states().iter() {
            writeln!(f, "  {}", state)?;
        }
        write!(f, "{}", self.performance)
    }
}
