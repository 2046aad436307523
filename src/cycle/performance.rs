#![allow(non_snake_case)]

use crate::cycle::ideal_cycle::IdealCycle;
use crate::gas::thermal_state::ThermalState;
use crate::gas::working_gas::{GasProperties, WorkingGas};
use crate::measurement::measured_series::MeasuredSeries;
use crate::numerics::sequences::closed_loop_integral;
use ansi_term::Style;

/// Work and heat per unit mass of the ideal cycle, plus the work enclosed by the
/// measured loop.
#[derive(Debug, Clone)]
pub struct CyclePerformance {
    heat_added_12: f64,      // [J/kg] - isothermal expansion
    heat_rejected_34: f64,   // [J/kg] - isothermal compression
    heat_regenerated: f64,   // [J/kg] - isochoric 4-1, equal to the 2-3 rejection
    carnot_efficiency: f64,  // [-]
    indicated_work: f64,     // [J/kg]
    mass: f64,               // [kg]
}

impl CyclePerformance {
    pub fn new(
        cycle: &IdealCycle,
        gas: &GasProperties,
        thermal: &ThermalState,
        working_gas: &WorkingGas,
        series: &MeasuredSeries,
    ) -> CyclePerformance {
        let R = gas.R();
        let V1 = cycle.state(1).specific_volume;
        let V2 = cycle.state(2).specific_volume;
        let ratio = (V2 / V1).ln();
        CyclePerformance {
            heat_added_12: R * thermal.hot() * ratio,
            heat_rejected_34: R * thermal.cold() * ratio,
            heat_regenerated: gas.cv() * (thermal.hot() - thermal.cold()),
            carnot_efficiency: thermal.carnot_efficiency(),
            indicated_work: closed_loop_integral(series.specific_volume(), series.pressure()),
            mass: working_gas.mass(),
        }
    }

    /// Net specific work of the ideal cycle [J/kg]
    pub fn net_work(&self) -> f64 {
        self.heat_added_12 - self.heat_rejected_34
    }

    pub fn heat_added(&self) -> f64 {
        self.heat_added_12
    }

    pub fn heat_rejected(&self) -> f64 {
        self.heat_rejected_34
    }

    pub fn heat_regenerated(&self) -> f64 {
        self.heat_regenerated
    }

    /// Thermal efficiency when the isochoric heat comes from the source
    pub fn efficiency_without_regenerator(&self) -> f64 {
        self.net_work() / (self.heat_added_12 + self.heat_regenerated)
    }

    /// Thermal efficiency with a perfect regenerator, equal to Carnot
    pub fn efficiency_with_regenerator(&self) -> f64 {
        self.net_work() / self.heat_added_12
    }

    pub fn carnot_efficiency(&self) -> f64 {
        self.carnot_efficiency
    }

    /// `∮ P dv` over the measured trace [J/kg]
    pub fn indicated_work(&self) -> f64 {
        self.indicated_work
    }

    /// Indicated work of the trapped gas over the recorded trace [J]
    pub fn indicated_work_total(&self) -> f64 {
        self.indicated_work * self.mass
    }
}

impl std::fmt::Display for CyclePerformance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", Style::new().underline().paint("Ideal cycle"))?;
        writeln!(f, "  net work:          {:.3} [J/kg]", self.net_work())?;
        writeln!(f, "  heat added (1-2):  {:.3} [J/kg]", self.heat_added_12)?;
        writeln!(f, "  heat rejected:     {:.3} [J/kg]", self.heat_rejected_34)?;
        writeln!(f, "  regenerated heat:  {:.3} [J/kg]", self.heat_regenerated)?;
        writeln!(f, "  efficiency, no regenerator:    {:.4}", self.efficiency_without_regenerator())?;
        writeln!(f, "  efficiency, ideal regenerator: {:.4}", self.efficiency_with_regenerator())?;
        writeln!(f, "  Carnot efficiency:             {:.4}", self.carnot_efficiency)?;
        writeln!(f, "{}", Style::new().underline().paint("Measured trace"))?;
        writeln!(f, "  indicated work:    {:.3} [J/kg]", self.indicated_work)?;
        write!(f, "  indicated work:    {:.6e} [J]", self.indicated_work_total())
    }
}
