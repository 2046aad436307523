#![allow(non_snake_case)]

use crate::core::traits::Diagram;
use crate::cycle::ideal_cycle::IdealCycle;
use crate::gas::thermal_state::CELSIUS_TO_KELVIN;
use crate::measurement::measured_series::MeasuredSeries;
use crate::plotting::{annotate, process_arrow, Anchor, KILO};
use gnuplot::{Axes2D, AxesCommon, Color, PointSize, PointSymbol};

/// Ideal cycle in the T-s plane, in `°C` against `kJ/(kg.K)`, with the measured
/// temperature/entropy trace on top.
pub struct TsDiagram<'a> {
    cycle: &'a IdealCycle,
    series: &'a MeasuredSeries,
}

impl<'a> TsDiagram<'a> {
    pub fn new(cycle: &'a IdealCycle, series: &'a MeasuredSeries) -> TsDiagram<'a> {
        TsDiagram { cycle, series }
    }
}

impl<'a> Diagram for TsDiagram<'a> {
    fn title(&self) -> &str {
        "T-s diagram"
    }

    fn draw(&self, axes: &mut Axes2D) {
        let cycle = self.cycle;
        let num = cycle.resolution();
        let mid = cycle.midpoint();
        let S12 = cycle.entropy_12().mapv(|s| s / KILO);
        let S23 = cycle.entropy_23().mapv(|s| s / KILO);
        let S34 = cycle.entropy_34().mapv(|s| s / KILO);
        let S41 = cycle.entropy_41().mapv(|s| s / KILO);
        let T = cycle.temperature().mapv(|t| t - CELSIUS_TO_KELVIN);
        let Th = cycle.state(1).temperature - CELSIUS_TO_KELVIN;
        let Tc = cycle.state(3).temperature - CELSIUS_TO_KELVIN;

        axes.set_title(self.title(), &[])
            .set_x_label("Entropy, s [kJ/kg.K]", &[])
            .set_y_label("Temperature, T [°C]", &[])
            .lines_points(
                [S12[0], S12[num - 1]].iter(),
                [Th, Th].iter(),
                &[Color("red".into()), PointSymbol('O'), PointSize(0.8)],
            )
            .lines(S23.iter(), T.iter(), &[Color("black".into())])
            .lines_points(
                [S34[0], S34[num - 1]].iter(),
                [Tc, Tc].iter(),
                &[Color("blue".into()), PointSymbol('O'), PointSize(0.8)],
            )
            .lines(S41.iter(), T.iter(), &[Color("black".into())]);

        // process arrows
        process_arrow(axes, (S12[mid - 1], Th), (S12[mid], Th), "red");
        process_arrow(axes, (S23[mid - 1], T[mid - 1]), (S23[mid], T[mid]), "black");
        process_arrow(axes, (S34[mid - 1], Tc), (S34[mid], Tc), "blue");
        // the shared grid runs Th -> Tc, against the direction of 4-1
        process_arrow(axes, (S41[mid + 1], T[mid + 1]), (S41[mid], T[mid]), "black");

        // text labels
        annotate(axes, "1", (S12[0], Th), Anchor::LeftAbove, "black");
        annotate(axes, "2", (S23[0], Th), Anchor::RightAbove, "black");
        annotate(axes, "3", (S34[0], Tc), Anchor::RightBelow, "black");
        annotate(axes, "4", (S41[num - 1], Tc), Anchor::LeftBelow, "black");
        annotate(axes, "T_h", (S12[mid], Th), Anchor::CenterAbove, "red");
        annotate(axes, "T_c", (S34[mid], Tc), Anchor::CenterAbove, "blue");

        // measured trace
        axes.lines(
            self.series.entropy().iter().map(|s| s / KILO),
            self.series.temperature().iter().map(|t| t - CELSIUS_TO_KELVIN),
            &[Color("green".into())],
        );
    }
}
