#![allow(non_snake_case)]

use crate::core::traits::Diagram;
use crate::cycle::ideal_cycle::IdealCycle;
use crate::measurement::measured_series::MeasuredSeries;
use crate::plotting::{annotate, process_arrow, Anchor, KILO};
use gnuplot::{Axes2D, AxesCommon, Color, DashType, LineStyle, PointSize, PointSymbol};

const X_LABEL: &str = "Volume, ν [m3/kg]";
const Y_LABEL: &str = "Pressure, P [kPa]";

/// Measured specific volume against absolute pressure, one point per sample.
pub struct MeasuredPvDiagram<'a> {
    series: &'a MeasuredSeries,
}

impl<'a> MeasuredPvDiagram<'a> {
    pub fn new(series: &'a MeasuredSeries) -> MeasuredPvDiagram<'a> {
        MeasuredPvDiagram { series }
    }
}

impl<'a> Diagram for MeasuredPvDiagram<'a> {
    fn title(&self) -> &str {
        "P-V diagram of Arduino data"
    }

    fn draw(&self, axes: &mut Axes2D) {
        axes.set_title(self.title(), &[])
            .set_x_label(X_LABEL, &[])
            .set_y_label(Y_LABEL, &[])
            .points(
                self.series.specific_volume().iter(),
                self.series.pressure().iter().map(|p| p / KILO),
                &[PointSymbol('.'), Color("#1f77b4".into())],
            );
    }
}

/// Ideal cycle in the P-v plane with its extended isotherms, state numbers and process
/// arrows, and the measured loop on top.
pub struct PvDiagram<'a> {
    cycle: &'a IdealCycle,
    series: &'a MeasuredSeries,
}

impl<'a> PvDiagram<'a> {
    pub fn new(cycle: &'a IdealCycle, series: &'a MeasuredSeries) -> PvDiagram<'a> {
        PvDiagram { cycle, series }
    }
}

impl<'a> Diagram for PvDiagram<'a> {
    fn title(&self) -> &str {
        "P-V diagram"
    }

    fn draw(&self, axes: &mut Axes2D) {
        let cycle = self.cycle;
        let mid = cycle.midpoint();
        let V = cycle.volume();
        let Ph = cycle.hot_pressure().mapv(|p| p / KILO);
        let Pc = cycle.cold_pressure().mapv(|p| p / KILO);
        let s1 = cycle.state(1);
        let s2 = cycle.state(2);
        let s3 = cycle.state(3);
        let s4 = cycle.state(4);
        let (P1, P2, P3, P4) = (s1.pressure / KILO, s2.pressure / KILO, s3.pressure / KILO, s4.pressure / KILO);

        axes.set_title(self.title(), &[])
            .set_x_label(X_LABEL, &[])
            .set_y_label(Y_LABEL, &[])
            .lines(V.iter(), Ph.iter(), &[Color("red".into())])
            .lines_points(
                [s2.specific_volume, s3.specific_volume].iter(),
                [P2, P3].iter(),
                &[Color("black".into()), PointSymbol('O'), PointSize(0.8)],
            )
            .lines(V.iter(), Pc.iter(), &[Color("blue".into())])
            .lines_points(
                [s4.specific_volume, s1.specific_volume].iter(),
                [P4, P1].iter(),
                &[Color("black".into()), PointSymbol('O'), PointSize(0.8)],
            );

        // process arrows
        process_arrow(axes, (V[mid - 1], Ph[mid - 1]), (V[mid], Ph[mid]), "red");
        let mid_23 = (P2 + P3) / 2.0;
        process_arrow(axes, (s2.specific_volume, mid_23 * 1.01), (s2.specific_volume, mid_23), "black");
        process_arrow(axes, (V[mid + 1], Pc[mid + 1]), (V[mid], Pc[mid]), "blue");
        let mid_41 = (P1 + P4) / 2.0;
        process_arrow(axes, (s1.specific_volume, mid_41 * 0.99), (s1.specific_volume, mid_41), "black");

        // isotherms
        let Vref = cycle.reference_volume();
        axes.lines(
            Vref.iter(),
            cycle.hot_reference_pressure().iter().map(|p| p / KILO),
            &[Color("red".into()), LineStyle(DashType::Dash)],
        )
        .lines(
            Vref.iter(),
            cycle.cold_reference_pressure().iter().map(|p| p / KILO),
            &[Color("blue".into()), LineStyle(DashType::Dash)],
        );

        // text labels
        annotate(axes, "1", (s1.specific_volume, P1), Anchor::LeftAbove, "black");
        annotate(axes, "2", (s2.specific_volume, P2), Anchor::RightAbove, "black");
        annotate(axes, "3", (s3.specific_volume, P3), Anchor::RightBelow, "black");
        annotate(axes, "4", (s4.specific_volume, P4), Anchor::LeftBelow, "black");
        annotate(axes, "T_h", (V[mid], Ph[mid]), Anchor::CenterAbove, "red");
        annotate(axes, "T_c", (V[mid], Pc[mid]), Anchor::CenterAbove, "blue");

        // measured loop
        axes.lines(
            self.series.specific_volume().iter(),
            self.series.pressure().iter().map(|p| p / KILO),
            &[Color("green".into())],
        );
    }
}
