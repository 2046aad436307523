use crate::core::traits::Diagram;
use crate::measurement::samples::SampleSet;
use gnuplot::{
    AutoOption, Axes, Axes2D, AxesCommon, Caption, Color, LabelOption, TickOption, XAxis, YAxis,
};

/// Raw pressure and volume readings against time, pressure on the left axis and volume
/// on the right.
pub struct SensorTraces<'a> {
    samples: &'a SampleSet,
}

impl<'a> SensorTraces<'a> {
    pub fn new(samples: &'a SampleSet) -> SensorTraces<'a> {
        SensorTraces { samples }
    }
}

impl<'a> Diagram for SensorTraces<'a> {
    fn title(&self) -> &str {
        "Arduino data"
    }

    fn draw(&self, axes: &mut Axes2D) {
        let time = self.samples.time();
        axes.set_title(self.title(), &[])
            .set_x_label("time [s]", &[])
            .set_y_label("Pressure, P [kPa]", &[LabelOption::TextColor("red".into())])
            .set_y2_label("Volume change, ΔV [cm3]", &[LabelOption::TextColor("blue".into())])
            .set_y_ticks(
                Some((AutoOption::Auto, 0)),
                &[TickOption::Mirror(false)],
                &[LabelOption::TextColor("red".into())],
            )
            .set_y2_ticks(
                Some((AutoOption::Auto, 0)),
                &[TickOption::Mirror(false)],
                &[LabelOption::TextColor("blue".into())],
            )
            .lines(
                time.iter(),
                self.samples.pressure().iter(),
                &[Caption("Pressure, P [kPa]"), Color("red".into())],
            )
            .lines(
                time.iter(),
                self.samples.volume_change().iter(),
                &[
                    Caption("Volume change, ΔV [cm3]"),
                    Color("blue".into()),
                    Axes(XAxis::X1, YAxis::Y2),
                ],
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::samples::Sample;
    use gnuplot::Figure;

    #[test]
    fn draws_without_a_gnuplot_process() {
        let samples = SampleSet::new(vec![
            Sample { t: 0.0, Pmeas: 0.3, Vmeas: -0.2 },
            Sample { t: 0.1, Pmeas: -0.3, Vmeas: 0.2 },
        ])
        .unwrap();
        let traces = SensorTraces::new(&samples);
        let mut fg = Figure::new();
        traces.draw(fg.axes2d());
        assert_eq!(traces.title(), "Arduino data");
    }

    #[test]
    fn volume_axis_is_labelled() {
        let samples = SampleSet::new(vec![Sample { t: 0.0, Pmeas: 0.0, Vmeas: 0.0 }]).unwrap();
        let mut fg = Figure::new();
        SensorTraces::new(&samples).draw(fg.axes2d());
        let mut buffer: Vec<u8> = Vec::new();
        fg.echo(&mut buffer);
        let script = String::from_utf8_lossy(&buffer);
        assert!(script.contains("y2label"));
        assert!(script.contains("Volume change"));
    }
}
