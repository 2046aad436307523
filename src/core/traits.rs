use gnuplot::Axes2D;

/// A figure of the run. Each diagram is drawn on its own set of axes and shown in its
/// own gnuplot window.
pub trait Diagram {
    fn title(&self) -> &str;
    fn draw(&self, axes: &mut Axes2D);
}
