//! gnuplot figures: raw sensor traces, measured P-V, and the ideal P-V and T-s diagrams
//! with the measured loop laid over them
pub mod pv_diagram;
pub mod sensor_traces;
pub mod ts_diagram;

use crate::core::traits::Diagram;
use gnuplot::{
    AlignType, ArrowSize, ArrowType, ArrowheadType, Axes2D, AxesCommon, Color, Coordinate,
    Figure, LabelOption, LineWidth,
};
use log::{debug, warn};

/// Pa per kPa, and J per kJ
pub(crate) const KILO: f64 = 1000.0;

/// One figure per diagram, drawn but not yet shown.
pub fn figures(diagrams: &[Box<dyn Diagram + '_>]) -> Vec<Figure> {
    diagrams
        .iter()
        .map(|diagram| {
            let mut fg = Figure::new();
            diagram.draw(fg.axes2d());
            fg
        })
        .collect()
}

/// Opens every diagram in its own window at once and returns when all of them are closed.
/// A window that fails to open is logged and skipped; the remaining diagrams are still shown.
pub fn show(diagrams: &[Box<dyn Diagram + '_>]) {
    let mut figures = figures(diagrams);
    // each sentinel blocks on drop until its window is closed
    let mut open = Vec::with_capacity(figures.len());
    for (diagram, fg) in diagrams.iter().zip(figures.iter_mut()) {
        debug!("showing '{}'", diagram.title());
        match fg.show() {
            Ok(sentinel) => open.push(sentinel),
            Err(err) => warn!("unable to show '{}': {}", diagram.title(), err),
        }
    }
    debug!("{} windows open", open.len());
}

/// Filled arrow head pointing along a process, from `from` to `to` in axis coordinates
pub(crate) fn process_arrow(axes: &mut Axes2D, from: (f64, f64), to: (f64, f64), color: &str) {
    axes.arrow(
        Coordinate::Axis(from.0),
        Coordinate::Axis(from.1),
        Coordinate::Axis(to.0),
        Coordinate::Axis(to.1),
        &[
            ArrowType(ArrowheadType::Filled),
            ArrowSize(0.02),
            LineWidth(1.5),
            Color(color.into()),
        ],
    );
}

/// Where a label sits relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Anchor {
    LeftAbove,
    RightAbove,
    LeftBelow,
    RightBelow,
    CenterAbove,
}

pub(crate) fn annotate(axes: &mut Axes2D, text: &str, at: (f64, f64), anchor: Anchor, color: &str) {
    let (align, x_offset, y_offset) = match anchor {
        Anchor::LeftAbove => (AlignType::AlignRight, -0.5, 0.6),
        Anchor::RightAbove => (AlignType::AlignLeft, 0.5, 0.6),
        Anchor::LeftBelow => (AlignType::AlignRight, -0.5, -0.6),
        Anchor::RightBelow => (AlignType::AlignLeft, 0.5, -0.6),
        Anchor::CenterAbove => (AlignType::AlignCenter, 0.0, 0.6),
    };
    axes.label(
        text,
        Coordinate::Axis(at.0),
        Coordinate::Axis(at.1),
        &[
            LabelOption::TextAlign(align),
            LabelOption::TextOffset(x_offset, y_offset),
            LabelOption::TextColor(color.into()),
        ],
    );
}
