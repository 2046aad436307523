//! Contains **SampleSet**, the raw rig readings, and **MeasuredSeries**, the same readings in
//! thermodynamic units
pub mod measured_series;
pub mod samples;
