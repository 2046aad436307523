pub mod analysis;
pub mod analysis_builder;
pub mod traits;
