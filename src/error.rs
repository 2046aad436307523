//! Error type shared by every stage of the analysis.

/// Errors that can occur while loading rig data or deriving the cycle.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// I/O error reading the measurement or rig file
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited measurement file could not be parsed
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Rig file could not be parsed
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Measurement file lacks one of `t`, `Pmeas`, `Vmeas`
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Measurement file contains no samples")]
    EmptyData,

    #[error("Invalid engine geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid thermal state: {0}")]
    InvalidThermalState(String),

    #[error("Invalid gas properties: {0}")]
    InvalidGas(String),

    #[error("Invalid resolution: {0}")]
    InvalidResolution(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
