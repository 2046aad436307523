//! Contains **WorkingGas**, the gas properties and the reservoir temperatures
pub mod thermal_state;
pub mod working_gas;
