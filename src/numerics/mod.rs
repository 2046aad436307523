//! Discretization helpers shared by the cycle and measurement stages
pub mod sequences;
