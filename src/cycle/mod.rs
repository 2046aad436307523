//! Ideal Stirling cycle and the performance figures derived from it
pub mod ideal_cycle;
pub mod performance;
