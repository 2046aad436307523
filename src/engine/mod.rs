//! Contains **EngineGeometry** and the rig description read from `.json` files
pub mod geometry;
pub mod json_reader;
