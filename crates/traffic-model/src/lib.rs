//! Vocabulary types for roadway count views.
//!
//! This crate owns the names and thresholds of the count dataset plus the
//! small enums views classify into. It carries no frame machinery so that
//! downstream crates can depend on the contract without pulling in polars.

pub mod band;
pub mod schema;

pub use band::VehicleBand;
