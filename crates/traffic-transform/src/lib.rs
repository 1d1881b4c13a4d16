//! Pure in-memory views over roadway count tables.
//!
//! Every view borrows a polars [`DataFrame`](polars::prelude::DataFrame)
//! holding the raw count records and returns a fresh value. Nothing here
//! mutates the input, touches disk, or prints; callers own ingestion and
//! presentation.
//!
//! The views:
//!
//! - [`generate_car_matrix`]: pivot car counts into a square id-pair matrix
//! - [`get_type_count`]: count rows per car-count band
//! - [`get_bus_indexes`]: row positions with unusually high bus counts
//! - [`filter_routes`]: routes whose mean truck count clears a threshold
//! - [`multiply_matrix`]: rescale a matrix without touching the original
//! - [`time_check`]: flag id pairs whose time-span rows fail to parse
//!
//! Column names and thresholds live in [`traffic_model::schema`].

pub mod column;
pub mod counts;
pub mod daytime;
pub mod error;
pub mod filters;
pub mod matrix;
pub mod timecheck;

pub use counts::get_type_count;
pub use daytime::combine_day_time;
pub use error::{Result, TrafficError};
pub use filters::{filter_routes, get_bus_indexes};
pub use matrix::{PairMatrix, generate_car_matrix, multiply_matrix};
pub use timecheck::time_check;
