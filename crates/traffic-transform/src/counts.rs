//! Banded summary of the car column.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;

use traffic_model::VehicleBand;
use traffic_model::schema;

use crate::column;
use crate::error::Result;

/// Count rows per vehicle band of the car column.
///
/// Keys are the band labels and iterate alphabetically. A band no row falls
/// into is absent rather than present with a zero count, so the counts
/// always sum to the table height.
pub fn get_type_count(df: &DataFrame) -> Result<BTreeMap<String, usize>> {
    let cars = column::numeric_values(df, schema::CAR)?;
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for car in cars {
        let band = VehicleBand::classify(car);
        *counts.entry(band.as_str().to_string()).or_insert(0) += 1;
    }
    Ok(counts)
}
