//! Row and route filters over the count table.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;
use tracing::debug;

use traffic_model::schema;

use crate::column;
use crate::error::Result;

/// Row positions whose bus count strictly exceeds twice the column mean.
///
/// Positions are zero based and ascend. An empty table has no mean and
/// yields no positions.
pub fn get_bus_indexes(df: &DataFrame) -> Result<Vec<usize>> {
    let buses = column::numeric_values(df, schema::BUS)?;
    if buses.is_empty() {
        return Ok(Vec::new());
    }

    let mean = buses.iter().sum::<f64>() / buses.len() as f64;
    let cutoff = schema::BUS_MEAN_MULTIPLIER * mean;
    debug!(mean, cutoff, "scanning bus column for spikes");

    Ok(buses
        .iter()
        .enumerate()
        .filter(|&(_, &bus)| bus > cutoff)
        .map(|(row, _)| row)
        .collect())
}

/// Route labels whose mean truck count strictly exceeds the threshold.
///
/// Every row of a route contributes to its mean. Labels come back sorted
/// and each appears once however many rows carried it.
pub fn filter_routes(df: &DataFrame) -> Result<Vec<String>> {
    let routes = column::string_values(df, schema::ROUTE)?;
    let trucks = column::numeric_values(df, schema::TRUCK)?;

    let mut totals: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for (route, truck) in routes.into_iter().zip(trucks) {
        let entry = totals.entry(route).or_insert((0.0, 0));
        entry.0 += truck;
        entry.1 += 1;
    }

    let mut kept = Vec::new();
    for (route, (sum, rows)) in totals {
        if sum / rows as f64 > schema::ROUTE_TRUCK_MEAN_THRESHOLD {
            kept.push(route);
        }
    }
    Ok(kept)
}
