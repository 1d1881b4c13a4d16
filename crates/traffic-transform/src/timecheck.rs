//! Per-pair flags over the time-span table.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;
use tracing::debug;

use traffic_model::schema;

use crate::column;
use crate::daytime;
use crate::error::Result;

/// Flag id pairs whose span rows fail to parse.
///
/// Each row's start day and start time are combined into one timestamp, and
/// the end side likewise. A pair maps to `true` when any of its rows has a
/// side that does not combine, `false` when every row parses cleanly. Keys
/// are `(id, id_2)` and iterate in ascending order.
///
/// This flags malformed span rows only. It does not verify that the spans
/// cover a full day or week.
pub fn time_check(df: &DataFrame) -> Result<BTreeMap<(i64, i64), bool>> {
    let ids = column::id_values(df, schema::ID)?;
    let id_2s = column::id_values(df, schema::ID_2)?;
    let start_days = column::string_values(df, schema::START_DAY)?;
    let start_times = column::string_values(df, schema::START_TIME)?;
    let end_days = column::string_values(df, schema::END_DAY)?;
    let end_times = column::string_values(df, schema::END_TIME)?;

    let mut flags: BTreeMap<(i64, i64), bool> = BTreeMap::new();
    let mut anomalous_rows = 0usize;
    for row in 0..df.height() {
        let start_ok = daytime::combine_day_time(&start_days[row], &start_times[row]).is_some();
        let end_ok = daytime::combine_day_time(&end_days[row], &end_times[row]).is_some();
        let anomalous = !(start_ok && end_ok);
        if anomalous {
            anomalous_rows += 1;
        }
        let flag = flags.entry((ids[row], id_2s[row])).or_insert(false);
        *flag |= anomalous;
    }

    debug!(groups = flags.len(), anomalous_rows, "checked time spans");
    Ok(flags)
}
