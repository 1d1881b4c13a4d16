//! Cell access shared by the views.
//!
//! Count and identifier columns are read strictly: a cell that cannot be
//! coerced fails with the column name and row position so callers can point
//! at the offending record. Text columns are read leniently, with null cells
//! mapped to empty strings, because the time-span views treat blank text as
//! meaningful input rather than as an error.

use polars::prelude::{AnyValue, Column, DataFrame};

use crate::error::{Result, TrafficError};

/// Fetch a required column, mapping the miss onto a domain error.
pub fn required<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| TrafficError::MissingColumn(name.to_string()))
}

/// Read a column as one f64 per row.
pub fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = required(df, name)?;
    let mut values = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let cell = column.get(row).unwrap_or(AnyValue::Null);
        match as_f64(cell) {
            Some(v) => values.push(v),
            None => {
                return Err(TrafficError::InvalidValue {
                    column: name.to_string(),
                    row,
                    expected: "a number",
                });
            }
        }
    }
    Ok(values)
}

/// Read a column as one integer identifier per row.
pub fn id_values(df: &DataFrame, name: &str) -> Result<Vec<i64>> {
    let column = required(df, name)?;
    let mut values = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let cell = column.get(row).unwrap_or(AnyValue::Null);
        match as_i64(cell) {
            Some(v) => values.push(v),
            None => {
                return Err(TrafficError::InvalidValue {
                    column: name.to_string(),
                    row,
                    expected: "an integer id",
                });
            }
        }
    }
    Ok(values)
}

/// Read a column as one string per row, with null cells as empty strings.
pub fn string_values(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = required(df, name)?;
    let mut values = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let cell = column.get(row).unwrap_or(AnyValue::Null);
        values.push(as_string(cell));
    }
    Ok(values)
}

fn as_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => s.trim().parse::<f64>().ok(),
        AnyValue::StringOwned(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn as_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Int8(v) => Some(i64::from(v)),
        AnyValue::Int16(v) => Some(i64::from(v)),
        AnyValue::Int32(v) => Some(i64::from(v)),
        AnyValue::Int64(v) => Some(v),
        AnyValue::UInt8(v) => Some(i64::from(v)),
        AnyValue::UInt16(v) => Some(i64::from(v)),
        AnyValue::UInt32(v) => Some(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).ok(),
        AnyValue::Float32(v) => Some(v as i64),
        AnyValue::Float64(v) => Some(v as i64),
        AnyValue::String(s) => s.trim().parse::<i64>().ok(),
        AnyValue::StringOwned(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn as_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    fn frame_with(name: &str, values: Vec<&str>) -> DataFrame {
        let column: Column = Series::new(name.into(), values).into();
        DataFrame::new(vec![column]).unwrap()
    }

    #[test]
    fn numeric_values_parses_numeric_strings() {
        let df = frame_with("car", vec!["10", " 2.5 "]);
        assert_eq!(numeric_values(&df, "car").unwrap(), vec![10.0, 2.5]);
    }

    #[test]
    fn numeric_values_reports_offending_row() {
        let df = frame_with("car", vec!["10", "lots"]);
        let err = numeric_values(&df, "car").unwrap_err();
        assert!(matches!(
            err,
            TrafficError::InvalidValue { row: 1, .. }
        ));
    }

    #[test]
    fn missing_column_is_a_domain_error() {
        let df = frame_with("car", vec!["10"]);
        let err = numeric_values(&df, "bus").unwrap_err();
        assert!(matches!(err, TrafficError::MissingColumn(name) if name == "bus"));
    }

    #[test]
    fn string_values_map_null_to_empty() {
        let series = Series::new("startDay".into(), vec![Some("Monday"), None]);
        let df = DataFrame::new(vec![series.into()]).unwrap();
        assert_eq!(
            string_values(&df, "startDay").unwrap(),
            vec!["Monday".to_string(), String::new()]
        );
    }
}
