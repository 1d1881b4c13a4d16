//! Tests for the banded count and filter views.

use polars::prelude::*;
use traffic_transform::{TrafficError, filter_routes, get_bus_indexes, get_type_count};

fn car_frame(cars: Vec<f64>) -> DataFrame {
    DataFrame::new(vec![Series::new("car".into(), cars).into()]).unwrap()
}

fn bus_frame(buses: Vec<f64>) -> DataFrame {
    DataFrame::new(vec![Series::new("bus".into(), buses).into()]).unwrap()
}

fn route_frame(routes: Vec<&str>, trucks: Vec<f64>) -> DataFrame {
    DataFrame::new(vec![
        Series::new("route".into(), routes).into(),
        Series::new("truck".into(), trucks).into(),
    ])
    .unwrap()
}

#[test]
fn test_type_count_bands_and_orders_keys() {
    let df = car_frame(vec![5.0, 15.0, 20.0, 25.0, 30.0, 14.9]);
    let counts = get_type_count(&df).unwrap();

    assert_eq!(counts.get("low"), Some(&2)); // 5, 14.9
    assert_eq!(counts.get("medium"), Some(&2)); // 15, 20
    assert_eq!(counts.get("high"), Some(&2)); // 25, 30
    assert_eq!(counts.values().sum::<usize>(), df.height());

    let keys: Vec<&str> = counts.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["high", "low", "medium"]);
}

#[test]
fn test_type_count_omits_empty_bands() {
    let df = car_frame(vec![30.0, 40.0]);
    let counts = get_type_count(&df).unwrap();

    assert_eq!(counts.len(), 1);
    assert_eq!(counts.get("high"), Some(&2));
    assert!(!counts.contains_key("low"));
    assert!(!counts.contains_key("medium"));
}

#[test]
fn test_type_count_empty_table() {
    let counts = get_type_count(&car_frame(Vec::new())).unwrap();
    assert!(counts.is_empty());
}

#[test]
fn test_type_count_requires_car_column() {
    let df = bus_frame(vec![1.0]);
    let err = get_type_count(&df).unwrap_err();
    assert!(matches!(err, TrafficError::MissingColumn(name) if name == "car"));
}

#[test]
fn test_bus_indexes_flags_rows_above_twice_mean() {
    // mean 26.5, cutoff 53
    let df = bus_frame(vec![1.0, 2.0, 3.0, 100.0]);
    assert_eq!(get_bus_indexes(&df).unwrap(), vec![3]);
}

#[test]
fn test_bus_indexes_ascend() {
    // mean 34, cutoff 68
    let df = bus_frame(vec![100.0, 1.0, 1.0, 100.0, 1.0, 1.0]);
    assert_eq!(get_bus_indexes(&df).unwrap(), vec![0, 3]);
}

#[test]
fn test_bus_indexes_empty_when_counts_uniform() {
    let df = bus_frame(vec![5.0, 5.0, 5.0]);
    assert!(get_bus_indexes(&df).unwrap().is_empty());
}

#[test]
fn test_bus_indexes_empty_table() {
    let df = bus_frame(Vec::new());
    assert!(get_bus_indexes(&df).unwrap().is_empty());
}

#[test]
fn test_filter_routes_keeps_means_strictly_above_seven() {
    let df = route_frame(
        vec!["A", "A", "B", "C", "D"],
        vec![8.0, 9.0, 5.0, 7.0, 7.1],
    );

    // A averages 8.5, D 7.1; C sits exactly at 7 and is excluded.
    assert_eq!(filter_routes(&df).unwrap(), vec!["A", "D"]);
}

#[test]
fn test_filter_routes_sorts_labels() {
    let df = route_frame(vec!["zeta", "alpha", "zeta"], vec![9.0, 8.0, 10.0]);
    assert_eq!(filter_routes(&df).unwrap(), vec!["alpha", "zeta"]);
}

#[test]
fn test_filter_routes_requires_route_column() {
    let df = bus_frame(vec![1.0]);
    let err = filter_routes(&df).unwrap_err();
    assert!(matches!(err, TrafficError::MissingColumn(name) if name == "route"));
}

#[test]
fn test_filter_routes_empty_table() {
    let df = route_frame(Vec::new(), Vec::new());
    assert!(filter_routes(&df).unwrap().is_empty());
}
