//! Column names and thresholds shared by every roadway count view.
//!
//! The names match the source dataset headers verbatim, including the
//! camelCase time-span columns. Treat both the names and the numeric
//! thresholds as part of the public contract.

/// First toll-location identifier column.
pub const ID_1: &str = "id_1";
/// Second toll-location identifier column.
pub const ID_2: &str = "id_2";
/// Car count column.
pub const CAR: &str = "car";
/// Bus count column.
pub const BUS: &str = "bus";
/// Truck count column.
pub const TRUCK: &str = "truck";
/// Route label column.
pub const ROUTE: &str = "route";
/// Span identifier column used by the time-span table.
pub const ID: &str = "id";
/// Weekday or date on which a span opens.
pub const START_DAY: &str = "startDay";
/// Clock time at which a span opens.
pub const START_TIME: &str = "startTime";
/// Weekday or date on which a span closes.
pub const END_DAY: &str = "endDay";
/// Clock time at which a span closes.
pub const END_TIME: &str = "endTime";

/// A bus count is flagged when it exceeds this multiple of the column mean.
pub const BUS_MEAN_MULTIPLIER: f64 = 2.0;
/// A route is kept when its mean truck count strictly exceeds this value.
pub const ROUTE_TRUCK_MEAN_THRESHOLD: f64 = 7.0;
/// Matrix cells strictly above this value are scaled down, the rest up.
pub const RESCALE_CUT: f64 = 20.0;
/// Scale factor applied to cells above [`RESCALE_CUT`].
pub const RESCALE_DOWN: f64 = 0.75;
/// Scale factor applied to cells at or below [`RESCALE_CUT`].
pub const RESCALE_UP: f64 = 1.25;
