use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle band derived from a row's car count.
///
/// Bands partition the count axis at the fixed cut points 15 and 25 with
/// left-closed/right-open intervals, so a count sitting exactly on a cut
/// point belongs to the upper band: 15 is `medium` and 25 is `high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleBand {
    /// car < 15
    Low,
    /// 15 <= car < 25
    Medium,
    /// car >= 25
    High,
}

impl VehicleBand {
    /// Cut point between `low` and `medium`.
    pub const LOW_MEDIUM_CUT: f64 = 15.0;
    /// Cut point between `medium` and `high`.
    pub const MEDIUM_HIGH_CUT: f64 = 25.0;

    /// Classify a car count into its band.
    pub fn classify(car: f64) -> Self {
        if car < Self::LOW_MEDIUM_CUT {
            VehicleBand::Low
        } else if car < Self::MEDIUM_HIGH_CUT {
            VehicleBand::Medium
        } else {
            VehicleBand::High
        }
    }

    /// Returns the band label as it appears in view outputs.
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleBand::Low => "low",
            VehicleBand::Medium => "medium",
            VehicleBand::High => "high",
        }
    }
}

impl fmt::Display for VehicleBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VehicleBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(VehicleBand::Low),
            "medium" => Ok(VehicleBand::Medium),
            "high" => Ok(VehicleBand::High),
            _ => Err(format!("unknown vehicle band: {s}")),
        }
    }
}
