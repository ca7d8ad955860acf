//! Weight-metric selector shared by the router, planner and reports.
//!
//! The metric chooses which attribute of a route is summed and compared
//! during a query.  It never changes topology.

use std::str::FromStr;

use crate::CoreError;

/// Which route attribute a query optimises.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WeightMetric {
    /// Route length (km).
    #[default]
    Distance,
    /// Travel time (min).
    Time,
    /// Monetary cost ($).
    Cost,
}

impl WeightMetric {
    /// Every metric, in declaration order.
    pub const ALL: [WeightMetric; 3] = [WeightMetric::Distance, WeightMetric::Time, WeightMetric::Cost];

    /// Lower-case label, matching the accepted `FromStr` spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            WeightMetric::Distance => "distance",
            WeightMetric::Time     => "time",
            WeightMetric::Cost     => "cost",
        }
    }

    /// Unit suffix used in human-readable reports.
    pub fn unit(self) -> &'static str {
        match self {
            WeightMetric::Distance => "km",
            WeightMetric::Time     => "min",
            WeightMetric::Cost     => "$",
        }
    }
}

impl FromStr for WeightMetric {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" => Ok(WeightMetric::Distance),
            "time"     => Ok(WeightMetric::Time),
            "cost"     => Ok(WeightMetric::Cost),
            _ => Err(CoreError::UnknownMetric(s.to_owned())),
        }
    }
}

impl std::fmt::Display for WeightMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
