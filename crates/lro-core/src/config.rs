//! Planner configuration.

use crate::WeightMetric;

/// Options applied to every multi-stop planning request.
///
/// Typically loaded from a TOML/JSON file by the application crate (with the
/// `serde` feature) and handed to the planner or routing service.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Metric optimised when a request does not name one.  Default: distance.
    pub metric: WeightMetric,

    /// Drop the origin from the stop set before planning.  Default: `true`.
    ///
    /// When `false`, an origin listed as a stop is treated like any other
    /// stop and is reached by a zero-weight leg on the first iteration.
    pub exclude_origin: bool,
}

impl PlannerConfig {
    /// Same configuration with a different default metric.
    pub fn with_metric(mut self, metric: WeightMetric) -> Self {
        self.metric = metric;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            metric:         WeightMetric::Distance,
            exclude_origin: true,
        }
    }
}
