//! Per-route weight triple and its route-level aggregate.
//!
//! A route carries three independent, non-negative weights.  The same type
//! doubles as the per-path total produced by summing routes along a path,
//! exposed under the [`RouteTotals`] alias.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::{CoreError, CoreResult, WeightMetric};

/// Distance, time and cost of a single route (or a sum of routes).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteWeights {
    pub distance: f64,
    pub time:     f64,
    pub cost:     f64,
}

/// Totals of every weight attribute along a path.
pub type RouteTotals = RouteWeights;

impl RouteWeights {
    pub const ZERO: RouteWeights = RouteWeights { distance: 0.0, time: 0.0, cost: 0.0 };

    /// Build a weight triple, rejecting negative, NaN or infinite values.
    pub fn new(distance: f64, time: f64, cost: f64) -> CoreResult<Self> {
        let weights = Self { distance, time, cost };
        weights.validate()?;
        Ok(weights)
    }

    /// Check every attribute is finite and `>= 0`.
    pub fn validate(&self) -> CoreResult<()> {
        for metric in WeightMetric::ALL {
            let value = self.get(metric);
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidWeight { metric, value });
            }
        }
        Ok(())
    }

    /// Project the attribute selected by `metric`.
    #[inline]
    pub fn get(&self, metric: WeightMetric) -> f64 {
        match metric {
            WeightMetric::Distance => self.distance,
            WeightMetric::Time     => self.time,
            WeightMetric::Cost     => self.cost,
        }
    }
}

impl Add for RouteWeights {
    type Output = RouteWeights;

    #[inline]
    fn add(self, rhs: RouteWeights) -> RouteWeights {
        RouteWeights {
            distance: self.distance + rhs.distance,
            time:     self.time + rhs.time,
            cost:     self.cost + rhs.cost,
        }
    }
}

impl AddAssign for RouteWeights {
    #[inline]
    fn add_assign(&mut self, rhs: RouteWeights) {
        *self = *self + rhs;
    }
}

impl Sum for RouteWeights {
    fn sum<I: Iterator<Item = RouteWeights>>(iter: I) -> Self {
        iter.fold(RouteWeights::ZERO, Add::add)
    }
}

impl fmt::Display for RouteWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "distance {:.1} km, time {:.0} min, cost ${:.2}",
            self.distance, self.time, self.cost
        )
    }
}
