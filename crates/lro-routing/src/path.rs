//! The result of a routing query.

use lro_core::{LocationId, WeightMetric};

/// An ordered sequence of locations, each consecutive pair joined by a
/// route, together with the summed weight of the metric it was built for.
///
/// A path always holds at least one location; a single location is the
/// trivial zero-edge path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path {
    locations: Vec<LocationId>,
    weight:    f64,
    metric:    WeightMetric,
}

impl Path {
    /// The zero-weight path that starts and ends at `at`.
    pub fn trivial(at: LocationId, metric: WeightMetric) -> Self {
        Self { locations: vec![at], weight: 0.0, metric }
    }

    /// Build from locations already known to be connected.  Empty input is
    /// not a path; `None` is returned.
    pub(crate) fn from_parts(locations: Vec<LocationId>, weight: f64, metric: WeightMetric) -> Option<Self> {
        (!locations.is_empty()).then_some(Self { locations, weight, metric })
    }

    pub fn locations(&self) -> &[LocationId] {
        &self.locations
    }

    pub fn into_locations(self) -> Vec<LocationId> {
        self.locations
    }

    /// Summed weight of [`metric`](Self::metric) along the path.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn metric(&self) -> WeightMetric {
        self.metric
    }

    pub fn start(&self) -> &LocationId {
        &self.locations[0]
    }

    pub fn end(&self) -> &LocationId {
        &self.locations[self.locations.len() - 1]
    }

    /// Number of routes traversed.
    pub fn edge_count(&self) -> usize {
        self.locations.len() - 1
    }

    /// `true` if the path never leaves its start.
    pub fn is_trivial(&self) -> bool {
        self.locations.len() == 1
    }

    /// Consecutive `(from, to)` pairs.
    pub fn legs(&self) -> impl Iterator<Item = (&LocationId, &LocationId)> + '_ {
        self.locations.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Chain `next` onto the end of this path.
    ///
    /// `next` must start where `self` ends; its first location is dropped so
    /// the junction is not repeated.
    pub fn append(&mut self, next: Path) {
        debug_assert_eq!(self.end(), next.start(), "appended path must start at the current end");
        debug_assert_eq!(self.metric, next.metric);
        self.weight += next.weight;
        self.locations.extend(next.locations.into_iter().skip(1));
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, loc) in self.locations.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{loc}")?;
        }
        write!(f, " ({} {:.2})", self.metric, self.weight)
    }
}
