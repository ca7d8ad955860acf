//! Deterministic layout RNG.
//!
//! Locations added without an explicit position are scattered uniformly over
//! the inner `[0.1, 0.9]²` square of the layout plane, away from its edges.
//! A seeded `SmallRng` keeps the scatter reproducible across runs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Position;

/// Lower bound of each coordinate for scattered placements.
pub const LAYOUT_MIN: f64 = 0.1;
/// Upper bound of each coordinate for scattered placements.
pub const LAYOUT_MAX: f64 = 0.9;

/// Seeded RNG used to place new locations on the layout plane.
///
/// Used only in single-threaded contexts.
pub struct LayoutRng(SmallRng);

impl LayoutRng {
    pub fn new(seed: u64) -> Self {
        LayoutRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw a position uniformly within `[LAYOUT_MIN, LAYOUT_MAX]²`.
    pub fn next_position(&mut self) -> Position {
        let x = self.0.gen_range(LAYOUT_MIN..=LAYOUT_MAX);
        let y = self.0.gen_range(LAYOUT_MIN..=LAYOUT_MAX);
        Position::new(x, y)
    }
}
