//! Simulation time model.
//!
//! The simulation advances in whole days.  Everything that happens within a
//! day (probability build, budget draw, proposals) is one indivisible step,
//! so there is no finer clock.

use std::fmt;

/// A zero-based simulated day counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(pub u32);

impl Day {
    pub const ZERO: Day = Day(0);

    /// The day after `self`.
    #[inline]
    pub fn next(self) -> Day {
        Day(self.0 + 1)
    }

    /// `true` if `self` falls on an `interval`-day boundary.  An interval of
    /// zero never matches.
    #[inline]
    pub fn is_multiple_of(self, interval: u32) -> bool {
        interval > 0 && self.0 % interval == 0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}
