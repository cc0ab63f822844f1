//! Allocation diagnostics.

use std::fmt;

/// A point-in-time summary of an arena's allocation history.
///
/// Returned by value from [`Arena::stats`](crate::Arena::stats); it does not
/// borrow the arena.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Successful `alloc` and `alloc_aligned` calls since construction.
    pub allocations: u64,
    /// Padding bytes skipped by aligned allocations since construction.
    pub wasted: usize,
    /// Number of `reset` calls since construction.
    pub resets: u64,
    /// Largest allocation boundary ever reached.
    pub high_water: usize,
}

impl fmt::Display for ArenaStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "allocations={}, wasted={}B, resets={}, high_water={}B",
            self.allocations, self.wasted, self.resets, self.high_water
        )
    }
}
