//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for a byte arena.
///
/// Validated when the arena is built; the arena copies what it needs and
/// the values are immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Size of the backing buffer in bytes.
    ///
    /// Signed so that addresses, which are 32-bit signed offsets, can reach
    /// every byte. Must be non-negative; zero is legal and immediately
    /// exhausted.
    pub capacity: i32,

    /// Whether `reset()` overwrites the buffer with zeroes.
    ///
    /// Off by default: stale bytes stay in place and reading them through a
    /// dangling address is the caller's bug.
    pub zero_on_reset: bool,
}

impl ArenaConfig {
    /// Default capacity: 1 KiB.
    pub const DEFAULT_CAPACITY: i32 = 1024;

    /// Create a config for the given capacity with defaults elsewhere.
    pub fn new(capacity: i32) -> Self {
        Self {
            capacity,
            zero_on_reset: false,
        }
    }

    /// Enable or disable zeroing the buffer on reset.
    pub fn with_zero_on_reset(mut self, zero_on_reset: bool) -> Self {
        self.zero_on_reset = zero_on_reset;
        self
    }

    /// Check the config and return the capacity as a buffer length.
    pub fn validate(&self) -> Result<usize, ArenaError> {
        usize::try_from(self.capacity).map_err(|_| ArenaError::InvalidCapacity {
            capacity: i64::from(self.capacity),
        })
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
