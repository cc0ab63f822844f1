//! The bump-pointer byte arena.

use std::fmt;

use burrow_core::{Address, ArenaConfig, ArenaError};

use crate::align::align;
use crate::stats::ArenaStats;

/// A fixed-capacity byte buffer with a single forward-moving cursor.
///
/// Bytes below the cursor (`offset`) are allocated and may be read or
/// written through the checked accessors; bytes at or above it are never
/// exposed. There is no per-allocation free: [`reset`](Self::reset) returns
/// the cursor to zero and every address issued before it becomes dangling.
///
/// Mutation requires `&mut self`, so a single owner has exclusive access.
/// Sharing one arena between threads is not supported.
pub struct Arena {
    /// Backing storage, allocated to full capacity at creation.
    data: Vec<u8>,
    /// Bump pointer: first unallocated byte.
    offset: usize,
    zero_on_reset: bool,
    stats: ArenaStats,
}

impl Arena {
    /// Create an arena with `capacity` zeroed bytes.
    ///
    /// # Errors
    ///
    /// [`ArenaError::InvalidCapacity`] if `capacity` is negative. A zero
    /// capacity is accepted; every non-empty allocation will then fail.
    pub fn new(capacity: i32) -> Result<Self, ArenaError> {
        Self::with_config(ArenaConfig::new(capacity))
    }

    /// Create an arena from a config.
    pub fn with_config(config: ArenaConfig) -> Result<Self, ArenaError> {
        let capacity = config.validate()?;
        Ok(Self {
            data: vec![0; capacity],
            offset: 0,
            zero_on_reset: config.zero_on_reset,
            stats: ArenaStats::default(),
        })
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Current allocation boundary.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes allocated so far (same as [`offset`](Self::offset)).
    pub fn used(&self) -> usize {
        self.offset
    }

    /// Bytes still available for allocation.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Padding bytes lost to alignment since construction.
    pub fn wasted(&self) -> usize {
        self.stats.wasted
    }

    /// Allocation diagnostics.
    pub fn stats(&self) -> ArenaStats {
        self.stats
    }

    /// Bump-allocate `size` bytes.
    ///
    /// Returns the address of the first byte. A zero-sized request returns
    /// the current offset without moving it.
    ///
    /// # Errors
    ///
    /// [`ArenaError::OutOfMemory`] if fewer than `size` bytes remain. The
    /// arena is left untouched.
    pub fn alloc(&mut self, size: usize) -> Result<Address, ArenaError> {
        let available = self.remaining();
        if size > available {
            return Err(self.out_of_memory(size, 0, available));
        }
        let start = self.offset;
        self.advance_to(start + size);
        Ok(address_of(start))
    }

    /// Round `address` up to a multiple of `alignment`.
    ///
    /// See [`align`](crate::align::align).
    pub fn align(address: usize, alignment: usize) -> Result<usize, ArenaError> {
        align(address, alignment)
    }

    /// Bump-allocate `size` bytes starting at a multiple of `alignment`.
    ///
    /// The bytes between the old offset and the aligned start are skipped
    /// for good: they are added to [`wasted`](Self::wasted) and never
    /// handed out again until the next reset.
    ///
    /// # Errors
    ///
    /// - [`ArenaError::InvalidAlignment`] if `alignment` is not a positive
    ///   power of two.
    /// - [`ArenaError::OutOfMemory`] if `size` plus the padding does not
    ///   fit. `requested` is `size`; the padding is reported separately.
    pub fn alloc_aligned(&mut self, size: usize, alignment: usize) -> Result<Address, ArenaError> {
        let aligned = align(self.offset, alignment)?;
        let padding = aligned - self.offset;
        let available = self.remaining();
        if padding.saturating_add(size) > available {
            return Err(self.out_of_memory(size, padding, available));
        }
        self.stats.wasted += padding;
        self.advance_to(aligned + size);
        Ok(address_of(aligned))
    }

    /// Move the cursor back to zero.
    ///
    /// Every address issued before the reset becomes dangling. The buffer is
    /// only cleared when the arena was built with
    /// [`ArenaConfig::zero_on_reset`]; otherwise stale bytes stay in place.
    /// Statistics, including the wasted-byte count, carry over.
    pub fn reset(&mut self) {
        if self.zero_on_reset {
            self.data[..self.offset].fill(0);
        }
        self.offset = 0;
        self.stats.resets += 1;
    }

    /// Validate that `bytes_needed` bytes starting at `address` are allocated.
    ///
    /// Returns the buffer index of `address` on success.
    ///
    /// # Errors
    ///
    /// [`ArenaError::InvalidAddress`] unless `address >= 0` and
    /// `address + bytes_needed <= offset`.
    pub fn check_address(&self, address: Address, bytes_needed: usize) -> Result<usize, ArenaError> {
        match address.index() {
            Some(start)
                if start
                    .checked_add(bytes_needed)
                    .is_some_and(|end| end <= self.offset) =>
            {
                Ok(start)
            }
            _ => Err(ArenaError::InvalidAddress {
                address,
                bytes_needed,
                boundary: self.offset,
                capacity: self.capacity(),
            }),
        }
    }

    /// Borrow `length` allocated bytes starting at `address`.
    pub fn read_bytes(&self, address: Address, length: usize) -> Result<&[u8], ArenaError> {
        let start = self.check_address(address, length)?;
        Ok(&self.data[start..start + length])
    }

    /// Mutably borrow `length` allocated bytes starting at `address`.
    pub fn bytes_mut(&mut self, address: Address, length: usize) -> Result<&mut [u8], ArenaError> {
        let start = self.check_address(address, length)?;
        Ok(&mut self.data[start..start + length])
    }

    /// Copy `bytes` into the arena at `address`.
    ///
    /// Nothing is written unless the whole range is allocated.
    pub fn write_bytes(&mut self, address: Address, bytes: &[u8]) -> Result<(), ArenaError> {
        self.bytes_mut(address, bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    fn advance_to(&mut self, new_offset: usize) {
        self.offset = new_offset;
        self.stats.allocations += 1;
        self.stats.high_water = self.stats.high_water.max(new_offset);
    }

    fn out_of_memory(&self, requested: usize, padding: usize, available: usize) -> ArenaError {
        ArenaError::OutOfMemory {
            requested,
            padding,
            available,
            capacity: self.capacity(),
            offset: self.offset,
        }
    }
}

/// Convert an in-bounds buffer index to an address.
///
/// Capacity comes from an `i32`, so every index up to and including the
/// capacity fits.
fn address_of(index: usize) -> Address {
    Address(index as i32)
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.capacity())
            .field("offset", &self.offset)
            .field("zero_on_reset", &self.zero_on_reset)
            .field("stats", &self.stats)
            .finish()
    }
}
