//! Error types for arena, codec and node-store operations.
//!
//! Every failure is raised where it is detected and carries the state that
//! made the operation illegal (boundary, capacity, requested size), so a
//! caller can report it without re-querying the arena.

use std::error::Error;
use std::fmt;

use crate::address::Address;

/// Errors that can occur while allocating from or accessing an arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The arena was constructed with a negative capacity.
    InvalidCapacity {
        /// The rejected capacity.
        capacity: i64,
    },
    /// The allocation does not fit in the remaining capacity.
    OutOfMemory {
        /// Number of bytes requested.
        requested: usize,
        /// Alignment padding needed in front of the request, zero for
        /// unaligned allocations.
        padding: usize,
        /// Bytes still available (`capacity - offset`).
        available: usize,
        /// Total capacity of the arena.
        capacity: usize,
        /// Allocation boundary at the time of the request.
        offset: usize,
    },
    /// The alignment is not a positive power of two.
    InvalidAlignment {
        /// The rejected alignment.
        alignment: usize,
    },
    /// Rounding `address` up to `alignment` is not representable.
    AlignmentOverflow {
        /// The address being aligned.
        address: usize,
        /// The requested alignment.
        alignment: usize,
    },
    /// A primitive read or write touches bytes outside `[0, offset)`.
    InvalidAddress {
        /// The start address of the access.
        address: Address,
        /// Width of the access in bytes.
        bytes_needed: usize,
        /// Allocation boundary (current offset).
        boundary: usize,
        /// Total capacity of the arena.
        capacity: usize,
    },
    /// A node operation names something that is neither null nor a fully
    /// allocated node record.
    InvalidPointer {
        /// The rejected pointer (raw value, `-1` for null).
        pointer: i32,
        /// Size of a node record in bytes.
        node_size: usize,
        /// Allocation boundary (current offset).
        boundary: usize,
        /// Total capacity of the arena.
        capacity: usize,
    },
    /// A boolean slot holds a byte other than `0x00` or `0x01`.
    InvalidBoolean {
        /// Where the byte was read.
        address: Address,
        /// The offending byte.
        byte: u8,
    },
    /// A guarded traversal revisited a node.
    CycleDetected {
        /// The node that was reached twice.
        at: Address,
        /// Number of distinct nodes seen before the repeat.
        visited: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { capacity } => {
                write!(f, "invalid arena capacity {capacity}: must be non-negative")
            }
            Self::OutOfMemory {
                requested,
                padding,
                available,
                capacity,
                offset,
            } => {
                write!(f, "out of memory: requested {requested} bytes")?;
                if *padding > 0 {
                    write!(f, " plus {padding} bytes of alignment padding")?;
                }
                write!(f, ", {available} available (capacity {capacity}, offset {offset})")
            }
            Self::InvalidAlignment { alignment } => {
                write!(f, "invalid alignment {alignment}: must be a positive power of two")
            }
            Self::AlignmentOverflow { address, alignment } => {
                write!(f, "aligning address {address} to {alignment} overflows")
            }
            Self::InvalidAddress {
                address,
                bytes_needed,
                boundary,
                capacity,
            } => {
                write!(
                    f,
                    "invalid address {address}: {bytes_needed} bytes needed, \
                     allocated boundary {boundary} (capacity {capacity})"
                )
            }
            Self::InvalidPointer {
                pointer,
                node_size,
                boundary,
                capacity,
            } => {
                write!(
                    f,
                    "invalid node pointer {pointer}: node size {node_size}, \
                     allocated boundary {boundary} (capacity {capacity})"
                )
            }
            Self::InvalidBoolean { address, byte } => {
                write!(f, "invalid boolean byte {byte:#04x} at address {address}")
            }
            Self::CycleDetected { at, visited } => {
                write!(f, "cycle detected at node {at} after {visited} nodes")
            }
        }
    }
}

impl Error for ArenaError {}
