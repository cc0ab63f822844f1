//! Benchmark profiles and utilities for the Burrow byte arena.
//!
//! Provides deterministic workloads shared by the criterion benches and the
//! examples:
//!
//! - [`alloc_pattern`]: a repeatable mix of small allocation sizes
//! - [`reference_arena`]: a 64 KiB arena, the size every bench uses
//! - [`reference_list`]: an arena filled with one long list

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use burrow_arena::Arena;
use burrow_core::{Address, ArenaError};
use burrow_node::{build_list, NODE_SIZE};

/// Capacity of the reference arena in bytes.
pub const REFERENCE_CAPACITY: i32 = 64 * 1024;

/// Build the reference 64 KiB arena.
pub fn reference_arena() -> Result<Arena, ArenaError> {
    Arena::new(REFERENCE_CAPACITY)
}

/// `count` allocation sizes cycling through 1, 2, 4, 8 and 16 bytes with an
/// odd size mixed in every seventh request, so aligned benches pay padding.
pub fn alloc_pattern(count: usize) -> Vec<usize> {
    const SIZES: [usize; 5] = [1, 2, 4, 8, 16];
    (0..count)
        .map(|i| if i % 7 == 6 { 3 } else { SIZES[i % SIZES.len()] })
        .collect()
}

/// Fill the reference arena with one list of `len` nodes valued `0..len`.
///
/// Returns the arena and the list head.
pub fn reference_list(len: usize) -> Result<(Arena, Option<Address>), ArenaError> {
    let mut arena = reference_arena()?;
    let max_nodes = REFERENCE_CAPACITY as usize / NODE_SIZE;
    let values: Vec<i32> = (0..len.min(max_nodes) as i32).collect();
    let head = build_list(&mut arena, &values)?;
    Ok((arena, head))
}
