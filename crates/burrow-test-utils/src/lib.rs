//! Test fixtures for Burrow development.
//!
//! Arenas in a known state and lists built from plain values, so tests can
//! start from the interesting part.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use burrow_arena::Arena;
use burrow_core::Address;
use burrow_node::{build_list, create_node, set_next};

/// An arena of `capacity` bytes with the first `used` bytes allocated.
///
/// # Panics
///
/// Panics if `used > capacity` or `capacity` is negative.
pub fn arena_with_used(capacity: i32, used: usize) -> Arena {
    let mut arena = Arena::new(capacity).expect("fixture capacity must be non-negative");
    arena
        .alloc(used)
        .expect("fixture must not allocate beyond capacity");
    arena
}

/// An arena holding a single list of `values`, plus its head.
pub fn list_fixture(values: &[i32]) -> (Arena, Option<Address>) {
    let capacity = i32::try_from(values.len() * burrow_node::NODE_SIZE)
        .expect("fixture list too large for an i32 arena");
    let mut arena = Arena::new(capacity).expect("non-negative capacity");
    let head = build_list(&mut arena, values).expect("arena sized for the list");
    (arena, head)
}

/// An arena holding a ring of `len` nodes valued `0..len`.
///
/// The last node links back to the head. Returns the head.
pub fn cyclic_fixture(len: usize) -> (Arena, Address) {
    assert!(len > 0, "a cycle needs at least one node");
    let values: Vec<i32> = (0..len as i32).collect();
    let (mut arena, head) = list_fixture(&values);
    let head = head.expect("non-empty list has a head");
    // Built tail-first, the tail is the first record in the arena.
    let tail = Address::ZERO;
    set_next(&mut arena, tail, Some(head)).expect("tail is an allocated node");
    (arena, head)
}

/// Append a detached node with `value` to `arena` and return its address.
pub fn orphan_node(arena: &mut Arena, value: i32) -> Address {
    create_node(arena, value, None).expect("fixture arena has room for a node")
}
