//! Node allocation and field access.

use burrow_arena::Arena;
use burrow_codec::{read_i32, write_i32};
use burrow_core::{Address, ArenaError};

use crate::layout::{check_link_shape, check_node, field, NEXT_OFFSET, NODE_SIZE, VALUE_OFFSET};

/// Allocate a node holding `value` and linking to `next`.
///
/// `next` is only checked for shape (null or non-negative). It does not
/// have to name an allocated node, so lists can be built in any order; the
/// link is validated when it is followed.
///
/// # Errors
///
/// - [`ArenaError::InvalidPointer`] if `next` is negative. Nothing is
///   allocated in that case.
/// - [`ArenaError::OutOfMemory`] if the arena cannot fit another node.
pub fn create_node(arena: &mut Arena, value: i32, next: Option<Address>) -> Result<Address, ArenaError> {
    check_link_shape(arena, next)?;
    let ptr = arena.alloc(NODE_SIZE)?;
    let value_at = field(arena, ptr, VALUE_OFFSET)?;
    let next_at = field(arena, ptr, NEXT_OFFSET)?;
    write_i32(arena, value_at, value)?;
    write_i32(arena, next_at, Address::to_raw_link(next))?;
    Ok(ptr)
}

/// Read the `value` field of the node at `ptr`.
pub fn value(arena: &Arena, ptr: Address) -> Result<i32, ArenaError> {
    check_node(arena, ptr)?;
    read_i32(arena, field(arena, ptr, VALUE_OFFSET)?)
}

/// Overwrite the `value` field of the node at `ptr`.
pub fn set_value(arena: &mut Arena, ptr: Address, value: i32) -> Result<(), ArenaError> {
    check_node(arena, ptr)?;
    let at = field(arena, ptr, VALUE_OFFSET)?;
    write_i32(arena, at, value)
}

/// Read the `next` link of the node at `ptr`; `None` marks the list end.
pub fn next(arena: &Arena, ptr: Address) -> Result<Option<Address>, ArenaError> {
    check_node(arena, ptr)?;
    read_i32(arena, field(arena, ptr, NEXT_OFFSET)?).map(Address::from_raw_link)
}

/// Overwrite the `next` link of the node at `ptr`.
///
/// Like [`create_node`], the new link is checked for shape only.
pub fn set_next(arena: &mut Arena, ptr: Address, next: Option<Address>) -> Result<(), ArenaError> {
    check_node(arena, ptr)?;
    check_link_shape(arena, next)?;
    let at = field(arena, ptr, NEXT_OFFSET)?;
    write_i32(arena, at, Address::to_raw_link(next))
}

/// Prepend a node to the list starting at `head` and return the new head.
pub fn push_front(arena: &mut Arena, head: Option<Address>, value: i32) -> Result<Address, ArenaError> {
    create_node(arena, value, head)
}

/// Build a list holding `values` in order and return its head.
///
/// Nodes are created tail first, so every link points at a node that
/// already exists. An empty slice yields `None` without allocating.
pub fn build_list(arena: &mut Arena, values: &[i32]) -> Result<Option<Address>, ArenaError> {
    let mut head = None;
    for &v in values.iter().rev() {
        head = Some(push_front(arena, head, v)?);
    }
    Ok(head)
}
