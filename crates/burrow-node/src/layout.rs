//! Node record layout and pointer validation.

use burrow_arena::Arena;
use burrow_core::{Address, ArenaError, NULL};

/// Size of one node record in bytes.
pub const NODE_SIZE: usize = 8;

/// Byte offset of the `value` field within a node.
pub const VALUE_OFFSET: i32 = 0;

/// Byte offset of the `next` field within a node.
pub const NEXT_OFFSET: i32 = 4;

/// Validate a possibly-null node pointer.
///
/// `None` always passes. `Some(ptr)` passes only if the whole
/// `NODE_SIZE`-byte record at `ptr` lies below the arena's allocation
/// boundary.
///
/// # Errors
///
/// [`ArenaError::InvalidPointer`] otherwise.
pub fn check_node_pointer(arena: &Arena, ptr: Option<Address>) -> Result<(), ArenaError> {
    match ptr {
        None => Ok(()),
        Some(ptr) => check_node(arena, ptr),
    }
}

/// Validate a non-null node pointer.
pub(crate) fn check_node(arena: &Arena, ptr: Address) -> Result<(), ArenaError> {
    let in_bounds = ptr
        .index()
        .and_then(|start| start.checked_add(NODE_SIZE))
        .is_some_and(|end| end <= arena.offset());
    if in_bounds {
        Ok(())
    } else {
        Err(invalid_pointer(arena, ptr.get()))
    }
}

/// Check that a link has the shape of a node address.
///
/// Only the sign is checked; the target need not be allocated yet.
pub(crate) fn check_link_shape(arena: &Arena, link: Option<Address>) -> Result<(), ArenaError> {
    match link {
        Some(ptr) if ptr.get() < 0 => Err(invalid_pointer(arena, ptr.get())),
        _ => Ok(()),
    }
}

/// Address of the field `offset` bytes into the node at `ptr`.
pub(crate) fn field(arena: &Arena, ptr: Address, offset: i32) -> Result<Address, ArenaError> {
    ptr.checked_add(offset).ok_or_else(|| invalid_pointer(arena, ptr.get()))
}

fn invalid_pointer(arena: &Arena, pointer: i32) -> ArenaError {
    ArenaError::InvalidPointer {
        pointer,
        node_size: NODE_SIZE,
        boundary: arena.offset(),
        capacity: arena.capacity(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena_with(used: usize) -> Arena {
        let mut arena = Arena::new(64).unwrap();
        arena.alloc(used).unwrap();
        arena
    }

    #[test]
    fn fields_fill_the_record() {
        assert_eq!(VALUE_OFFSET, 0);
        assert_eq!(NEXT_OFFSET as usize + 4, NODE_SIZE);
    }

    #[test]
    fn null_always_passes() {
        assert_eq!(check_node_pointer(&arena_with(0), None), Ok(()));
        assert_eq!(check_node_pointer(&arena_with(16), None), Ok(()));
    }

    #[test]
    fn fully_allocated_record_passes() {
        let arena = arena_with(16);
        assert_eq!(check_node_pointer(&arena, Some(Address(0))), Ok(()));
        assert_eq!(check_node_pointer(&arena, Some(Address(8))), Ok(()));
    }

    #[test]
    fn record_straddling_boundary_fails() {
        let arena = arena_with(12);
        assert_eq!(
            check_node_pointer(&arena, Some(Address(8))),
            Err(ArenaError::InvalidPointer {
                pointer: 8,
                node_size: 8,
                boundary: 12,
                capacity: 64,
            })
        );
    }

    #[test]
    fn negative_pointer_fails() {
        let arena = arena_with(16);
        assert!(check_node_pointer(&arena, Some(Address(-8))).is_err());
        // The raw sentinel wrapped in Some is not a null link.
        assert!(check_node_pointer(&arena, Some(Address(NULL))).is_err());
    }

    #[test]
    fn field_addresses_follow_layout() {
        let arena = arena_with(16);
        assert_eq!(field(&arena, Address(8), VALUE_OFFSET), Ok(Address(8)));
        assert_eq!(field(&arena, Address(8), NEXT_OFFSET), Ok(Address(12)));
    }

    #[test]
    fn field_past_i32_range_is_invalid_pointer() {
        let arena = arena_with(16);
        assert_eq!(
            field(&arena, Address(i32::MAX - 2), NEXT_OFFSET),
            Err(ArenaError::InvalidPointer {
                pointer: i32::MAX - 2,
                node_size: NODE_SIZE,
                boundary: 16,
                capacity: 64,
            })
        );
    }

    #[test]
    fn link_shape_ignores_allocation() {
        let arena = arena_with(0);
        assert_eq!(check_link_shape(&arena, Some(Address(4096))), Ok(()));
        assert_eq!(check_link_shape(&arena, None), Ok(()));
        assert!(check_link_shape(&arena, Some(Address(-2))).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pointer_valid_iff_record_below_offset(
                used in 0usize..64,
                raw in -16i32..80,
            ) {
                let arena = arena_with(used);
                let ok = check_node_pointer(&arena, Some(Address(raw))).is_ok();
                let expected = raw >= 0 && raw as usize + NODE_SIZE <= used;
                prop_assert_eq!(ok, expected);
            }
        }
    }
}
