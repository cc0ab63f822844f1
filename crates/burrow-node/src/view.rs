//! Typed views over a single node record.
//!
//! A view pairs a validated node address with a borrow of its arena. While
//! the view is alive the arena cannot be reset, so the address it wraps
//! cannot dangle.

use burrow_arena::Arena;
use burrow_core::{Address, ArenaError};

use crate::layout::check_node;
use crate::store;

/// Read-only view of one node.
#[derive(Clone, Copy, Debug)]
pub struct NodeRef<'a> {
    arena: &'a Arena,
    ptr: Address,
}

impl<'a> NodeRef<'a> {
    /// Validate `ptr` and wrap it.
    pub fn new(arena: &'a Arena, ptr: Address) -> Result<Self, ArenaError> {
        check_node(arena, ptr)?;
        Ok(Self { arena, ptr })
    }

    /// Address of the record.
    pub fn address(&self) -> Address {
        self.ptr
    }

    /// The `value` field.
    pub fn value(&self) -> Result<i32, ArenaError> {
        store::value(self.arena, self.ptr)
    }

    /// The raw `next` link.
    pub fn next(&self) -> Result<Option<Address>, ArenaError> {
        store::next(self.arena, self.ptr)
    }

    /// Follow the `next` link to a view of the following node.
    ///
    /// Fails with [`ArenaError::InvalidPointer`] if the link is dangling.
    pub fn next_node(&self) -> Result<Option<NodeRef<'a>>, ArenaError> {
        self.next()?
            .map(|ptr| NodeRef::new(self.arena, ptr))
            .transpose()
    }
}

/// Mutable view of one node.
#[derive(Debug)]
pub struct NodeMut<'a> {
    arena: &'a mut Arena,
    ptr: Address,
}

impl<'a> NodeMut<'a> {
    /// Validate `ptr` and wrap it.
    pub fn new(arena: &'a mut Arena, ptr: Address) -> Result<Self, ArenaError> {
        check_node(arena, ptr)?;
        Ok(Self { arena, ptr })
    }

    /// Address of the record.
    pub fn address(&self) -> Address {
        self.ptr
    }

    /// The `value` field.
    pub fn value(&self) -> Result<i32, ArenaError> {
        store::value(self.arena, self.ptr)
    }

    /// Overwrite the `value` field.
    pub fn set_value(&mut self, value: i32) -> Result<(), ArenaError> {
        store::set_value(self.arena, self.ptr, value)
    }

    /// The raw `next` link.
    pub fn next(&self) -> Result<Option<Address>, ArenaError> {
        store::next(self.arena, self.ptr)
    }

    /// Overwrite the `next` link.
    pub fn set_next(&mut self, next: Option<Address>) -> Result<(), ArenaError> {
        store::set_next(self.arena, self.ptr, next)
    }

    /// Downgrade to a read-only view.
    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef {
            arena: &*self.arena,
            ptr: self.ptr,
        }
    }
}
