//! Linked-list nodes laid out by hand in a Burrow arena.
//!
//! A node is not a Rust value: it is an interpretation of 8 arena bytes.
//!
//! ```text
//! addr+0          addr+4          addr+8
//! ├─ value: i32 BE ─┼─ next: i32 BE ─┤
//! ```
//!
//! `next` holds the address of the following node, or `-1` for the end of
//! the list. In the API a link is an `Option<Address>`; the `-1` sentinel
//! only exists inside the stored bytes.
//!
//! The store is stateless. It does not track lists or heads; callers keep
//! the head address and pass the arena in on every call. Nodes are never
//! freed individually. [`Arena::reset`](burrow_arena::Arena::reset)
//! invalidates all of them at once.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod layout;
pub mod store;
pub mod traverse;
pub mod view;

pub use layout::{check_node_pointer, NEXT_OFFSET, NODE_SIZE, VALUE_OFFSET};
pub use store::{build_list, create_node, next, push_front, set_next, set_value, value};
pub use traverse::{collect_list, traverse, values, Traverse};
pub use view::{NodeMut, NodeRef};
