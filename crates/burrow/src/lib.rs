//! Burrow: a bump-pointer byte arena with explicit addresses.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Burrow sub-crates. Nothing here hides the mechanics: addresses are
//! plain integer offsets, values are stored big-endian byte by byte, and a
//! linked list is just records that hold each other's offsets.
//!
//! # Quick start
//!
//! ```rust
//! use burrow::prelude::*;
//!
//! let mut arena = Arena::new(128).unwrap();
//!
//! // Raw allocation: addresses are offsets.
//! let a = arena.alloc(4).unwrap();
//! let b = arena.alloc(4).unwrap();
//! assert_eq!((a, b), (Address(0), Address(4)));
//!
//! // Typed access, big-endian.
//! codec::write_i32(&mut arena, a, 0x0102_0304).unwrap();
//! assert_eq!(arena.read_bytes(a, 4).unwrap(), &[1, 2, 3, 4]);
//!
//! // A list, built tail first.
//! let n3 = create_node(&mut arena, 30, None).unwrap();
//! let n2 = create_node(&mut arena, 20, Some(n3)).unwrap();
//! let n1 = create_node(&mut arena, 10, Some(n2)).unwrap();
//! assert_eq!(node::values(&arena, Some(n1)).unwrap(), vec![10, 20, 30]);
//!
//! // Reset invalidates everything at once.
//! arena.reset();
//! assert!(node::value(&arena, n1).is_err());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `burrow-core` | `Address`, `ArenaError`, `ArenaConfig` |
//! | [`arena`] | `burrow-arena` | `Arena`, `align`, `ArenaStats` |
//! | [`codec`] | `burrow-codec` | `Primitive`, typed `read`/`write` |
//! | [`node`] | `burrow-node` | Node records, traversal, views |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Addresses, errors and configuration (`burrow-core`).
pub use burrow_core as types;

/// The byte arena itself (`burrow-arena`).
pub use burrow_arena as arena;

/// Big-endian primitive encoding at arena addresses (`burrow-codec`).
pub use burrow_codec as codec;

/// Linked-list node records (`burrow-node`).
pub use burrow_node as node;

/// Common imports for typical Burrow usage.
///
/// ```rust
/// use burrow::prelude::*;
/// ```
pub mod prelude {
    pub use burrow_arena::{Arena, ArenaStats};
    pub use burrow_codec::{read, write, Primitive};
    pub use burrow_core::{Address, ArenaConfig, ArenaError, NULL};
    pub use burrow_node::{create_node, traverse, NodeMut, NodeRef, NODE_SIZE};

    pub use crate::{codec, node};
}
