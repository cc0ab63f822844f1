//! Fixed-capacity bump-pointer byte arena.
//!
//! An [`Arena`] owns a zero-initialised byte buffer and a single allocation
//! cursor. Allocation hands out integer [`Address`](burrow_core::Address)es
//! and only ever moves the cursor forward; [`Arena::reset`] moves it back to
//! zero and invalidates every address handed out before.
//!
//! # Layout
//!
//! ```text
//! 0                 offset                        capacity
//! ├──── allocated ────┼────────── unallocated ────────┤
//! │ readable/writable │ never touched by the public API │
//! ```
//!
//! Every byte access goes through [`Arena::check_address`], which is the
//! single authority on what is legal to touch. Higher layers (the primitive
//! codec, the node store) delegate to it instead of re-deriving bounds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod align;
pub mod arena;
pub mod stats;

pub use align::align;
pub use arena::Arena;
pub use stats::ArenaStats;
