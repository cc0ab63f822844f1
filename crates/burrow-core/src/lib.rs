//! Core types for the Burrow byte arena.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: the raw
//! [`Address`] type and its null sentinel, the [`ArenaError`] taxonomy,
//! and the [`ArenaConfig`] used to build an arena.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod address;
pub mod config;
pub mod error;

pub use address::{Address, NULL};
pub use config::ArenaConfig;
pub use error::ArenaError;
