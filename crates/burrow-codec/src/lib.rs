//! Big-endian primitive codec for the Burrow arena.
//!
//! Two layers:
//!
//! - [`primitive`]: the [`Primitive`] trait and its impls. Pure
//!   encode/decode between a value and its fixed-size byte array, with no
//!   knowledge of allocation.
//! - [`access`]: typed [`read`]/[`write`] against an
//!   [`Arena`](burrow_arena::Arena). Bounds are checked by the arena's own
//!   `check_address`; this crate never carries separate bounds logic.
//!
//! # Format
//!
//! All integers are big-endian, most significant byte first. An N-byte
//! value `x` is stored as byte `i = (x >> 8*(N-1-i)) & 0xFF`. Booleans are
//! one byte, `0x00` or `0x01`; any other byte fails to decode. Floats are
//! stored as their IEEE-754 bit pattern. There is no padding and no type
//! tag: the reader must know what it wrote.
//!
//! | Type   | Width | Meaning                 |
//! |--------|-------|-------------------------|
//! | `i8`   | 1     | byte                    |
//! | `u8`   | 1     | unsigned byte           |
//! | `i16`  | 2     | short                   |
//! | `u16`  | 2     | char (UTF-16 code unit) |
//! | `i32`  | 4     | int                     |
//! | `i64`  | 8     | long                    |
//! | `bool` | 1     | boolean                 |
//! | `f32`  | 4     | float                   |
//! | `f64`  | 8     | double                  |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod access;
pub mod primitive;

pub use access::{
    read, read_bool, read_char, read_f32, read_f64, read_i16, read_i32, read_i64, read_i8,
    read_u8, write, write_bool, write_char, write_f32, write_f64, write_i16, write_i32,
    write_i64, write_i8, write_u8,
};
pub use primitive::{InvalidByte, Primitive};
