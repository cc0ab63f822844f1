//! Typed reads and writes at arena addresses.
//!
//! Every function validates the full `[address, address + WIDTH)` range
//! with [`Arena::check_address`] before touching a byte, so a failed call
//! never leaves a partial write behind.

use burrow_arena::Arena;
use burrow_core::{Address, ArenaError};

use crate::primitive::{InvalidByte, Primitive};

/// Encode `value` at `address`.
///
/// # Errors
///
/// [`ArenaError::InvalidAddress`] if the range is not fully allocated.
pub fn write<T: Primitive>(arena: &mut Arena, address: Address, value: T) -> Result<(), ArenaError> {
    arena.write_bytes(address, value.to_bytes().as_ref())
}

/// Decode a `T` from `address`.
///
/// # Errors
///
/// - [`ArenaError::InvalidAddress`] if the range is not fully allocated.
/// - [`ArenaError::InvalidBoolean`] if `T` is `bool` and the stored byte is
///   neither `0x00` nor `0x01`.
pub fn read<T: Primitive>(arena: &Arena, address: Address) -> Result<T, ArenaError> {
    let mut buf = T::Bytes::default();
    let width = buf.as_ref().len();
    buf.as_mut().copy_from_slice(arena.read_bytes(address, width)?);
    T::from_bytes(buf).map_err(|InvalidByte(byte)| ArenaError::InvalidBoolean { address, byte })
}

/// Write a signed byte.
pub fn write_i8(arena: &mut Arena, address: Address, v: i8) -> Result<(), ArenaError> {
    write(arena, address, v)
}

/// Write an unsigned byte.
pub fn write_u8(arena: &mut Arena, address: Address, v: u8) -> Result<(), ArenaError> {
    write(arena, address, v)
}

/// Write a big-endian `i16`.
pub fn write_i16(arena: &mut Arena, address: Address, v: i16) -> Result<(), ArenaError> {
    write(arena, address, v)
}

/// Write a UTF-16 code unit as a big-endian `u16`.
pub fn write_char(arena: &mut Arena, address: Address, unit: u16) -> Result<(), ArenaError> {
    write(arena, address, unit)
}

/// Write a big-endian `i32`.
pub fn write_i32(arena: &mut Arena, address: Address, v: i32) -> Result<(), ArenaError> {
    write(arena, address, v)
}

/// Write a big-endian `i64`.
pub fn write_i64(arena: &mut Arena, address: Address, v: i64) -> Result<(), ArenaError> {
    write(arena, address, v)
}

/// Write a boolean as `0x00` or `0x01`.
pub fn write_bool(arena: &mut Arena, address: Address, v: bool) -> Result<(), ArenaError> {
    write(arena, address, v)
}

/// Write a big-endian `f32`.
pub fn write_f32(arena: &mut Arena, address: Address, v: f32) -> Result<(), ArenaError> {
    write(arena, address, v)
}

/// Write a big-endian `f64`.
pub fn write_f64(arena: &mut Arena, address: Address, v: f64) -> Result<(), ArenaError> {
    write(arena, address, v)
}

/// Read a signed byte.
pub fn read_i8(arena: &Arena, address: Address) -> Result<i8, ArenaError> {
    read(arena, address)
}

/// Read an unsigned byte.
pub fn read_u8(arena: &Arena, address: Address) -> Result<u8, ArenaError> {
    read(arena, address)
}

/// Read a big-endian `i16`.
pub fn read_i16(arena: &Arena, address: Address) -> Result<i16, ArenaError> {
    read(arena, address)
}

/// Read a UTF-16 code unit.
pub fn read_char(arena: &Arena, address: Address) -> Result<u16, ArenaError> {
    read(arena, address)
}

/// Read a big-endian `i32`.
pub fn read_i32(arena: &Arena, address: Address) -> Result<i32, ArenaError> {
    read(arena, address)
}

/// Read a big-endian `i64`.
pub fn read_i64(arena: &Arena, address: Address) -> Result<i64, ArenaError> {
    read(arena, address)
}

/// Read a boolean.
pub fn read_bool(arena: &Arena, address: Address) -> Result<bool, ArenaError> {
    read(arena, address)
}

/// Read a big-endian `f32`.
pub fn read_f32(arena: &Arena, address: Address) -> Result<f32, ArenaError> {
    read(arena, address)
}

/// Read a big-endian `f64`.
pub fn read_f64(arena: &Arena, address: Address) -> Result<f64, ArenaError> {
    read(arena, address)
}
