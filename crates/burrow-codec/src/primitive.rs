//! Fixed-width scalar types and their big-endian byte encoding.

use std::fmt;

/// A byte pattern that does not decode to a value of the target type.
///
/// Only `bool` rejects bytes; every integer and float pattern is valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidByte(pub u8);

impl fmt::Display for InvalidByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid byte {:#04x}", self.0)
    }
}

/// A fixed-width scalar with a big-endian byte encoding.
///
/// The encoded form is a fixed-size byte array, so a value can only ever be
/// encoded into, or decoded from, exactly [`WIDTH`](Self::WIDTH) bytes.
pub trait Primitive: Copy + Sized {
    /// The encoded form, `[u8; WIDTH]`.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Encoded width in bytes.
    const WIDTH: usize = std::mem::size_of::<Self::Bytes>();

    /// Encode `self`, most significant byte first.
    fn to_bytes(self) -> Self::Bytes;

    /// Decode a value from its encoded form.
    fn from_bytes(bytes: Self::Bytes) -> Result<Self, InvalidByte>;
}

macro_rules! be_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Primitive for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn to_bytes(self) -> Self::Bytes {
                    self.to_be_bytes()
                }

                fn from_bytes(bytes: Self::Bytes) -> Result<Self, InvalidByte> {
                    Ok(<$ty>::from_be_bytes(bytes))
                }
            }
        )*
    };
}

be_primitive!(i8, u8, i16, u16, i32, i64, f32, f64);

impl Primitive for bool {
    type Bytes = [u8; 1];

    fn to_bytes(self) -> Self::Bytes {
        [u8::from(self)]
    }

    fn from_bytes(bytes: Self::Bytes) -> Result<Self, InvalidByte> {
        match bytes {
            [0x00] => Ok(false),
            [0x01] => Ok(true),
            [other] => Err(InvalidByte(other)),
        }
    }
}
