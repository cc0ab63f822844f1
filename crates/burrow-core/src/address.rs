//! Raw arena addresses and the null sentinel.

use std::fmt;

/// The raw value that encodes "no node" inside a `next` field.
pub const NULL: i32 = -1;

/// A byte offset into an arena's buffer.
///
/// An address is an untyped integer: whether it names a primitive, a node or
/// nothing at all is decided by whoever issued it. Addresses are signed so
/// that values read back from arena memory, or supplied by a caller, can be
/// represented and then rejected by validation instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub i32);

impl Address {
    /// The first byte of every arena.
    pub const ZERO: Self = Self(0);

    /// Raw integer value.
    pub fn get(self) -> i32 {
        self.0
    }

    /// The buffer index this address names, or `None` if it is negative.
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }

    /// Decode a raw link field: [`NULL`] becomes `None`.
    pub fn from_raw_link(raw: i32) -> Option<Self> {
        if raw == NULL {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Encode a link for storage: `None` becomes [`NULL`].
    pub fn to_raw_link(link: Option<Self>) -> i32 {
        link.map_or(NULL, Self::get)
    }

    /// Offset this address by `delta` bytes, returning `None` on overflow.
    pub fn checked_add(self, delta: i32) -> Option<Self> {
        self.0.checked_add(delta).map(Self)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Address {
    fn from(v: i32) -> Self {
        Self(v)
    }
}
