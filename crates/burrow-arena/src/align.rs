//! Address alignment.

use burrow_core::ArenaError;

/// Round `address` up to the next multiple of `alignment`.
///
/// Returns the smallest value `>= address` that is a multiple of
/// `alignment`. Pure: no arena state is involved.
///
/// # Errors
///
/// - [`ArenaError::InvalidAlignment`] if `alignment` is not a positive power
///   of two.
/// - [`ArenaError::AlignmentOverflow`] if the rounded value does not fit in
///   a `usize`.
pub fn align(address: usize, alignment: usize) -> Result<usize, ArenaError> {
    if !alignment.is_power_of_two() {
        return Err(ArenaError::InvalidAlignment { alignment });
    }
    let mask = alignment - 1;
    address
        .checked_add(mask)
        .map(|v| v & !mask)
        .ok_or(ArenaError::AlignmentOverflow { address, alignment })
}
