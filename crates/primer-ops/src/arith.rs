//! Constant addition, buffer summation and buffer copy.

use primer_core::{OpsError, Operation};

/// The constant added by [`add_constant`].
pub const ADDEND: i32 = 4;

/// Return `a + 4`, wrapping at the `i32` boundary.
pub fn add_constant(a: i32) -> i32 {
    a.wrapping_add(ADDEND)
}

/// Return `a + 4`, or [`OpsError::Overflow`] if it does not fit in `i32`.
pub fn checked_add_constant(a: i32) -> Result<i32, OpsError> {
    a.checked_add(ADDEND).ok_or(OpsError::Overflow {
        op: Operation::AddConstant,
        input: i128::from(a),
    })
}

/// Sum the first `len` elements of `buffer`, wrapping on overflow.
///
/// # Panics
///
/// Panics if `len > buffer.len()`. Use [`try_sum_buffer`] to get an
/// error instead.
pub fn sum_buffer(buffer: &[i32], len: usize) -> i32 {
    wrapping_sum(&buffer[..len])
}

/// Sum the first `len` elements of `buffer`.
///
/// Returns [`OpsError::LengthExceeded`] when `len` is past the end of
/// the buffer. The sum itself wraps, as in [`sum_buffer`].
pub fn try_sum_buffer(buffer: &[i32], len: usize) -> Result<i32, OpsError> {
    let prefix = checked_prefix(buffer, len, Operation::Sum)?;
    Ok(wrapping_sum(prefix))
}

/// Sum the first `len` elements of `buffer` without wrapping.
///
/// Returns [`OpsError::LengthExceeded`] for an out-of-range `len` and
/// [`OpsError::Overflow`] if the sum leaves `i32`.
pub fn checked_sum_buffer(buffer: &[i32], len: usize) -> Result<i32, OpsError> {
    checked_prefix(buffer, len, Operation::Sum)?
        .iter()
        .try_fold(0i32, |acc, &v| acc.checked_add(v))
        .ok_or(OpsError::Overflow {
            op: Operation::Sum,
            input: i128::from(len as u64),
        })
}

/// Copy the first `len` elements of `buffer` into a new owned buffer.
///
/// The result is a distinct allocation; mutating it never affects
/// `buffer`.
///
/// # Panics
///
/// Panics if `len > buffer.len()`. Use [`try_copy_buffer`] to get an
/// error instead.
pub fn copy_buffer(buffer: &[i32], len: usize) -> Box<[i32]> {
    Box::from(&buffer[..len])
}

/// Checked form of [`copy_buffer`].
pub fn try_copy_buffer(buffer: &[i32], len: usize) -> Result<Box<[i32]>, OpsError> {
    checked_prefix(buffer, len, Operation::Copy).map(Box::from)
}

fn wrapping_sum(values: &[i32]) -> i32 {
    values.iter().fold(0i32, |acc, &v| acc.wrapping_add(v))
}

fn checked_prefix(buffer: &[i32], len: usize, op: Operation) -> Result<&[i32], OpsError> {
    buffer.get(..len).ok_or(OpsError::LengthExceeded {
        op,
        requested: len,
        available: buffer.len(),
    })
}
