//! Factorial and the shifted Fibonacci recurrence.
//!
//! Both are defined recursively but evaluated iteratively, so large
//! inputs cannot exhaust the stack. Results are bit-identical to the
//! recursive definitions: wrapping multiplication and addition are
//! associative modulo 2^64.

use primer_core::{OpsError, Operation};

/// `n!` with `0! = 1`, wrapping silently once the result leaves `u64`.
///
/// The first wrapped input is `n = 21`.
pub fn factorial(n: u64) -> u64 {
    (1..=n).fold(1u64, |acc, k| acc.wrapping_mul(k))
}

/// `n!`, or [`OpsError::Overflow`] if it does not fit in `u64`.
pub fn checked_factorial(n: u64) -> Result<u64, OpsError> {
    (1..=n)
        .try_fold(1u64, |acc, k| acc.checked_mul(k))
        .ok_or(OpsError::Overflow {
            op: Operation::Factorial,
            input: i128::from(n),
        })
}

/// The shifted Fibonacci recurrence.
///
/// `fib_variant(0) = fib_variant(1) = 0`, `fib_variant(2) = 1`, and
/// `fib_variant(n) = fib_variant(n - 1) + fib_variant(n - 2)` beyond that,
/// wrapping on overflow. This is the canonical sequence shifted by one
/// index: `fib_variant(n) == F(n - 1)` for `n >= 1`.
pub fn fib_variant(n: u64) -> u64 {
    if n <= 1 {
        return 0;
    }
    let (mut prev, mut cur) = (0u64, 1u64);
    for _ in 3..=n {
        let next = prev.wrapping_add(cur);
        prev = cur;
        cur = next;
    }
    cur
}

/// Checked form of [`fib_variant`]. The first overflowing input is `n = 95`.
pub fn checked_fib_variant(n: u64) -> Result<u64, OpsError> {
    if n <= 1 {
        return Ok(0);
    }
    let overflow = OpsError::Overflow {
        op: Operation::Fibonacci,
        input: i128::from(n),
    };
    let (mut prev, mut cur) = (0u64, 1u64);
    for _ in 3..=n {
        let next = prev.checked_add(cur).ok_or_else(|| overflow.clone())?;
        prev = cur;
        cur = next;
    }
    Ok(cur)
}
