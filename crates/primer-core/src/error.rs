//! Error types shared across the Primer workspace.
//!
//! The reference arithmetic helpers never fail: they wrap on overflow and
//! panic on out-of-range lengths. [`OpsError`] is what their checked
//! counterparts return instead.

use std::error::Error;
use std::fmt;

/// The arithmetic operation that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `add_constant`.
    AddConstant,
    /// `sum_buffer`.
    Sum,
    /// `copy_buffer`.
    Copy,
    /// `factorial`.
    Factorial,
    /// `fib_variant`.
    Fibonacci,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AddConstant => "add_constant",
            Self::Sum => "sum_buffer",
            Self::Copy => "copy_buffer",
            Self::Factorial => "factorial",
            Self::Fibonacci => "fib_variant",
        };
        f.write_str(name)
    }
}

/// Errors from the checked arithmetic helpers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpsError {
    /// The result does not fit the operation's fixed-width integer type.
    Overflow {
        /// Which operation overflowed.
        op: Operation,
        /// The input that produced the overflow.
        input: i128,
    },
    /// A length argument exceeds the buffer it indexes.
    LengthExceeded {
        /// Which operation was called.
        op: Operation,
        /// Number of elements requested.
        requested: usize,
        /// Number of elements actually available.
        available: usize,
    },
}

impl fmt::Display for OpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { op, input } => {
                write!(f, "{op}({input}) overflows its result type")
            }
            Self::LengthExceeded {
                op,
                requested,
                available,
            } => {
                write!(
                    f,
                    "{op}: requested {requested} elements, buffer holds {available}"
                )
            }
        }
    }
}

impl Error for OpsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_display_names_operation_and_input() {
        let err = OpsError::Overflow {
            op: Operation::Factorial,
            input: 21,
        };
        assert_eq!(err.to_string(), "factorial(21) overflows its result type");
    }

    #[test]
    fn length_exceeded_display() {
        let err = OpsError::LengthExceeded {
            op: Operation::Sum,
            requested: 21,
            available: 20,
        };
        assert_eq!(
            err.to_string(),
            "sum_buffer: requested 21 elements, buffer holds 20"
        );
    }
}
