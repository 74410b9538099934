//! Core types shared by the evaluators.

use core::fmt;

use crate::machine::SpecialFloat;

/// Logarithm of a magnitude together with the sign of the value.
///
/// Returned by [`lgamma`](crate::lgamma) and
/// [`lgamma_ratio`](crate::lgamma_ratio), where the value itself may
/// overflow but its logarithm does not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignedLog<T: SpecialFloat> {
    /// Natural logarithm of the absolute value.
    pub log_abs: T,
    /// Sign of the value, either 1 or -1.
    pub sign: i32,
}

impl<T: SpecialFloat> SignedLog<T> {
    pub(crate) fn new(log_abs: T, sign: i32) -> Self {
        SignedLog { log_abs, sign }
    }

    /// Recover the value, `sign * exp(log_abs)`.
    #[inline]
    pub fn value(self) -> T {
        T::from_f64(f64::from(self.sign)) * self.log_abs.exp()
    }
}

/// Error type for the few fallible entry points.
///
/// The mathematical functions never fail: domain errors are reported as NaN
/// and poles as signed infinities. `Error` is reserved for misuse of the
/// utility API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Invalid input (e.g. an empty coefficient slice passed to `poly`).
    InvalidArgument,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument => {
                write!(f, "invalid argument: check the input constraints")
            }
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_log_value() {
        let s = SignedLog::new(2.0_f64.ln(), -1);
        assert!((s.value() + 2.0).abs() < 1e-15);
        let s = SignedLog::new(f64::NEG_INFINITY, 1);
        assert_eq!(s.value(), 0.0);
        let s = SignedLog::new(f64::INFINITY, -1);
        assert_eq!(s.value(), f64::NEG_INFINITY);
    }

    #[test]
    fn error_display() {
        let msg = format!("{}", Error::InvalidArgument);
        assert!(msg.starts_with("invalid argument"));
    }
}
