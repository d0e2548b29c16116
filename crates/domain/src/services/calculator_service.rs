use crate::errors::DomainError;
use tracing::debug;

/// Largest `n` whose factorial fits in `u64`.
pub const MAX_FACTORIAL_INPUT: i32 = 20;

/// Stateless arithmetic service.
///
/// Integer operations wrap on overflow instead of panicking; `factorial`
/// reports results that do not fit in `u64` as an invalid argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorService;

impl CalculatorService {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: i64, b: i64) -> i64 {
        debug!(a, b, "performing addition");
        a.wrapping_add(b)
    }

    pub fn subtract(&self, a: i64, b: i64) -> i64 {
        debug!(a, b, "performing subtraction");
        a.wrapping_sub(b)
    }

    pub fn multiply(&self, a: i64, b: i64) -> i64 {
        debug!(a, b, "performing multiplication");
        a.wrapping_mul(b)
    }

    /// Divide `a` by `b` as floating point.
    pub fn divide(&self, a: i64, b: i64) -> Result<f64, DomainError> {
        debug!(a, b, "performing division");
        if b == 0 {
            return Err(DomainError::DivisionByZero);
        }
        Ok(a as f64 / b as f64)
    }

    pub fn power(&self, base: f64, exponent: i32) -> f64 {
        debug!(base, exponent, "performing exponentiation");
        base.powi(exponent)
    }

    pub fn square_root(&self, n: f64) -> Result<f64, DomainError> {
        debug!(n, "performing square root");
        if n < 0.0 {
            return Err(DomainError::InvalidArgument(
                "Cannot calculate square root of negative number".to_string(),
            ));
        }
        Ok(n.sqrt())
    }

    /// Recursive factorial for `0 <= n <= MAX_FACTORIAL_INPUT`.
    pub fn factorial(&self, n: i32) -> Result<u64, DomainError> {
        debug!(n, "performing factorial");
        if n < 0 {
            return Err(DomainError::InvalidArgument(
                "Factorial of negative number is undefined".to_string(),
            ));
        }
        if n > MAX_FACTORIAL_INPUT {
            return Err(DomainError::InvalidArgument(format!(
                "Factorial of {} overflows u64",
                n
            )));
        }
        Ok(factorial_of(n as u64))
    }

    /// `percent` percent of `value`.
    pub fn percentage(&self, value: f64, percent: f64) -> f64 {
        debug!(value, percent, "performing percentage");
        value * percent / 100.0
    }
}

fn factorial_of(n: u64) -> u64 {
    if n <= 1 {
        return 1;
    }
    n * factorial_of(n - 1)
}
