//! Integer and sequence helpers
//!
//! Independent pure functions with no interaction between them. Invalid
//! input (negative factorial argument, empty slice for a max/min reduction)
//! is rejected immediately with a [`DomainError`]; there is never a partial
//! result. "Non-sequence input" rejection from the original contract is
//! enforced by the type system here.

use crate::error::{DomainError, Result};
use rand::Rng;

/// Factorial of a non-negative integer
///
/// `factorial(0)` and `factorial(1)` are both 1. Negative input and results
/// that overflow `u64` (n > 20) are domain errors.
pub fn factorial(n: i64) -> Result<u64> {
    if n < 0 {
        return Err(DomainError::NegativeInput {
            function: "factorial",
            value: n,
        }
        .into());
    }

    let mut result: u64 = 1;
    for i in 2..=n as u64 {
        result = result
            .checked_mul(i)
            .ok_or(DomainError::Overflow {
                function: "factorial",
                value: n,
            })?;
    }
    Ok(result)
}

/// The n-th Fibonacci number (0, 1, 1, 2, 3, 5, 8, ...)
///
/// Negative input is a domain error, as is n > 93 (overflow).
pub fn fibonacci(n: i64) -> Result<u64> {
    if n < 0 {
        return Err(DomainError::NegativeInput {
            function: "fibonacci",
            value: n,
        }
        .into());
    }

    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        let next = a.checked_add(b).ok_or(DomainError::Overflow {
            function: "fibonacci",
            value: n,
        })?;
        a = b;
        b = next;
    }
    Ok(a)
}

/// Whether n is prime
///
/// False for anything below 2; trial division up to the square root.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    for i in 2..=n.isqrt() {
        if n % i == 0 {
            return false;
        }
    }
    true
}

/// Sum of a slice; an empty slice sums to 0
pub fn sum_array(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Largest value in a non-empty slice
pub fn max_in_array(values: &[f64]) -> Result<f64> {
    values
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or_else(|| {
            DomainError::EmptySequence {
                function: "max_in_array",
            }
            .into()
        })
}

/// Smallest value in a non-empty slice
pub fn min_in_array(values: &[f64]) -> Result<f64> {
    values
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or_else(|| {
            DomainError::EmptySequence {
                function: "min_in_array",
            }
            .into()
        })
}

/// Whether the value is a whole number strictly greater than zero
pub fn is_positive_integer(n: f64) -> bool {
    n.is_finite() && n > 0.0 && n.fract() == 0.0
}

/// Square every element
pub fn square_array(values: &[f64]) -> Vec<f64> {
    values.iter().map(|x| x * x).collect()
}

/// Keep only even numbers
pub fn filter_even_numbers(values: &[i64]) -> Vec<i64> {
    values.iter().copied().filter(|x| x % 2 == 0).collect()
}

/// Uniform random integer in the inclusive range [min, max]
pub fn random_int(min: i64, max: i64) -> i64 {
    rand::thread_rng().gen_range(min..=max)
}

/// Named four-function calculator
///
/// Division by zero is a domain error rather than a sentinel value.
#[derive(Debug, Clone)]
pub struct Calculator {
    /// Display name for this calculator
    pub name: String,
}

impl Calculator {
    /// Create a calculator with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// a + b
    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    /// a - b
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    /// a * b
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// a / b; b must be non-zero
    pub fn divide(&self, a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            return Err(DomainError::DivideByZero.into());
        }
        Ok(a / b)
    }
}
