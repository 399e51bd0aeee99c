//! Convenience layer over the process-wide generator.
//!
//! Mirrors every operation of the crate root, drawing from the shared
//! generator so callers need no setup at all. Reseed it through
//! [`seed_global`](randpick_core::source::seed_global) for reproducible
//! runs.

use randpick_core::error::RandomError;
use randpick_core::source;
use randpick_core::value::Value;

use crate::range::RangedInteger;

/// Picks one element of `pool` with uniform probability.
///
/// # Errors
///
/// Returns [`RandomError::EmptyPool`] if `pool` is empty.
pub fn choice<T>(pool: &[T]) -> Result<&T, RandomError> {
    crate::choice(pool, &mut source::global())
}

/// Fair coin flip.
#[must_use]
pub fn random_bool() -> bool {
    crate::random_bool(&mut source::global())
}

/// Draws `n` elements from `pool` without replacement.
///
/// # Errors
///
/// Returns [`RandomError::ExceedsPoolSize`] if `n > pool.len()`.
pub fn choice_n<T: Clone + PartialEq>(n: usize, pool: &[T]) -> Result<Vec<T>, RandomError> {
    crate::choice_n(n, pool, &mut source::global())
}

/// Draws `n` elements from a mixed-type pool without replacement.
///
/// # Errors
///
/// Returns [`RandomError::ExceedsPoolSize`] if `n > pool.len()`, or
/// [`RandomError::UnsupportedElementType`] if any candidate is composite.
pub fn choice_n_mixed(n: usize, pool: &[Value]) -> Result<Vec<Value>, RandomError> {
    crate::choice_n_mixed(n, pool, &mut source::global())
}

/// Permutes `items` uniformly at random in place.
pub fn shuffle<T>(items: &mut [T]) {
    crate::shuffle(items, &mut source::global());
}

/// Draws an integer uniformly from `[start, end]`.
///
/// # Errors
///
/// Returns [`RandomError::RangeInvalid`] when `start >= end`.
pub fn random_integer<T: RangedInteger>(start: T, end: T) -> Result<T, RandomError> {
    crate::random_integer(start, end, &mut source::global())
}

/// Draws `n` integers independently from `[start, end]`.
///
/// # Errors
///
/// Returns [`RandomError::RangeInvalid`] when `start >= end`.
pub fn random_integer_n<T: RangedInteger>(
    start: T,
    end: T,
    n: usize,
) -> Result<Vec<T>, RandomError> {
    crate::random_integer_n(start, end, n, &mut source::global())
}

/// Draws an `f32` uniformly from `[start, end)`.
///
/// # Errors
///
/// Returns [`RandomError::RangeInvalid`] when `start >= end`.
pub fn random_float32(start: f32, end: f32) -> Result<f32, RandomError> {
    crate::random_float32(start, end, &mut source::global())
}

/// Draws `n` values of `f32` independently from `[start, end)`.
///
/// # Errors
///
/// Returns [`RandomError::RangeInvalid`] when `start >= end`.
pub fn random_float32_n(start: f32, end: f32, n: usize) -> Result<Vec<f32>, RandomError> {
    crate::random_float32_n(start, end, n, &mut source::global())
}

/// Draws an `f64` uniformly from `[start, end)`.
///
/// # Errors
///
/// Returns [`RandomError::RangeInvalid`] when `start >= end`.
pub fn random_float64(start: f64, end: f64) -> Result<f64, RandomError> {
    crate::random_float64(start, end, &mut source::global())
}

/// Draws `n` values of `f64` independently from `[start, end)`.
///
/// # Errors
///
/// Returns [`RandomError::RangeInvalid`] when `start >= end`.
pub fn random_float64_n(start: f64, end: f64, n: usize) -> Result<Vec<f64>, RandomError> {
    crate::random_float64_n(start, end, n, &mut source::global())
}

/// Draws one string from `pool` and parses it as a base-10 integer.
///
/// # Errors
///
/// Returns [`RandomError::EmptyPool`] or [`RandomError::ParseInt`].
pub fn parse_integer<S: AsRef<str>>(pool: &[S]) -> Result<i64, RandomError> {
    crate::parse_integer(pool, &mut source::global())
}

/// Draws one integer from `pool` and formats it as a base-10 string.
///
/// # Errors
///
/// Returns [`RandomError::EmptyPool`] if `pool` is empty.
pub fn format_integer(pool: &[i64]) -> Result<String, RandomError> {
    crate::format_integer(pool, &mut source::global())
}

/// Draws one string from `pool` and returns it double-quoted.
///
/// # Errors
///
/// Returns [`RandomError::EmptyPool`] if `pool` is empty.
pub fn quote<S: AsRef<str>>(pool: &[S]) -> Result<String, RandomError> {
    crate::quote(pool, &mut source::global())
}

/// Draws one double-quoted string from `pool` and unescapes it.
///
/// # Errors
///
/// Returns [`RandomError::EmptyPool`] or [`RandomError::MalformedQuote`].
pub fn unquote<S: AsRef<str>>(pool: &[S]) -> Result<String, RandomError> {
    crate::unquote(pool, &mut source::global())
}
