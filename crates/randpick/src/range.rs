//! Ranged numeric generation.
//!
//! Integers are drawn inclusively on both ends through the source's
//! bounded primitives; floats are drawn in `[start, end)` by scaling a
//! unit-interval sample. Both require `start < end` — equal bounds are
//! rejected, not treated as a degenerate single-value range.

use randpick_core::error::RandomError;
use randpick_core::source::RandomSource;

/// Integer widths that can be drawn uniformly from an inclusive range.
pub trait RangedInteger: Copy + PartialOrd {
    /// Draws a uniform value in `[start, end]`. Callers guarantee
    /// `start < end`.
    fn draw_between(start: Self, end: Self, source: &mut dyn RandomSource) -> Self;
}

macro_rules! ranged_signed {
    ($($t:ty),*) => {$(
        impl RangedInteger for $t {
            #[allow(clippy::cast_lossless, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            fn draw_between(start: Self, end: Self, source: &mut dyn RandomSource) -> Self {
                source.next_i64_range(start as i64, end as i64) as Self
            }
        }
    )*};
}

macro_rules! ranged_unsigned {
    ($($t:ty),*) => {$(
        impl RangedInteger for $t {
            #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
            fn draw_between(start: Self, end: Self, source: &mut dyn RandomSource) -> Self {
                source.next_u64_range(start as u64, end as u64) as Self
            }
        }
    )*};
}

ranged_signed!(i8, i16, i32, i64, isize);
ranged_unsigned!(u8, u16, u32, u64, usize);

fn validate_range<T: PartialOrd>(op: &'static str, start: T, end: T) -> Result<(), RandomError> {
    if start >= end {
        return Err(RandomError::RangeInvalid { op });
    }
    Ok(())
}

/// Draws an integer uniformly from `[start, end]`, inclusive on both ends.
///
/// # Errors
///
/// Returns [`RandomError::RangeInvalid`] when `start >= end` (equal
/// bounds included).
pub fn random_integer<T: RangedInteger>(
    start: T,
    end: T,
    source: &mut dyn RandomSource,
) -> Result<T, RandomError> {
    validate_range("random_integer", start, end)?;
    Ok(T::draw_between(start, end, source))
}

/// Draws `n` integers independently from `[start, end]`, with replacement.
///
/// # Errors
///
/// Returns [`RandomError::RangeInvalid`] when `start >= end`.
pub fn random_integer_n<T: RangedInteger>(
    start: T,
    end: T,
    n: usize,
    source: &mut dyn RandomSource,
) -> Result<Vec<T>, RandomError> {
    validate_range("random_integer_n", start, end)?;
    Ok((0..n).map(|_| T::draw_between(start, end, source)).collect())
}

/// Draws an `f32` uniformly from `[start, end)`.
///
/// # Errors
///
/// Returns [`RandomError::RangeInvalid`] when `start >= end`.
pub fn random_float32(
    start: f32,
    end: f32,
    source: &mut dyn RandomSource,
) -> Result<f32, RandomError> {
    validate_range("random_float32", start, end)?;
    Ok(start + source.next_f32() * (end - start))
}

/// Draws `n` values of `f32` independently from `[start, end)`, with
/// replacement.
///
/// # Errors
///
/// Returns [`RandomError::RangeInvalid`] when `start >= end`.
pub fn random_float32_n(
    start: f32,
    end: f32,
    n: usize,
    source: &mut dyn RandomSource,
) -> Result<Vec<f32>, RandomError> {
    validate_range("random_float32_n", start, end)?;
    Ok((0..n)
        .map(|_| start + source.next_f32() * (end - start))
        .collect())
}

/// Draws an `f64` uniformly from `[start, end)`.
///
/// # Errors
///
/// Returns [`RandomError::RangeInvalid`] when `start >= end`.
pub fn random_float64(
    start: f64,
    end: f64,
    source: &mut dyn RandomSource,
) -> Result<f64, RandomError> {
    validate_range("random_float64", start, end)?;
    Ok(start + source.next_f64() * (end - start))
}

/// Draws `n` values of `f64` independently from `[start, end)`, with
/// replacement.
///
/// # Errors
///
/// Returns [`RandomError::RangeInvalid`] when `start >= end`.
pub fn random_float64_n(
    start: f64,
    end: f64,
    n: usize,
    source: &mut dyn RandomSource,
) -> Result<Vec<f64>, RandomError> {
    validate_range("random_float64_n", start, end)?;
    Ok((0..n)
        .map(|_| start + source.next_f64() * (end - start))
        .collect())
}
