//! Randpick — randomized selection utilities.
//!
//! Pick one or several random elements from a pool, shuffle a pool in
//! place, generate random integers and floats within a range, and apply
//! random choices to a few string-conversion helpers.
//!
//! Every operation takes a [`RandomSource`] so callers control where
//! randomness comes from; the [`global`] module mirrors the whole API
//! against a process-wide generator for callers that do not care.
//!
//! ```
//! use randpick::source::SeededSource;
//!
//! let mut source = SeededSource::new(7);
//! let side = randpick::choice(&["heads", "tails"], &mut source)?;
//! assert!(["heads", "tails"].contains(side));
//! # Ok::<(), randpick::RandomError>(())
//! ```

mod choice;
mod choice_n;
mod convert;
pub mod global;
mod range;
mod shuffle;

pub use choice::{choice, random_bool};
pub use choice_n::{choice_n, choice_n_mixed};
pub use convert::{format_integer, parse_integer, quote, unquote};
pub use range::{
    RangedInteger, random_float32, random_float32_n, random_float64, random_float64_n,
    random_integer, random_integer_n,
};
pub use shuffle::shuffle;

pub use randpick_core::error::RandomError;
pub use randpick_core::source::{self, RandomSource, seed_global};
pub use randpick_core::value::Value;
