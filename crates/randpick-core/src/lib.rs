//! Randpick Core — shared abstractions for the randpick utilities.
//!
//! This crate defines the random source trait and its production
//! implementations, the error model, and the tagged value type used
//! for heterogeneous pools. It contains no selection logic.

pub mod error;
pub mod source;
pub mod value;
