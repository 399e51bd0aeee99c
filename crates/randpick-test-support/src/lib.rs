//! Shared deterministic random sources for randpick tests.

mod source;

pub use source::{MinSource, SequenceSource};
