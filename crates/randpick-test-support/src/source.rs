//! Test sources — deterministic `RandomSource` implementations.

use randpick_core::source::RandomSource;

/// A source that always returns the lower bound (index 0, range minimum,
/// 0.0 for floats). Suitable for tests that do not depend on specific
/// random values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinSource;

impl RandomSource for MinSource {
    fn next_index(&mut self, _bound: usize) -> usize {
        0
    }

    fn next_i64_range(&mut self, min: i64, _max: i64) -> i64 {
        min
    }

    fn next_u64_range(&mut self, min: u64, _max: u64) -> u64 {
        min
    }

    fn next_f32(&mut self) -> f32 {
        0.0
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// A source that returns indices from a predetermined sequence. Panics if
/// the sequence is exhausted. Used in tests that need specific, repeatable
/// draw outcomes. Integer ranges are served from the same sequence as
/// offsets from the range minimum; floats come from a separate script
/// (empty by default, yielding 0.0).
#[derive(Debug, Clone)]
pub struct SequenceSource {
    indices: Vec<usize>,
    cursor: usize,
    floats: Vec<f64>,
    float_cursor: usize,
}

impl SequenceSource {
    /// Create a new `SequenceSource` serving the given index values.
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            cursor: 0,
            floats: Vec::new(),
            float_cursor: 0,
        }
    }

    /// Adds a scripted sequence of unit-interval floats.
    #[must_use]
    pub fn with_floats(mut self, floats: Vec<f64>) -> Self {
        self.floats = floats;
        self
    }

    fn next_scripted(&mut self) -> usize {
        let value = self.indices[self.cursor];
        self.cursor += 1;
        value
    }
}

impl RandomSource for SequenceSource {
    fn next_index(&mut self, bound: usize) -> usize {
        let value = self.next_scripted();
        assert!(value < bound, "scripted index {value} out of bound {bound}");
        value
    }

    #[allow(clippy::cast_possible_wrap)]
    fn next_i64_range(&mut self, min: i64, _max: i64) -> i64 {
        min + self.next_scripted() as i64
    }

    fn next_u64_range(&mut self, min: u64, _max: u64) -> u64 {
        min + self.next_scripted() as u64
    }

    #[allow(clippy::cast_possible_truncation)]
    fn next_f32(&mut self) -> f32 {
        self.next_f64() as f32
    }

    fn next_f64(&mut self) -> f64 {
        if self.float_cursor >= self.floats.len() {
            return 0.0;
        }
        let value = self.floats[self.float_cursor];
        self.float_cursor += 1;
        value
    }
}
