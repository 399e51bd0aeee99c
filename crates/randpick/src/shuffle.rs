//! In-place uniform shuffling.

use randpick_core::source::RandomSource;

/// Permutes `items` uniformly at random in place (Fisher–Yates).
///
/// A slice of length 0 or 1 is left untouched. Never fails.
pub fn shuffle<T>(items: &mut [T], source: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = source.next_index(i + 1);
        items.swap(i, j);
    }
}
