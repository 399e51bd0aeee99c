//! Uniform single-element selection.

use randpick_core::error::RandomError;
use randpick_core::source::RandomSource;

/// Picks one element of `pool` with uniform probability.
///
/// Works for any element type, including [`Value`](randpick_core::value::Value)
/// for mixed pools.
///
/// # Errors
///
/// Returns [`RandomError::EmptyPool`] if `pool` is empty.
pub fn choice<'a, T>(
    pool: &'a [T],
    source: &mut dyn RandomSource,
) -> Result<&'a T, RandomError> {
    if pool.is_empty() {
        return Err(RandomError::EmptyPool { op: "choice" });
    }
    Ok(&pool[source.next_index(pool.len())])
}

/// Fair coin flip: returns `true` or `false` with equal probability.
pub fn random_bool(source: &mut dyn RandomSource) -> bool {
    source.next_index(2) == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use randpick_test_support::SequenceSource;

    #[test]
    fn test_choice_returns_the_element_at_the_drawn_index() {
        let pool = ["heads", "tails"];
        let mut source = SequenceSource::new(vec![1, 0, 1]);

        assert_eq!(*choice(&pool, &mut source).unwrap(), "tails");
        assert_eq!(*choice(&pool, &mut source).unwrap(), "heads");
        assert_eq!(*choice(&pool, &mut source).unwrap(), "tails");
    }

    #[test]
    fn test_choice_on_empty_pool_is_an_error() {
        let pool: [i64; 0] = [];
        let mut source = SequenceSource::new(vec![]);

        let err = choice(&pool, &mut source).unwrap_err();
        assert!(matches!(err, RandomError::EmptyPool { op: "choice" }));
    }

    #[test]
    fn test_choice_on_single_element_pool_returns_it() {
        let pool = [42];
        let mut source = SequenceSource::new(vec![0]);

        assert_eq!(*choice(&pool, &mut source).unwrap(), 42);
    }

    #[test]
    fn test_random_bool_maps_indices_to_both_outcomes() {
        let mut source = SequenceSource::new(vec![1, 0]);

        assert!(random_bool(&mut source));
        assert!(!random_bool(&mut source));
    }
}
