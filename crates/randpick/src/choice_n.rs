//! Selection of N elements without replacement.

use randpick_core::error::RandomError;
use randpick_core::source::RandomSource;
use randpick_core::value::Value;

/// Draws `n` elements from `pool` without replacement, in draw order.
///
/// After each draw the first value-equal occurrence is swap-removed from
/// the remaining candidates, so no drawn entry is returned twice. When the
/// input contains duplicate values the removal may eliminate a different
/// occurrence than the one drawn, and a remaining duplicate can still be
/// drawn later; pools of distinct values always yield distinct results.
///
/// # Errors
///
/// Returns [`RandomError::ExceedsPoolSize`] if `n > pool.len()`.
pub fn choice_n<T>(
    n: usize,
    pool: &[T],
    source: &mut dyn RandomSource,
) -> Result<Vec<T>, RandomError>
where
    T: Clone + PartialEq,
{
    choice_n_inner("choice_n", n, pool, source)
}

/// Draws `n` elements from a mixed-type pool without replacement.
///
/// # Errors
///
/// Returns [`RandomError::ExceedsPoolSize`] if `n > pool.len()`, or
/// [`RandomError::UnsupportedElementType`] if any candidate is a
/// composite ([`Value::List`]) — composites cannot be safely removed by
/// value equality in the deduplication step, so they are rejected up
/// front rather than silently mishandled.
pub fn choice_n_mixed(
    n: usize,
    pool: &[Value],
    source: &mut dyn RandomSource,
) -> Result<Vec<Value>, RandomError> {
    const OP: &str = "choice_n_mixed";
    if n > pool.len() {
        return Err(RandomError::ExceedsPoolSize {
            op: OP,
            requested: n,
            available: pool.len(),
        });
    }
    if pool.iter().any(Value::is_composite) {
        return Err(RandomError::UnsupportedElementType { op: OP });
    }
    choice_n_inner(OP, n, pool, source)
}

fn choice_n_inner<T>(
    op: &'static str,
    n: usize,
    pool: &[T],
    source: &mut dyn RandomSource,
) -> Result<Vec<T>, RandomError>
where
    T: Clone + PartialEq,
{
    if n > pool.len() {
        return Err(RandomError::ExceedsPoolSize {
            op,
            requested: n,
            available: pool.len(),
        });
    }
    let mut candidates = pool.to_vec();
    let mut drawn = Vec::with_capacity(n);
    for _ in 0..n {
        let index = source.next_index(candidates.len());
        let value = candidates[index].clone();
        // Remove by value, not by the drawn index: the first equal
        // occurrence goes, swap-remove keeps removal O(1).
        if let Some(position) = candidates.iter().position(|c| *c == value) {
            candidates.swap_remove(position);
        }
        drawn.push(value);
    }
    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use randpick_test_support::SequenceSource;

    #[test]
    fn test_choice_n_returns_n_values_in_draw_order() {
        let pool = [10, 20, 30];
        // Draw index 1 (20); candidates become [10, 30]; draw index 0 (10).
        let mut source = SequenceSource::new(vec![1, 0]);

        let drawn = choice_n(2, &pool, &mut source).unwrap();
        assert_eq!(drawn, vec![20, 10]);
    }

    #[test]
    fn test_choice_n_never_repeats_a_distinct_entry() {
        let pool = [10, 20, 30];
        // Always draw index 0: candidates shrink 3 -> 2 -> 1.
        let mut source = SequenceSource::new(vec![0, 0, 0]);

        let drawn = choice_n(3, &pool, &mut source).unwrap();
        assert_eq!(drawn.len(), 3);
        for v in &pool {
            assert!(drawn.contains(v));
        }
    }

    #[test]
    fn test_choice_n_fails_when_n_exceeds_pool() {
        let pool = [10, 20, 30];
        let mut source = SequenceSource::new(vec![]);

        let err = choice_n(4, &pool, &mut source).unwrap_err();
        match err {
            RandomError::ExceedsPoolSize {
                op,
                requested,
                available,
            } => {
                assert_eq!(op, "choice_n");
                assert_eq!(requested, 4);
                assert_eq!(available, 3);
            }
            other => panic!("expected ExceedsPoolSize, got {other:?}"),
        }
    }

    #[test]
    fn test_choice_n_of_zero_draws_nothing() {
        let pool = ["a", "b"];
        let mut source = SequenceSource::new(vec![]);

        let drawn = choice_n(0, &pool, &mut source).unwrap();
        assert!(drawn.is_empty());
    }

    #[test]
    fn test_choice_n_removes_the_first_equal_occurrence() {
        // Pool with a duplicate: drawing the second "b" removes the
        // first one, leaving the drawn occurrence available again.
        let pool = ["a", "b", "b"];
        // Draw index 2 ("b"); removal hits index 1, swap-remove leaves
        // ["a", "b"]; draw index 1 ("b") again.
        let mut source = SequenceSource::new(vec![2, 1]);

        let drawn = choice_n(2, &pool, &mut source).unwrap();
        assert_eq!(drawn, vec!["b", "b"]);
    }

    #[test]
    fn test_choice_n_mixed_draws_across_types() {
        let pool = [
            Value::from("a"),
            Value::from(47_i64),
            Value::from(false),
        ];
        let mut source = SequenceSource::new(vec![1, 1]);

        let drawn = choice_n_mixed(2, &pool, &mut source).unwrap();
        assert_eq!(drawn.len(), 2);
        assert_eq!(drawn[0], Value::Int(47));
        // After swap-removal candidates are ["a", false].
        assert_eq!(drawn[1], Value::Bool(false));
    }

    #[test]
    fn test_choice_n_mixed_rejects_composite_elements() {
        let pool = [Value::from("a"), Value::from(vec![1_i64, 2])];
        let mut source = SequenceSource::new(vec![]);

        let err = choice_n_mixed(1, &pool, &mut source).unwrap_err();
        assert!(matches!(
            err,
            RandomError::UnsupportedElementType {
                op: "choice_n_mixed"
            }
        ));
    }

    #[test]
    fn test_choice_n_mixed_checks_pool_size_before_element_types() {
        let pool = [Value::from(vec![1_i64])];
        let mut source = SequenceSource::new(vec![]);

        let err = choice_n_mixed(2, &pool, &mut source).unwrap_err();
        assert!(matches!(err, RandomError::ExceedsPoolSize { .. }));
    }
}
