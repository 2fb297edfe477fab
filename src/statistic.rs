use crate::Value;

/// A univariate statistic computed over a stream of values.
///
/// Implementors carry a running accumulator (the *storeless* path: no input
/// is retained), and additionally provide a stateless batch evaluation over
/// a slice range.
///
/// Instances are not synchronized; use one per logical stream, or guard
/// mutating calls externally.
pub trait Statistic {
    /// Folds one value into the running state.
    ///
    /// Accepts any value, including NaN and the infinities.
    fn increment(&mut self, value: Value);

    /// Resets the running state as if no value had been seen.
    fn clear(&mut self);

    /// The current result, or NaN if no result is defined yet.
    fn result(&self) -> Value;

    /// Number of values folded in since creation or the last [`clear`](Self::clear).
    ///
    /// Every increment counts, NaN inputs included.
    fn count(&self) -> u64;

    /// Evaluates the statistic over `values[begin..begin + length]` without
    /// touching the running state.
    ///
    /// Empty and out-of-bounds ranges mean "no data" and yield NaN.
    fn evaluate(&self, values: &[Value], begin: usize, length: usize) -> Value;

    /// Folds a whole slice into the running state.
    fn increment_all(&mut self, values: &[Value]) {
        for &value in values {
            self.increment(value);
        }
    }

    /// Evaluates the statistic over a whole slice.
    fn evaluate_all(&self, values: &[Value]) -> Value {
        self.evaluate(values, 0, values.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Max, Min};

    #[test_log::test]
    fn statistics_are_object_safe() {
        let mut stats: Vec<Box<dyn Statistic>> = vec![Box::new(Min::new()), Box::new(Max::new())];

        for stat in &mut stats {
            stat.increment_all(&[4.0, 8.0, 6.0]);
        }

        assert_eq!(stats[0].result(), 4.0);
        assert_eq!(stats[1].result(), 8.0);
        assert!(stats.iter().all(|stat| stat.count() == 3));
    }

    #[test_log::test]
    fn increment_all_matches_single_increments() {
        let mut a = Min::new();
        a.increment_all(&[3.0, 7.0, 2.0]);

        let mut b = Min::new();
        b.increment(3.0);
        b.increment(7.0);
        b.increment(2.0);

        assert_eq!(a.result(), b.result());
        assert_eq!(a.count(), b.count());
    }
}
