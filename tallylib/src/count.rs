//! Predicate counting over sequences.
//!
//! This module provides the main entry points for counting the elements of
//! a [`Sequence`] that satisfy a predicate. The representation of the
//! sequence is inspected once per call and the matching iteration strategy
//! is used: direct positional reads for contiguous storage, getter reads
//! for accessor-backed storage. Both strategies produce identical counts
//! for element-equivalent inputs.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::sequence::{Accessor, Elements, Sequence};

/// Count the elements of `x` for which `predicate` returns `true`.
///
/// The predicate receives each element and its index, in order. State the
/// predicate needs lives in its captures; see [`count_if_with`] for an
/// explicitly threaded context.
///
/// # Example
///
/// ```rust
/// use tallylib::count_if;
///
/// let values = [0.0, 1.0, 0.0, 1.0, 2.0];
/// assert_eq!(count_if(&values, |v, _| *v > 0.0), 3);
/// ```
pub fn count_if<S, P>(x: &S, predicate: P) -> usize
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item, usize) -> bool,
{
    match x.elements() {
        Elements::Direct(items) => count_direct(items, predicate),
        Elements::Accessed(items) => count_accessed(items, predicate),
    }
}

/// Direct strategy: read elements by positional access.
fn count_direct<T, P>(items: &[T], mut predicate: P) -> usize
where
    P: FnMut(&T, usize) -> bool,
{
    let mut matched = 0;
    for (index, item) in items.iter().enumerate() {
        if predicate(item, index) {
            matched += 1;
        }
    }
    matched
}

/// Accessor strategy: materialize elements through the resolved getter.
fn count_accessed<T, P>(items: &dyn Accessor<Item = T>, mut predicate: P) -> usize
where
    P: FnMut(&T, usize) -> bool,
{
    let mut matched = 0;
    for index in 0..items.len() {
        let item = items.get(index);
        if predicate(&item, index) {
            matched += 1;
        }
    }
    matched
}

/// Count with an explicitly threaded predicate context.
///
/// Equivalent to [`count_if`] with the context captured, but keeps the
/// mutable state visible in the signature: the predicate receives
/// `(&mut context, element, index)`.
///
/// # Example
///
/// ```rust
/// use tallylib::count_if_with;
///
/// let values = [1.0, -1.0, 2.0];
/// let mut seen = Vec::new();
/// let positive = count_if_with(&values, &mut seen, |seen, v, _| {
///     seen.push(*v);
///     *v > 0.0
/// });
/// assert_eq!(positive, 2);
/// assert_eq!(seen.len(), values.len());
/// ```
pub fn count_if_with<S, C, P>(x: &S, context: &mut C, mut predicate: P) -> usize
where
    S: Sequence + ?Sized,
    P: FnMut(&mut C, &S::Item, usize) -> bool,
{
    count_if(x, |item, index| predicate(context, item, index))
}

/// Matched and scanned element counts for one counting pass.
///
/// Summaries from several passes add together, so per-file results
/// aggregate into totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountSummary {
    /// Elements the predicate accepted
    pub matched: u64,
    /// Elements visited
    pub scanned: u64,
}

impl CountSummary {
    /// Create a new empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Matched share of scanned elements, `0.0` for empty input.
    pub fn fraction(&self) -> f64 {
        if self.scanned == 0 {
            0.0
        } else {
            self.matched as f64 / self.scanned as f64
        }
    }
}

impl Add for CountSummary {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            matched: self.matched + other.matched,
            scanned: self.scanned + other.scanned,
        }
    }
}

impl AddAssign for CountSummary {
    fn add_assign(&mut self, other: Self) {
        self.matched += other.matched;
        self.scanned += other.scanned;
    }
}

/// Count and return a [`CountSummary`] alongside the scanned length.
pub fn summarize<S, P>(x: &S, predicate: P) -> CountSummary
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item, usize) -> bool,
{
    CountSummary {
        matched: count_if(x, predicate) as u64,
        scanned: x.len() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{ComplexSlice, Strided};

    #[test]
    fn test_empty_sequence_counts_zero() {
        let empty: Vec<f64> = Vec::new();
        assert_eq!(count_if(&empty, |_, _| true), 0);
        assert_eq!(count_if(&empty, |_, _| false), 0);

        let view = Strided::new(&empty[..], 0, 2, 0).unwrap();
        assert_eq!(count_if(&view, |_, _| true), 0);
    }

    #[test]
    fn test_always_true_counts_length() {
        let values = vec![5, 6, 7, 8];
        assert_eq!(count_if(&values, |_, _| true), values.len());
    }

    #[test]
    fn test_always_false_counts_zero() {
        let values = vec![5, 6, 7, 8];
        assert_eq!(count_if(&values, |_, _| false), 0);
    }

    #[test]
    fn test_count_positive() {
        let values = [0.0, 1.0, 0.0, 1.0, 2.0];
        assert_eq!(count_if(&values, |v, _| *v > 0.0), 3);
    }

    #[test]
    fn test_predicate_sees_indices_in_order() {
        let values = [10, 20, 30];
        let mut indices = Vec::new();
        count_if(&values, |_, index| {
            indices.push(index);
            true
        });
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_strategies_agree() {
        // The same logical elements through three representations.
        let plain = [0.0, 1.0, 0.0, 1.0, 2.0];
        let padded = [0.0, 9.0, 1.0, 9.0, 0.0, 9.0, 1.0, 9.0, 2.0];
        let spaced = Strided::new(&padded, 5, 2, 0).unwrap();
        let contiguous = Strided::new(&plain, 5, 1, 0).unwrap();

        let positive = |v: &f64, _: usize| *v > 0.0;
        let direct = count_if(&plain[..], positive);
        assert_eq!(count_if(&spaced, positive), direct);
        assert_eq!(count_if(&contiguous, positive), direct);
        assert_eq!(direct, 3);
    }

    #[test]
    fn test_reversed_view_counts_the_same() {
        let values = [1.0, -2.0, 3.0, -4.0];
        let reversed = Strided::new(&values, 4, -1, 3).unwrap();
        let positive = |v: &f64, _: usize| *v > 0.0;
        assert_eq!(count_if(&reversed, positive), count_if(&values[..], positive));
    }

    #[test]
    fn test_complex_both_parts_positive() {
        let parts = [0.0, 0.0, 1.0, 0.0, 3.0, 4.0, 0.0, 5.0];
        let numbers = ComplexSlice::new(&parts).unwrap();
        assert_eq!(count_if(&numbers, |z, _| z.re > 0.0 && z.im > 0.0), 1);
    }

    #[test]
    fn test_captured_context_called_once_per_element() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut calls = 0;
        count_if(&values, |v, _| {
            calls += 1;
            *v > 2.0
        });
        assert_eq!(calls, values.len());
    }

    #[test]
    fn test_threaded_context_called_once_per_element() {
        struct Tracker {
            calls: usize,
        }

        let values = [0.0, 1.0, 0.0];
        let mut tracker = Tracker { calls: 0 };
        let matched = count_if_with(&values, &mut tracker, |ctx, v, _| {
            ctx.calls += 1;
            *v > 0.0
        });
        assert_eq!(matched, 1);
        assert_eq!(tracker.calls, values.len());
    }

    #[test]
    fn test_summary_fraction() {
        let summary = CountSummary {
            matched: 3,
            scanned: 5,
        };
        assert!((summary.fraction() - 0.6).abs() < 1e-12);
        assert_eq!(CountSummary::new().fraction(), 0.0);
    }

    #[test]
    fn test_summary_add() {
        let a = CountSummary {
            matched: 3,
            scanned: 5,
        };
        let b = CountSummary {
            matched: 1,
            scanned: 4,
        };
        let sum = a + b;
        assert_eq!(sum.matched, 4);
        assert_eq!(sum.scanned, 9);

        let mut acc = CountSummary::new();
        acc += a;
        acc += b;
        assert_eq!(acc, sum);
    }

    #[test]
    fn test_summarize() {
        let values = [0.0, 1.0, 0.0, 1.0, 2.0];
        let summary = summarize(&values, |v, _| *v > 0.0);
        assert_eq!(summary.matched, 3);
        assert_eq!(summary.scanned, 5);
    }
}
