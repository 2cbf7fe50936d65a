//! Operations over several sequences at once.
//!
//! - [`zip`] / [`zip2`]: align sequences by index
//! - [`flatten`]: expand arbitrarily nested sequences
//! - [`intersection`]: values shared by every sequence
//! - [`difference`]: values of one sequence absent from the others
//!
//! Membership uses the element type's `Eq` and `Hash`, so values are only
//! merged when they are genuinely equal.

use std::collections::HashSet;
use std::hash::Hash;

use super::derived::{every, map, reduce, reject};
use super::unique::uniq;

/// Aligns sequences by index.
///
/// Row `i` holds element `i` of every input, with `None` where an input is
/// shorter than `i + 1`. The result is as long as the longest input.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::zip;
///
/// let rows = zip(&[vec![1, 2, 3], vec![4, 5]]);
/// assert_eq!(
///     rows,
///     vec![
///         vec![Some(1), Some(4)],
///         vec![Some(2), Some(5)],
///         vec![Some(3), None],
///     ]
/// );
/// ```
pub fn zip<T, S>(arrays: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let longest = reduce(
        arrays,
        |longest: usize, array| longest.max(array.as_ref().len()),
        0,
    );
    (0..longest)
        .map(|index| map(arrays, |array| array.as_ref().get(index).cloned()))
        .collect()
}

/// Aligns two sequences of possibly different element types.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::zip2;
///
/// let pairs = zip2(&['a', 'b', 'c', 'd'], &[1, 2, 3]);
/// assert_eq!(
///     pairs,
///     vec![
///         (Some('a'), Some(1)),
///         (Some('b'), Some(2)),
///         (Some('c'), Some(3)),
///         (Some('d'), None),
///     ]
/// );
/// ```
pub fn zip2<A, B>(left: &[A], right: &[B]) -> Vec<(Option<A>, Option<B>)>
where
    A: Clone,
    B: Clone,
{
    (0..left.len().max(right.len()))
        .map(|index| (left.get(index).cloned(), right.get(index).cloned()))
        .collect()
}

/// A value or an arbitrarily deep list of values.
///
/// Build literals with the [`nested!`](crate::nested) macro.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A plain value.
    Leaf(T),
    /// A list of further nested values.
    List(Vec<Nested<T>>),
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Self::List(items)
    }
}

/// Builds a `Vec<Nested<T>>` from a bracketed literal.
///
/// Each item is either a single token tree (a literal, an identifier, a
/// parenthesized expression) that becomes a [`Nested::Leaf`], or a bracketed
/// group that becomes a [`Nested::List`].
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Nested;
/// use underbar::nested;
///
/// let value = nested![1, [2, [3]]];
/// assert_eq!(
///     value,
///     vec![
///         Nested::Leaf(1),
///         Nested::List(vec![Nested::Leaf(2), Nested::List(vec![Nested::Leaf(3)])]),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! nested {
    (@item [$($inner:tt)*]) => {
        $crate::collection::Nested::List($crate::nested![$($inner)*])
    };
    (@item $leaf:tt) => {
        $crate::collection::Nested::Leaf($leaf)
    };
    ($($item:tt),* $(,)?) => {
        vec![$($crate::nested!(@item $item)),*]
    };
}

/// Flattens nested sequences into one sequence, left to right.
///
/// Depth is unbounded; the traversal keeps its own stack instead of
/// recursing.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::flatten;
/// use underbar::nested;
///
/// assert_eq!(flatten(&nested![1, [2, [3, [4]], 5]]), vec![1, 2, 3, 4, 5]);
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    let mut results = Vec::new();
    let mut stack = vec![nested.iter()];
    while let Some(level) = stack.last_mut() {
        match level.next() {
            Some(Nested::Leaf(value)) => results.push(value.clone()),
            Some(Nested::List(children)) => stack.push(children.iter()),
            None => {
                stack.pop();
            }
        }
    }
    results
}

/// Returns the distinct values present in every input sequence.
///
/// Values are ordered as first encountered in the first sequence. No input
/// yields an empty result; a single input yields its distinct values.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::intersection;
///
/// let shared = intersection(&[vec![1, 2, 3], vec![2, 3, 4], vec![2, 3, 5]]);
/// assert_eq!(shared, vec![2, 3]);
/// ```
pub fn intersection<T, S>(arrays: &[S]) -> Vec<T>
where
    T: Eq + Hash + Clone,
    S: AsRef<[T]>,
{
    let Some((head, rest)) = arrays.split_first() else {
        return Vec::new();
    };
    let others: Vec<HashSet<&T>> = rest
        .iter()
        .map(|array| array.as_ref().iter().collect())
        .collect();
    let mut shared = uniq(head.as_ref());
    shared.retain(|value| every(&others, |members| members.contains(value)));
    shared
}

/// Returns the elements of `array` that appear in none of `others`.
///
/// Order and repetitions of `array` are preserved.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4], &[vec![2, 4]]), vec![1, 3]);
/// assert_eq!(difference(&[1, 2, 3, 4, 5], &[vec![1], vec![5, 9]]), vec![2, 3, 4]);
/// ```
pub fn difference<T, S>(array: &[T], others: &[S]) -> Vec<T>
where
    T: Eq + Hash + Clone,
    S: AsRef<[T]>,
{
    let excluded: HashSet<&T> = others
        .iter()
        .flat_map(|other| other.as_ref().iter())
        .collect();
    reject(array, |value| excluded.contains(value))
}
