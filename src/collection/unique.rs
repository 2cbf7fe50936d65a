//! Duplicate removal.

use std::collections::HashSet;
use std::hash::Hash;

use super::traversal::Collection;

/// Returns the elements of `collection` with duplicates removed.
///
/// Only the first occurrence of each value is kept, in encounter order.
/// Equality is the element type's own `Eq`/`Hash`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::uniq;
///
/// assert_eq!(uniq(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
/// assert_eq!(uniq(&["b", "a", "b"]), vec!["b", "a"]);
/// ```
pub fn uniq<C>(collection: &C) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    let mut results = Vec::new();
    collection.each(|value, _, _| {
        if seen.insert(value) {
            results.push(value.clone());
        }
    });
    results
}

/// Returns the elements whose `iterator` key has not been seen before.
///
/// The first element producing each key is kept, in encounter order.
///
/// With `is_sorted` set, the input is assumed to be ordered by key and a
/// single pass compares each key only with the previous one. The result is
/// the same as the unsorted algorithm when that assumption holds; on unsorted
/// input only adjacent duplicates are removed.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::uniq_by;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let by_initial = uniq_by(&words, false, |word| word.chars().next());
/// assert_eq!(by_initial, vec!["apple", "banana", "cherry"]);
///
/// let sorted = [1, 1, 2, 3, 3, 3];
/// assert_eq!(uniq_by(&sorted, true, |value| *value), vec![1, 2, 3]);
/// ```
pub fn uniq_by<C, K, F>(collection: &C, is_sorted: bool, mut iterator: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    K: Eq + Hash,
    F: FnMut(&C::Item) -> K,
{
    let mut results = Vec::new();
    if is_sorted {
        let mut previous: Option<K> = None;
        collection.each(|value, _, _| {
            let key = iterator(value);
            if previous.as_ref() != Some(&key) {
                results.push(value.clone());
                previous = Some(key);
            }
        });
    } else {
        let mut seen = HashSet::new();
        collection.each(|value, _, _| {
            if seen.insert(iterator(value)) {
                results.push(value.clone());
            }
        });
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_uniq_keeps_falsy_values() {
        assert_eq!(uniq(&[0, 0, 1, 0]), vec![0, 1]);
        assert_eq!(uniq(&["", "a", ""]), vec!["", "a"]);
    }

    #[rstest]
    fn test_uniq_does_not_reorder_numeric_values() {
        assert_eq!(uniq(&[10, 2, 10, 1]), vec![10, 2, 1]);
    }

    #[rstest]
    fn test_uniq_by_sorted_matches_unsorted_on_sorted_input() {
        let input = [1, 2, 2, 5, 5, 8];
        assert_eq!(
            uniq_by(&input, true, |value| *value),
            uniq_by(&input, false, |value| *value)
        );
    }

    #[rstest]
    fn test_uniq_by_key_keeps_first_element_of_each_group() {
        let input = [1, 3, 2, 4, 5];
        assert_eq!(uniq_by(&input, false, |value| value % 2), vec![1, 2]);
    }
}
