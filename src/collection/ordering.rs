//! Stable, key-based ordering.

use super::derived::map;
use super::record::Record;
use super::traversal::Collection;

/// Sorts elements by the key `iterator` computes for each of them.
///
/// The sort is stable: elements with equal keys keep their original
/// relative order. Keys are compared with their own `Ord`, so numbers order
/// numerically; map keys to strings first to get lexicographic order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::sort_by;
///
/// let words = ["banana", "fig", "apple", "kiwi"];
/// assert_eq!(sort_by(&words, |word| word.len()), vec!["fig", "kiwi", "apple", "banana"]);
///
/// let numbers = [10, 9, 100];
/// assert_eq!(sort_by(&numbers, |value| *value), vec![9, 10, 100]);
/// assert_eq!(sort_by(&numbers, |value| value.to_string()), vec![10, 100, 9]);
/// ```
pub fn sort_by<C, K, F>(collection: &C, mut iterator: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    K: Ord,
    F: FnMut(&C::Item) -> K,
{
    let mut keyed = map(collection, |value| (iterator(value), value.clone()));
    keyed.sort_by(|(left, _), (right, _)| left.cmp(right));
    keyed.into_iter().map(|(_, value)| value).collect()
}

/// Sorts [`Record`] elements by the named field.
///
/// Elements without the field are placed after all others. Ties, including
/// among elements without the field, keep their original order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{pluck, sort_by_field};
/// use std::collections::BTreeMap;
///
/// let people = vec![
///     BTreeMap::from([("age".to_string(), 3)]),
///     BTreeMap::from([("id".to_string(), 0)]),
///     BTreeMap::from([("age".to_string(), 1)]),
///     BTreeMap::from([("age".to_string(), 2)]),
/// ];
/// let sorted = sort_by_field(&people, "age");
/// assert_eq!(pluck(&sorted, "age"), vec![Some(1), Some(2), Some(3), None]);
/// ```
pub fn sort_by_field<C>(collection: &C, name: &str) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Record + Clone,
    <C::Item as Record>::Value: Ord + Clone,
{
    sort_by(collection, |item| {
        let value = item.field(name).cloned();
        (value.is_none(), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_sort_by_is_stable_for_equal_keys() {
        let pairs = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let sorted = sort_by(&pairs, |(key, _)| *key);
        assert_eq!(sorted, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[rstest]
    fn test_sort_by_empty_collection() {
        let empty: Vec<i32> = Vec::new();
        assert!(sort_by(&empty, |value| *value).is_empty());
    }
}
