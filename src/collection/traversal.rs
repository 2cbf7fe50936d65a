//! The traversal primitive.
//!
//! [`Collection`] is the single way this crate walks over data. Every other
//! collection operation is expressed through [`Collection::each`].

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A finite collection that can be visited element by element.
///
/// Two shapes are supported:
///
/// - **Sequences** (`[T]`, `Vec<T>`, `[T; N]`): keys are ascending `usize`
///   indices.
/// - **Mappings** (`BTreeMap<String, V>`, `HashMap<String, V, S>`): keys are
///   the entry names. `BTreeMap` visits them in sorted order, `HashMap` in its
///   own unspecified order.
///
/// The collection is borrowed for the whole traversal, so it cannot be
/// mutated while it is being visited.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Collection;
/// use std::collections::BTreeMap;
///
/// let mut seen = Vec::new();
/// [10, 20, 30].each(|value, index, _| seen.push((index, *value)));
/// assert_eq!(seen, vec![(0, 10), (1, 20), (2, 30)]);
///
/// let mapping = BTreeMap::from([("b".to_string(), 2), ("a".to_string(), 1)]);
/// let mut keys = Vec::new();
/// mapping.each(|_, key, _| keys.push(key.to_string()));
/// assert_eq!(keys, vec!["a", "b"]);
/// ```
pub trait Collection {
    /// The element type.
    type Item;

    /// The key handed to the iterator next to each element.
    type Key<'a>
    where
        Self: 'a;

    /// Calls `iterator(value, key, collection)` once per element.
    ///
    /// No element is skipped or visited twice.
    fn each<'a, F>(&'a self, iterator: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self);
}

impl<T> Collection for [T] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, index, self);
        }
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, index, self);
        }
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, index, self);
        }
    }
}

impl<V> Collection for BTreeMap<String, V> {
    type Item = V;
    type Key<'a>
        = &'a str
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        for (key, value) in self {
            iterator(value, key.as_str(), self);
        }
    }
}

impl<V, S: BuildHasher> Collection for HashMap<String, V, S> {
    type Item = V;
    type Key<'a>
        = &'a str
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        for (key, value) in self {
            iterator(value, key.as_str(), self);
        }
    }
}

/// Calls `iterator(value, key, collection)` once per element of `collection`.
///
/// Free-function form of [`Collection::each`].
///
/// # Examples
///
/// ```rust
/// use underbar::collection::each;
///
/// let mut total = 0;
/// each(&[1, 2, 3], |value, _, _| total += value);
/// assert_eq!(total, 6);
/// ```
#[inline]
pub fn each<'a, C, F>(collection: &'a C, iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item, C::Key<'a>, &'a C),
{
    collection.each(iterator);
}

/// Borrows every element of `collection`, in traversal order.
pub(crate) fn values<C>(collection: &C) -> Vec<&C::Item>
where
    C: Collection + ?Sized,
{
    let mut results = Vec::new();
    collection.each(|value, _, _| results.push(value));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_each_slice_visits_in_index_order() {
        let values: &[char] = &['x', 'y', 'z'];
        let mut visited = Vec::new();
        values.each(|value, index, collection| {
            assert_eq!(collection.len(), 3);
            visited.push((index, *value));
        });
        assert_eq!(visited, vec![(0, 'x'), (1, 'y'), (2, 'z')]);
    }

    #[rstest]
    fn test_each_empty_vec_never_invokes_iterator() {
        let empty: Vec<i32> = Vec::new();
        let mut calls = 0;
        empty.each(|_, _, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_each_hash_map_visits_every_entry_once() {
        let mapping: HashMap<String, i32> =
            HashMap::from([("one".to_string(), 1), ("two".to_string(), 2)]);
        let mut visited = Vec::new();
        mapping.each(|value, key, _| visited.push((key.to_string(), *value)));
        visited.sort();
        assert_eq!(visited, vec![("one".to_string(), 1), ("two".to_string(), 2)]);
    }

    #[rstest]
    fn test_values_borrows_in_order() {
        let numbers = vec![3, 1, 2];
        assert_eq!(values(&numbers), vec![&3, &1, &2]);
    }
}
