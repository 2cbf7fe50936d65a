//! Operations derived from [`Collection::each`].
//!
//! Every function here walks its input exactly once through the traversal
//! primitive, either directly or through [`reduce`], and never mutates it.

use super::record::Record;
use super::traversal::{Collection, values};
use crate::combinator::Truthy;

/// Returns the first element of `array`, or `None` if it is empty.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<T>(array: &[T]) -> Option<&T> {
    array.first()
}

/// Returns the first `count` elements of `array`.
///
/// A `count` larger than the array yields the whole array.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// assert!(first_n(&[1, 2, 3], 0).is_empty());
/// ```
#[inline]
pub fn first_n<T>(array: &[T], count: usize) -> &[T] {
    &array[..count.min(array.len())]
}

/// Returns the last element of `array`, or `None` if it is empty.
#[inline]
pub fn last<T>(array: &[T]) -> Option<&T> {
    array.last()
}

/// Returns the last `count` elements of `array`.
///
/// A `count` larger than the array yields the whole array.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), &[2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// ```
#[inline]
pub fn last_n<T>(array: &[T], count: usize) -> &[T] {
    &array[array.len().saturating_sub(count)..]
}

/// Returns the index of the first element equal to `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::index_of;
///
/// assert_eq!(index_of(&[10, 20, 30, 20], &20), Some(1));
/// assert_eq!(index_of(&[10, 20, 30], &40), None);
/// ```
pub fn index_of<T: PartialEq>(array: &[T], target: &T) -> Option<usize> {
    let mut result = None;
    array.each(|item, index, _| {
        if result.is_none() && item == target {
            result = Some(index);
        }
    });
    result
}

/// Applies `iterator` to every element and collects the results.
///
/// The output has the same length and order as the traversal. For mappings
/// the values are mapped and the keys dropped.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::map;
///
/// assert_eq!(map(&[1, 2, 3], |value| value * 10), vec![10, 20, 30]);
/// ```
pub fn map<C, B, F>(collection: &C, mut iterator: F) -> Vec<B>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> B,
{
    let mut results = Vec::new();
    collection.each(|value, _, _| results.push(iterator(value)));
    results
}

/// Keeps the elements for which `predicate` returns `true`, in order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::filter;
///
/// assert_eq!(filter(&[1, 2, 3, 4, 5], |value| value % 2 == 1), vec![1, 3, 5]);
/// ```
pub fn filter<C, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    let mut results = Vec::new();
    collection.each(|value, _, _| {
        if predicate(value) {
            results.push(value.clone());
        }
    });
    results
}

/// Keeps the elements for which `predicate` returns `false`, in order.
///
/// This is [`filter`] with the predicate negated.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reject;
///
/// assert_eq!(reject(&[1, 2, 3, 4, 5], |value| value % 2 == 1), vec![2, 4]);
/// ```
pub fn reject<C, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    filter(collection, |value| !predicate(value))
}

/// Left-folds `collection` starting from `initial`.
///
/// `iterator(accumulator, element)` is called once per element, the first
/// element included. An empty collection returns `initial` without calling
/// the iterator.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3], |total, value| total + value, 0), 6);
/// assert_eq!(reduce::<[i32], _, _>(&[], |total, value| total + value, 10), 10);
/// ```
pub fn reduce<C, B, F>(collection: &C, mut iterator: F, initial: B) -> B
where
    C: Collection + ?Sized,
    F: FnMut(B, &C::Item) -> B,
{
    values(collection)
        .into_iter()
        .fold(initial, |accumulator, value| iterator(accumulator, value))
}

/// Left-folds `collection` using its first element as the seed.
///
/// The iterator is first called with the first element as the accumulator
/// and the second element as the value, so a single-element collection
/// returns that element without calling the iterator at all. An empty
/// collection returns `None`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce_unseeded;
///
/// assert_eq!(reduce_unseeded(&[1, 2, 3], |total, value| total + value), Some(6));
/// assert_eq!(reduce_unseeded(&[5], |total, value| total + value * value), Some(5));
/// assert_eq!(reduce_unseeded::<[i32], _>(&[], |total, value| total + value), None);
/// ```
pub fn reduce_unseeded<C, F>(collection: &C, mut iterator: F) -> Option<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item) -> C::Item,
{
    let mut remaining = values(collection).into_iter();
    let seed = remaining.next()?.clone();
    Some(remaining.fold(seed, |accumulator, value| iterator(accumulator, value)))
}

/// Returns whether some element is equal to `target`.
///
/// Once a match is found no further comparisons are made.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::contains;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&[1, 2, 3], &4));
/// ```
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    reduce(collection, |found, item| found || item == target, false)
}

/// Returns whether `predicate` holds for every element.
///
/// An empty collection yields `true`. After the first failure the predicate
/// is not called again.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every;
///
/// assert!(every(&[2, 4, 6], |value| value % 2 == 0));
/// assert!(!every(&[2, 3, 6], |value| value % 2 == 0));
/// assert!(every::<[i32], _>(&[], |_| false));
/// ```
pub fn every<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    reduce(
        collection,
        |accumulator, item| accumulator && predicate(item),
        true,
    )
}

/// Returns whether `predicate` holds for at least one element.
///
/// Defined as `!every(collection, |value| !predicate(value))`, so an empty
/// collection yields `false`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::some;
///
/// assert!(some(&[1, 2, 3], |value| *value > 2));
/// assert!(!some::<[i32], _>(&[], |_| true));
/// ```
pub fn some<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    !every(collection, |value| !predicate(value))
}

/// [`every`] with the default predicate: each element coerced to a boolean.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every_truthy;
///
/// assert!(every_truthy(&[1, 2, 3]));
/// assert!(!every_truthy(&[1, 0, 3]));
/// ```
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    every(collection, |value| value.is_truthy())
}

/// [`some`] with the default predicate: each element coerced to a boolean.
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    some(collection, |value| value.is_truthy())
}

/// Extracts the field `key` from every element.
///
/// Elements lacking the field contribute `None`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::pluck;
/// use std::collections::BTreeMap;
///
/// let people = vec![
///     BTreeMap::from([("name".to_string(), "moe"), ("age".to_string(), "30")]),
///     BTreeMap::from([("name".to_string(), "curly")]),
/// ];
/// assert_eq!(pluck(&people, "age"), vec![Some("30"), None]);
/// ```
pub fn pluck<C>(collection: &C, key: &str) -> Vec<Option<<C::Item as Record>::Value>>
where
    C: Collection + ?Sized,
    C::Item: Record,
    <C::Item as Record>::Value: Clone,
{
    map(collection, |item| item.field(key).cloned())
}

/// Calls `method(element, args)` on every element and collects the results.
///
/// The operation is chosen at the call site, typically as a method path.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::invoke;
///
/// let words = vec!["alpha".to_string(), "beta".to_string()];
/// let repeated = invoke(&words, |word, times: &usize| word.repeat(*times), &2);
/// assert_eq!(repeated, vec!["alphaalpha", "betabeta"]);
///
/// let upper = invoke(&words, |word, _: &()| word.to_uppercase(), &());
/// assert_eq!(upper, vec!["ALPHA", "BETA"]);
/// ```
pub fn invoke<C, A, R, F>(collection: &C, mut method: F, args: &A) -> Vec<R>
where
    C: Collection + ?Sized,
    A: ?Sized,
    F: FnMut(&C::Item, &A) -> R,
{
    map(collection, |item| method(item, args))
}
