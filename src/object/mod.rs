//! Merging of string-keyed mappings.
//!
//! - [`extend`]: copy entries into a target, later sources winning
//! - [`defaults`]: copy entries into a target without overwriting
//!
//! Both take the sources as an ordered list of `&M` or `Option<&M>`; an
//! absent source is skipped. Neither operation can fail.
//!
//! # Examples
//!
//! ```rust
//! use underbar::object::{defaults, extend};
//! use std::collections::BTreeMap;
//!
//! let mut settings = BTreeMap::from([("color".to_string(), "red")]);
//! let overrides = BTreeMap::from([("color".to_string(), "blue")]);
//! let fallback = BTreeMap::from([
//!     ("color".to_string(), "green"),
//!     ("size".to_string(), "large"),
//! ]);
//!
//! extend(&mut settings, [&overrides]);
//! defaults(&mut settings, [Some(&fallback), None]);
//!
//! assert_eq!(settings["color"], "blue");
//! assert_eq!(settings["size"], "large");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::collection::Collection;
pub use crate::collection::Record;

/// A mutable string-keyed mapping.
///
/// Provides what [`extend`] and [`defaults`] need on top of [`Record`]:
/// a membership test, insertion, and a walk over the entries.
pub trait Mapping: Record {
    /// Returns whether `key` is present.
    fn has_key(&self, key: &str) -> bool;

    /// Sets `key` to `value`, replacing any previous value.
    fn insert_entry(&mut self, key: &str, value: Self::Value);

    /// Calls `visitor(key, value)` for every entry.
    fn for_each_entry<F>(&self, visitor: F)
    where
        F: FnMut(&str, &Self::Value);
}

impl<V> Mapping for BTreeMap<String, V> {
    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn insert_entry(&mut self, key: &str, value: Self::Value) {
        self.insert(key.to_owned(), value);
    }

    fn for_each_entry<F>(&self, mut visitor: F)
    where
        F: FnMut(&str, &Self::Value),
    {
        self.each(|value, key, _| visitor(key, value));
    }
}

impl<V, S: BuildHasher> Mapping for HashMap<String, V, S> {
    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn insert_entry(&mut self, key: &str, value: Self::Value) {
        self.insert(key.to_owned(), value);
    }

    fn for_each_entry<F>(&self, mut visitor: F)
    where
        F: FnMut(&str, &Self::Value),
    {
        self.each(|value, key, _| visitor(key, value));
    }
}

/// Copies every entry of each source into `target` and returns `target`.
///
/// Sources are applied in order, so a later source overwrites both earlier
/// sources and the entries `target` started with.
///
/// # Examples
///
/// ```rust
/// use underbar::object::extend;
/// use std::collections::BTreeMap;
///
/// let mut target = BTreeMap::from([("a".to_string(), 1)]);
/// let first = BTreeMap::from([("b".to_string(), 2)]);
/// let second = BTreeMap::from([("a".to_string(), 3)]);
///
/// extend(&mut target, [&first, &second]);
/// assert_eq!(
///     target,
///     BTreeMap::from([("a".to_string(), 3), ("b".to_string(), 2)])
/// );
/// ```
pub fn extend<'t, 's, M, I>(target: &'t mut M, sources: I) -> &'t mut M
where
    M: Mapping + 's,
    M::Value: Clone,
    I: IntoIterator,
    I::Item: Into<Option<&'s M>>,
{
    for source in sources.into_iter().filter_map(Into::<Option<&'s M>>::into) {
        source.for_each_entry(|key, value| target.insert_entry(key, value.clone()));
    }
    target
}

/// Copies entries into `target` only for keys it does not have yet.
///
/// A key filled in by an earlier source is not overwritten by a later one.
///
/// # Examples
///
/// ```rust
/// use underbar::object::defaults;
/// use std::collections::BTreeMap;
///
/// let mut target = BTreeMap::from([("a".to_string(), 1)]);
/// let source = BTreeMap::from([("a".to_string(), 9), ("b".to_string(), 2)]);
///
/// defaults(&mut target, [&source]);
/// assert_eq!(
///     target,
///     BTreeMap::from([("a".to_string(), 1), ("b".to_string(), 2)])
/// );
/// ```
pub fn defaults<'t, 's, M, I>(target: &'t mut M, sources: I) -> &'t mut M
where
    M: Mapping + 's,
    M::Value: Clone,
    I: IntoIterator,
    I::Item: Into<Option<&'s M>>,
{
    for source in sources.into_iter().filter_map(Into::<Option<&'s M>>::into) {
        source.for_each_entry(|key, value| {
            if !target.has_key(key) {
                target.insert_entry(key, value.clone());
            }
        });
    }
    target
}
