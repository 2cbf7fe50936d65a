//! Named-field access on collection elements.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Elements that expose values by field name.
///
/// [`pluck`](super::pluck) and [`sort_by_field`](super::sort_by_field) read
/// fields through this trait. String-keyed maps implement it out of the box;
/// user structs can implement it to opt in to field-based operations.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Record;
///
/// struct Person {
///     name: String,
///     nickname: Option<String>,
/// }
///
/// impl Record for Person {
///     type Value = String;
///
///     fn field(&self, name: &str) -> Option<&String> {
///         match name {
///             "name" => Some(&self.name),
///             "nickname" => self.nickname.as_ref(),
///             _ => None,
///         }
///     }
/// }
///
/// let person = Person { name: "Ada".to_string(), nickname: None };
/// assert_eq!(person.field("name").map(String::as_str), Some("Ada"));
/// assert!(person.field("nickname").is_none());
/// ```
pub trait Record {
    /// The type of the field values.
    type Value;

    /// Returns the value stored under `name`, if any.
    fn field(&self, name: &str) -> Option<&Self::Value>;
}

impl<V> Record for BTreeMap<String, V> {
    type Value = V;

    #[inline]
    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V, S: BuildHasher> Record for HashMap<String, V, S> {
    type Value = V;

    #[inline]
    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<R: Record + ?Sized> Record for &R {
    type Value = R::Value;

    #[inline]
    fn field(&self, name: &str) -> Option<&Self::Value> {
        (**self).field(name)
    }
}
