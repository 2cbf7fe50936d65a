//! Operations over sequences and mappings.
//!
//! Everything in this module is built on one traversal primitive,
//! [`Collection::each`]:
//!
//! - **Traversal**: [`Collection`], [`each`]
//! - **Derived**: [`map`], [`filter`], [`reject`], [`reduce`],
//!   [`reduce_unseeded`], [`contains`], [`every`], [`some`], [`pluck`],
//!   [`invoke`], [`index_of`], [`first`], [`last`]
//! - **Duplicates**: [`uniq`], [`uniq_by`]
//! - **Multi-sequence**: [`zip`], [`zip2`], [`flatten`], [`intersection`],
//!   [`difference`]
//! - **Ordering**: [`sort_by`], [`sort_by_field`]
//! - **Randomness**: [`shuffle`], [`shuffle_with`]
//!
//! Inputs are always borrowed; results are freshly allocated `Vec`s.
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::{filter, map, reduce, sort_by, uniq};
//!
//! let scores = vec![7, 3, 9, 3, 7, 1];
//!
//! let distinct = uniq(&scores);
//! assert_eq!(distinct, vec![7, 3, 9, 1]);
//!
//! let passing = filter(&distinct, |score| *score >= 3);
//! let doubled = map(&passing, |score| score * 2);
//! assert_eq!(doubled, vec![14, 6, 18]);
//!
//! let total = reduce(&doubled, |sum, score| sum + score, 0);
//! assert_eq!(total, 38);
//!
//! assert_eq!(sort_by(&passing, |score| *score), vec![3, 7, 9]);
//! ```
//!
//! ## Mappings
//!
//! ```rust
//! use underbar::collection::{every, map};
//! use std::collections::BTreeMap;
//!
//! let stock = BTreeMap::from([
//!     ("apples".to_string(), 4),
//!     ("pears".to_string(), 2),
//! ]);
//! assert_eq!(map(&stock, |count| count * 10), vec![40, 20]);
//! assert!(every(&stock, |count| *count > 0));
//! ```

mod derived;
mod ordering;
mod record;
mod set;
mod shuffle;
mod traversal;
mod unique;

pub use derived::{
    contains, every, every_truthy, filter, first, first_n, index_of, invoke, last, last_n, map,
    pluck, reduce, reduce_unseeded, reject, some, some_truthy,
};
pub use ordering::{sort_by, sort_by_field};
pub use record::Record;
pub use set::{Nested, difference, flatten, intersection, zip, zip2};
pub use shuffle::{RandomSource, shuffle, shuffle_with};
pub use traversal::{Collection, each};
pub use unique::{uniq, uniq_by};
