//! # underbar
//!
//! Functional utility combinators for sequences, mappings and functions.
//!
//! ## Overview
//!
//! A flat set of independent combinators over two container shapes,
//! ordered **sequences** (`[T]`, `Vec<T>`, `[T; N]`) and string-keyed
//! **mappings** (`BTreeMap<String, V>`, `HashMap<String, V>`):
//!
//! - **Collections**: iteration, transformation, filtering, folding,
//!   duplicate removal, multi-sequence alignment, set-like operations,
//!   stable ordering and shuffling
//! - **Objects**: `extend` and `defaults` for merging mappings
//! - **Functions**: `once`, `memoize`, `delay` and `throttle` decorators,
//!   with an injectable timer
//!
//! ## Feature Flags
//!
//! - `collection`: Collection operations
//! - `object`: Mapping merge operations
//! - `function`: Function decorators and the manual scheduler
//! - `async`: The tokio-backed scheduler
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let words = vec!["delta", "alpha", "charlie", "alpha", "bravo"];
//! let distinct = uniq(&words);
//! let sorted = sort_by(&distinct, |word| word.to_string());
//! assert_eq!(sorted, vec!["alpha", "bravo", "charlie", "delta"]);
//!
//! let lengths = map(&sorted, |word| word.len());
//! assert_eq!(reduce(&lengths, |total, length| total + length, 0), 22);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinator::*;
    pub use crate::error::UnderbarError;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "collection")]
    pub use crate::nested;

    #[cfg(feature = "object")]
    pub use crate::object::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;
}

pub mod combinator;
pub mod error;

pub use combinator::{Truthy, identity};
pub use error::{Result, UnderbarError};

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "object")]
pub mod object;

#[cfg(feature = "function")]
pub mod function;
