//! Result caching keyed by serialized arguments.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use serde::Serialize;

use crate::error::Result;

/// Port for turning an argument list into a canonical cache key.
///
/// Equal keys must mean "same call". Implementations must fail rather than
/// produce an ambiguous key for input they cannot represent.
pub trait KeySerializer {
    /// Serializes `arguments` into a cache key.
    ///
    /// # Errors
    ///
    /// Returns [`UnderbarError::Unserializable`](crate::UnderbarError::Unserializable)
    /// when `arguments` cannot be represented.
    fn key<A: Serialize + ?Sized>(&self, arguments: &A) -> Result<String>;
}

/// Keys arguments by their compact JSON encoding.
///
/// Maps with non-string keys are rejected. Struct fields and sequence
/// elements keep their order; `HashMap` arguments iterate in an unspecified
/// order, so prefer `BTreeMap` for arguments that must share cache entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonKey;

impl KeySerializer for JsonKey {
    fn key<A: Serialize + ?Sized>(&self, arguments: &A) -> Result<String> {
        Ok(serde_json::to_string(arguments)?)
    }
}

/// A function whose results are cached per distinct argument list.
///
/// Arguments are serialized with a [`KeySerializer`] (default [`JsonKey`]);
/// two calls whose arguments serialize to the same key share one cache
/// entry, even if the argument values are distinct objects. For every key
/// the wrapped function runs at most once, also under concurrent calls.
/// Calls with different keys do not block each other.
///
/// Created by [`memoize`].
pub struct Memoize<A, R, F, K = JsonKey> {
    function: F,
    serializer: K,
    cache: Mutex<HashMap<String, Arc<OnceLock<R>>>>,
    _arguments: PhantomData<fn(A)>,
}

/// Wraps `function` so that its results are cached by argument list.
///
/// Multiple arguments are passed as a tuple.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use underbar::function::memoize;
///
/// let runs = Cell::new(0);
/// let add = memoize(|(left, right): (i32, i32)| {
///     runs.set(runs.get() + 1);
///     left + right
/// });
///
/// assert_eq!(add.call((1, 2)).unwrap(), 3);
/// assert_eq!(add.call((1, 2)).unwrap(), 3);
/// assert_eq!(add.call((3, 4)).unwrap(), 7);
/// assert_eq!(runs.get(), 2);
/// ```
pub fn memoize<A, R, F>(function: F) -> Memoize<A, R, F>
where
    F: Fn(A) -> R,
{
    Memoize::with_serializer(function, JsonKey)
}

impl<A, R, F, K> Memoize<A, R, F, K>
where
    F: Fn(A) -> R,
    K: KeySerializer,
{
    /// Wraps `function`, keying the cache with `serializer`.
    pub fn with_serializer(function: F, serializer: K) -> Self {
        Self {
            function,
            serializer,
            cache: Mutex::new(HashMap::new()),
            _arguments: PhantomData,
        }
    }

    /// Returns the cached result for `args`, computing it on first sight.
    ///
    /// # Errors
    ///
    /// Returns [`UnderbarError::Unserializable`](crate::UnderbarError::Unserializable)
    /// if `args` cannot be turned into a key. The function is not called in
    /// that case.
    pub fn call(&self, args: A) -> Result<R>
    where
        A: Serialize,
        R: Clone,
    {
        let key = self.serializer.key(&args)?;
        let cell = {
            let mut cache = self.cache.lock();
            Arc::clone(cache.entry(key.clone()).or_default())
        };
        let result = cell.get_or_init(|| {
            tracing::trace!(%key, "memoize cache miss");
            (self.function)(args)
        });
        Ok(result.clone())
    }

    /// Returns the number of cached argument lists.
    ///
    /// Calls that are still computing, or whose function panicked, are not
    /// counted.
    pub fn len(&self) -> usize {
        self.cache
            .lock()
            .values()
            .filter(|cell| cell.get().is_some())
            .count()
    }

    /// Returns whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        !self.cache.lock().values().any(|cell| cell.get().is_some())
    }

    /// Drops every cached result.
    pub fn clear(&self) {
        let mut cache = self.cache.lock();
        tracing::debug!(entries = cache.len(), "clearing memoize cache");
        cache.clear();
    }
}

impl<A, R, F, K: fmt::Debug> fmt::Debug for Memoize<A, R, F, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("serializer", &self.serializer)
            .field(
                "entries",
                &self
                    .cache
                    .lock()
                    .values()
                    .filter(|cell| cell.get().is_some())
                    .count(),
            )
            .finish_non_exhaustive()
    }
}
