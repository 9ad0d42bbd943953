//! TypedMemo: wrapper over a fixed, statically typed signature
//!
//! The argument type is the key. Multi-argument functions take a tuple.

use std::convert::Infallible;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::cache::MemoCache;
use crate::notify::Notifier;
use crate::stats::CacheStats;

/// Memoizing wrapper around `Fn(&A) -> Result<R, E>`
///
/// Since `A: Hash + Eq`, key construction cannot fail; only the wrapped
/// function's own errors reach the caller.
pub struct TypedMemo<F, A, R, E = Infallible> {
    target: F,
    cache: MemoCache<A, R>,
    _error: PhantomData<fn() -> E>,
}

impl<F, A, R, E> TypedMemo<F, A, R, E>
where
    F: Fn(&A) -> Result<R, E>,
    A: Hash + Eq,
{
    /// Wrap a fallible function with a fresh, empty store
    pub fn new(target: F) -> Self {
        Self::with_capacity(target, 0)
    }

    /// Wrap a fallible function, preallocating room for `capacity` results
    pub fn with_capacity(target: F, capacity: usize) -> Self {
        Self {
            target,
            cache: MemoCache::with_capacity(capacity),
            _error: PhantomData,
        }
    }

    /// Replace the hit/miss notifier (stdout by default)
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.cache.set_notifier(Box::new(notifier));
        self
    }

    /// Call through the cache
    pub fn call(&self, arg: A) -> Result<Arc<R>, E> {
        self.cache.get_or_compute(arg, |arg| (self.target)(arg))
    }

    /// Check if this argument already has a stored result
    pub fn contains(&self, arg: &A) -> bool {
        self.cache.contains(arg)
    }

    /// Get the number of stored results
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if nothing has been stored yet
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        self.cache.stats()
    }
}

/// Wrap an infallible function of a fixed argument type
pub fn memoize_typed<G, A, R>(target: G) -> TypedMemo<impl Fn(&A) -> Result<R, Infallible>, A, R>
where
    G: Fn(&A) -> R,
    A: Hash + Eq,
{
    TypedMemo::new(move |arg: &A| Ok(target(arg)))
}
