//! Memoized: wrapper over functions taking dynamic `Args`

use std::marker::PhantomData;
use std::sync::Arc;
use callkey::{Args, CallKey, KeyError};
use tracing::{trace, warn};

use crate::cache::MemoCache;
use crate::notify::Notifier;
use crate::stats::CacheStats;

/// Memoizing wrapper around a function of `&Args`
///
/// Each wrapper owns its own store, so two wrappers over the same function
/// never see each other's results. Results are handed out as `Arc<R>`; a
/// hit returns the same allocation the first miss stored.
///
/// The wrapped function's error type must absorb [`KeyError`], which keeps
/// its own failures flowing back to the caller unchanged.
pub struct Memoized<F, R, E = KeyError> {
    target: F,
    cache: MemoCache<CallKey, R>,
    _error: PhantomData<fn() -> E>,
}

impl<F, R, E> Memoized<F, R, E>
where
    F: Fn(&Args) -> Result<R, E>,
    E: From<KeyError>,
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
    ///
    /// # Arguments
    /// * `args` - Positional and named arguments, passed to the function as given
    ///
    /// # Returns
    /// * `Result<Arc<R>, E>` - Stored or freshly computed result
    ///
    /// # Errors
    /// * `KeyError` (converted into `E`) if an argument is a list or map; the
    ///   function is not called
    /// * Whatever the function returns on a miss; nothing is stored
    pub fn call(&self, args: &Args) -> Result<Arc<R>, E> {
        let key = match CallKey::from_args(args) {
            Ok(key) => key,
            Err(err) => {
                self.cache.stats().record_key_error();
                warn!(error = %err, "cannot build call key");
                return Err(err.into());
            }
        };
        trace!(arity = key.arity(), "derived call key");

        self.cache.get_or_compute(key, |_| (self.target)(args))
    }

    /// Check if these arguments already have a stored result
    ///
    /// Arguments that cannot form a key are never stored.
    pub fn contains(&self, args: &Args) -> bool {
        CallKey::from_args(args)
            .map(|key| self.cache.contains(&key))
            .unwrap_or(false)
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

/// Wrap an infallible function; the only possible error is [`KeyError`]
pub fn memoize<G, R>(target: G) -> Memoized<impl Fn(&Args) -> Result<R, KeyError>, R, KeyError>
where
    G: Fn(&Args) -> R,
{
    Memoized::new(move |args: &Args| Ok(target(args)))
}
