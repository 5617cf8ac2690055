//! Function decorators.
//!
//! Each decorator takes a function and hands back a new one that owns its
//! own private state: the cached result for [`once`], the argument cache for
//! [`memoize`], the time of the last executed call for [`throttle`]. That
//! state is created when the wrapper is built and dropped with it.
//!
//! Wrapped functions take a single argument. Use a tuple to pass several,
//! and `()` to pass none.

use std::cell::Cell;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use std::rc::Rc;
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;
use std::time::Instant;

use rustc_hash::FxHashMap;
use tracing::debug;
use tracing::trace;

use crate::error::Error;
use crate::error::Result;

/// Return a function that runs `func` on its first call only.
///
/// Every later call, whatever its argument, returns a clone of the first
/// result.
///
/// # Panics
///
/// If `func` panicked on the first call, every later call panics too.
pub fn once<A, R, F>(func: F) -> impl FnMut(A) -> R
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    let mut func = Some(func);
    let mut result: Option<R> = None;
    return move |args: A| {
        if let Some(result) = &result {
            return result.clone();
        }
        let Some(func) = func.take() else {
            panic!("once: wrapped function panicked on its first call");
        };
        let value = func(args);
        result = Some(value.clone());
        return value;
    };
}

/// Return a function that caches the result of `func` for each argument.
///
/// The cache key is the argument itself, so two calls share an entry exactly
/// when their arguments are equal.
///
/// ```
/// use underbar::memoize;
///
/// let mut calls = 0;
/// let mut square = memoize(|n: &u64| { calls += 1; n * n });
/// assert_eq!(square(4), 16);
/// assert_eq!(square(4), 16);
/// drop(square);
/// assert_eq!(calls, 1);
/// ```
pub fn memoize<A, R, F>(mut func: F) -> impl FnMut(A) -> R
where
    A: Hash + Eq,
    R: Clone,
    F: FnMut(&A) -> R,
{
    let mut cache: FxHashMap<A, R> = FxHashMap::default();
    return move |args: A| {
        let cache_len = cache.len();
        return match cache.entry(args) {
            Entry::Occupied(hit) => {
                trace!(entries = cache_len, "memoize hit");
                hit.get().clone()
            }
            Entry::Vacant(miss) => {
                let value = func(miss.key());
                trace!(entries = cache_len + 1, "memoize miss");
                miss.insert(value).clone()
            }
        };
    };
}

/// Milliseconds in `duration` for log fields, saturating at `u64::MAX`.
fn whole_millis(duration: Duration) -> u64 {
    return u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
}

/// A callback scheduled by [`delay`].
///
/// Dropping the handle does not cancel the callback.
#[derive(Debug)]
pub struct Delayed {
    handle: JoinHandle<()>,
}

impl Delayed {
    /// Return true once the callback has run.
    pub fn is_finished(&self) -> bool {
        return self.handle.is_finished();
    }

    /// Block until the callback has run.
    pub fn join(self) -> Result<()> {
        return self.handle.join().map_err(|_| Error::Callback);
    }
}

/// Call `func(args)` on a timer thread, no sooner than `wait` from now.
///
/// The caller is never blocked and the callback's return value is dropped.
pub fn delay<A, R, F>(func: F, wait: Duration, args: A) -> Result<Delayed>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: 'static,
{
    let wait_ms = whole_millis(wait);
    debug!(wait_ms, "scheduling delayed callback");
    let handle = thread::Builder::new()
        .name("underbar-delay".to_string())
        .spawn(move || {
            thread::sleep(wait);
            debug!(wait_ms, "running delayed callback");
            drop(func(args));
        })?;
    return Ok(Delayed { handle });
}

/// A source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time from [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant { Instant::now() }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        return Self::new();
    }
}

impl ManualClock {
    pub fn new() -> ManualClock {
        return ManualClock {
            now: Rc::new(Cell::new(Instant::now())),
        };
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant { self.now.get() }
}

/// Return a function that runs `func` at most once per `wait`.
///
/// A call runs immediately if no call has run within the last `wait`.
/// Otherwise it is dropped and the result of the last call that ran is
/// returned instead. The first call always runs.
pub fn throttle<A, R, F>(func: F, wait: Duration) -> impl FnMut(A) -> R
where
    F: FnMut(A) -> R,
    R: Clone,
{
    return throttle_with_clock(func, wait, SystemClock);
}

/// [`throttle`] measured against `clock`.
pub fn throttle_with_clock<A, R, F, K>(mut func: F, wait: Duration, clock: K) -> impl FnMut(A) -> R
where
    F: FnMut(A) -> R,
    R: Clone,
    K: Clock,
{
    let mut last: Option<(Instant, R)> = None;
    return move |args: A| {
        let now = clock.now();
        if let Some((ran_at, result)) = &last {
            let elapsed = now.duration_since(*ran_at);
            if elapsed < wait {
                trace!(elapsed_ms = whole_millis(elapsed), "throttled call dropped");
                return result.clone();
            }
        }
        let result = func(args);
        last = Some((now, result.clone()));
        return result;
    };
}
