//! Testing utilities for tagmatch.
//!
//! This module provides handlers that make it easy to check which case a
//! matcher selected and what it was given.
//!
//! # Features
//!
//! - [`RecordingHandler`]: records every input it receives
//! - [`CountingHandler`]: counts invocations

use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

use tagmatch_core::Handler;

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records every input and returns a fixed output.
///
/// Clones share the same record, so keep one clone outside the matcher to
/// inspect what reached the handler.
///
/// # Example
///
/// ```rust,ignore
/// let some = RecordingHandler::new("some");
/// let matcher = Cases::new().case("Some", some.clone()).build()?;
///
/// matcher.call(json!({ "_tag": "Some", "value": 1 }))?;
/// assert_eq!(some.inputs(), vec![json!({ "_tag": "Some", "value": 1 })]);
/// ```
pub struct RecordingHandler<V, R> {
    inputs: Arc<Mutex<Vec<V>>>,
    output: R,
}

impl<V, R> RecordingHandler<V, R> {
    /// Create a recording handler that returns `output` on every call.
    pub fn new(output: R) -> Self {
        Self {
            inputs: Arc::new(Mutex::new(Vec::new())),
            output,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<V>> {
        self.inputs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get a clone of the recorded inputs.
    pub fn inputs(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.lock().clone()
    }

    /// Get the number of recorded inputs.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Clear all recorded inputs.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl<V, R: Clone> Clone for RecordingHandler<V, R> {
    fn clone(&self) -> Self {
        Self {
            inputs: Arc::clone(&self.inputs),
            output: self.output.clone(),
        }
    }
}

impl<V, R> Handler<V> for RecordingHandler<V, R>
where
    V: Send,
    R: Clone + Send + Sync,
{
    type Output = R;

    fn call(&self, input: V) -> R {
        self.lock().push(input);
        self.output.clone()
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations and returns a fixed output.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingHandler::new("fallback");
/// let matcher = Cases::new().otherwise(counter.clone()).build()?;
///
/// matcher.call(Value::Null)?;
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CountingHandler<R> {
    count: Arc<AtomicUsize>,
    output: R,
}

impl<R> CountingHandler<R> {
    /// Create a new counting handler.
    pub fn new(output: R) -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            output,
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<R: Clone> Clone for CountingHandler<R> {
    fn clone(&self) -> Self {
        Self {
            count: Arc::clone(&self.count),
            output: self.output.clone(),
        }
    }
}

impl<V, R: Clone + Send + Sync> Handler<V> for CountingHandler<R> {
    type Output = R;

    fn call(&self, _input: V) -> R {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.output.clone()
    }
}
