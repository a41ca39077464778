//! Testing utilities for Mediary.
//!
//! This module provides handler doubles to make testing dispatch wiring
//! easier:
//!
//! - [`RecordingNotificationHandler`]: records every notification it receives
//! - [`CountingRequestHandler`]: counts invocations, answers with `Default`
//! - [`FailingRequestHandler`] / [`FailingNotificationHandler`]: always fail

use mediary_core::{BoxError, Notification, NotificationHandler, Request, RequestHandler};
use std::{
    marker::PhantomData,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};
use tokio_util::sync::CancellationToken;

// ============================================================================
// Recording Notification Handler
// ============================================================================

/// A notification handler that records every notification it receives.
///
/// Clones share the recording, so keep a clone outside the registry to
/// inspect what was delivered.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingNotificationHandler::new();
/// let registry = RegistryBuilder::new()
///     .register_notification(recorder.clone())
///     .build()?;
///
/// // ... publish ...
///
/// assert_eq!(recorder.count(), 1);
/// ```
pub struct RecordingNotificationHandler<N> {
    received: Arc<Mutex<Vec<N>>>,
}

impl<N: Clone> RecordingNotificationHandler<N> {
    /// Create a new recording handler.
    pub fn new() -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded notifications.
    pub fn received(&self) -> Vec<N> {
        self.received.lock().unwrap().clone()
    }

    /// Get the number of recorded notifications.
    pub fn count(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    /// Clear all recorded notifications.
    pub fn clear(&self) {
        self.received.lock().unwrap().clear();
    }
}

impl<N: Clone> Default for RecordingNotificationHandler<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Clone for RecordingNotificationHandler<N> {
    fn clone(&self) -> Self {
        Self {
            received: self.received.clone(),
        }
    }
}

impl<N: Notification + Clone> NotificationHandler<N> for RecordingNotificationHandler<N> {
    async fn handle(&self, notification: &N, _cancel: CancellationToken) -> Result<(), BoxError> {
        self.received.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

// ============================================================================
// Counting Request Handler
// ============================================================================

/// A request handler that counts invocations and answers with
/// `R::Response::default()`.
pub struct CountingRequestHandler<R> {
    count: Arc<AtomicUsize>,
    _bound: PhantomData<fn(R)>,
}

impl<R> CountingRequestHandler<R> {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            _bound: PhantomData,
        }
    }

    /// Get the current invocation count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<R> Default for CountingRequestHandler<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for CountingRequestHandler<R> {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
            _bound: PhantomData,
        }
    }
}

impl<R> RequestHandler<R> for CountingRequestHandler<R>
where
    R: Request,
    R::Response: Default,
{
    async fn handle(&self, _request: R, _cancel: CancellationToken) -> Result<R::Response, BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(R::Response::default())
    }
}

// ============================================================================
// Failing Handlers
// ============================================================================

/// A request handler that always fails with the given message.
pub struct FailingRequestHandler<R> {
    message: String,
    _bound: PhantomData<fn(R)>,
}

impl<R> FailingRequestHandler<R> {
    /// Create a handler failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            _bound: PhantomData,
        }
    }
}

impl<R: Request> RequestHandler<R> for FailingRequestHandler<R> {
    async fn handle(&self, _request: R, _cancel: CancellationToken) -> Result<R::Response, BoxError> {
        Err(self.message.clone().into())
    }
}

/// A notification handler that always fails with the given message.
pub struct FailingNotificationHandler<N> {
    message: String,
    _bound: PhantomData<fn(N)>,
}

impl<N> FailingNotificationHandler<N> {
    /// Create a handler failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            _bound: PhantomData,
        }
    }
}

impl<N: Notification> NotificationHandler<N> for FailingNotificationHandler<N> {
    async fn handle(&self, _notification: &N, _cancel: CancellationToken) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}
