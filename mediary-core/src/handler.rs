//! Handler traits for requests and notifications.
//!
//! Handlers are the terminal point of a dispatch: the place where business
//! logic executes. They receive the message plus a cancellation token and
//! perform their work asynchronously.
//!
//! # Cancellation
//!
//! The dispatcher propagates the caller's [`CancellationToken`] into every
//! handler invocation but never polls or enforces it itself. Honoring the
//! token (stopping in-flight work promptly) is the handler's job.
//!
//! # Usage Patterns
//!
//! 1. **Struct implementation**: `impl RequestHandler<MyRequest> for MyHandler`
//! 2. **Direct closure** (requests only): `|request, cancel| async move { ... }`

use crate::error::BoxError;
use crate::message::{Notification, Request};
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Services a single request type, producing its typed response.
///
/// Exactly one `RequestHandler` should exist per request type in a
/// correctly configured system. The handler takes the request by value:
/// it is the sole consumer of the message.
///
/// This trait uses native `async fn` for zero-cost static dispatch; the
/// type-erased layer lives in [`RequestEntry`](crate::RequestEntry).
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `RequestHandler<{R}>`",
    label = "missing `RequestHandler` implementation",
    note = "Request handlers must implement `handle` for the specific request type `{R}`."
)]
pub trait RequestHandler<R: Request>: Send + Sync + 'static {
    /// Handle the request, producing its response.
    fn handle(
        &self,
        request: R,
        cancel: CancellationToken,
    ) -> impl Future<Output = Result<R::Response, BoxError>> + Send;
}

// Blanket impl for closures
impl<F, R, Fut> RequestHandler<R> for F
where
    R: Request,
    F: Fn(R, CancellationToken) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R::Response, BoxError>> + Send,
{
    fn handle(
        &self,
        request: R,
        cancel: CancellationToken,
    ) -> impl Future<Output = Result<R::Response, BoxError>> + Send {
        (self)(request, cancel)
    }
}

/// Services a single notification type.
///
/// Any number of `NotificationHandler`s may exist per notification type.
/// The handler borrows the message, so broadcast to many handlers never
/// clones it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `NotificationHandler<{N}>`",
    label = "missing `NotificationHandler` implementation",
    note = "Notification handlers must implement `handle` for the specific notification type `{N}`."
)]
pub trait NotificationHandler<N: Notification>: Send + Sync + 'static {
    /// Handle the notification.
    fn handle(
        &self,
        notification: &N,
        cancel: CancellationToken,
    ) -> impl Future<Output = Result<(), BoxError>> + Send;
}
