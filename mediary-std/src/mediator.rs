//! The dispatcher: request resolution and notification fan-out.

use crate::registry::Registry;
use mediary_core::{
    EntryProvider, Notification, PublishError, Request, SendAttempt, SendError,
};
use std::any::{Any, TypeId, type_name};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// The public dispatch entry point.
///
/// A `Mediator` is stateless between calls: each `send`/`publish` is an
/// independent resolution pass over the provider's entry snapshot, probing
/// entries in registration order. Because the snapshot is read-only and
/// entries are stateless, any number of calls may run concurrently over
/// clones of the same `Mediator`.
///
/// The provider defaults to the standard [`Registry`]; anything
/// implementing [`EntryProvider`] (for example an external container's
/// entry enumeration) can be substituted.
pub struct Mediator<P = Registry> {
    provider: Arc<P>,
}

impl<P> Clone for Mediator<P> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
        }
    }
}

impl<P: EntryProvider> Mediator<P> {
    /// Create a mediator over a frozen entry provider.
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Resolve and invoke the single handler for `request`.
    ///
    /// Equivalent to [`send_with_cancellation`](Self::send_with_cancellation)
    /// with a token that is never cancelled.
    pub async fn send<R: Request>(&self, request: R) -> Result<R::Response, SendError> {
        self.send_with_cancellation(request, CancellationToken::new())
            .await
    }

    /// Resolve and invoke the single handler for `request`, propagating
    /// `cancel` into the handler invocation.
    ///
    /// Entries are probed in registration order; only an exact match of
    /// both the request's concrete type and its declared response type
    /// authorizes invocation. The first entry that accepts the request
    /// wins and resolution stops there. A handler error is propagated
    /// unchanged as [`SendError::Handler`]; if no entry accepts, the call
    /// fails with [`SendError::Unhandled`].
    pub async fn send_with_cancellation<R: Request>(
        &self,
        request: R,
        cancel: CancellationToken,
    ) -> Result<R::Response, SendError> {
        let mut request: Box<dyn Any + Send> = Box::new(request);

        for entry in self.provider.entries() {
            let Some(dispatch) = entry.as_request() else {
                continue;
            };
            if dispatch.message_type() != TypeId::of::<R>()
                || dispatch.response_type() != TypeId::of::<R::Response>()
            {
                continue;
            }

            match dispatch.try_execute(request, cancel.clone()) {
                SendAttempt::Accepted(invocation) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(request = type_name::<R>(), "resolved request entry");

                    let response =
                        invocation.await.map_err(|source| SendError::Handler {
                            type_name: type_name::<R>(),
                            source,
                        })?;
                    return response
                        .downcast::<R::Response>()
                        .map(|response| *response)
                        .map_err(|_| SendError::ResponseType {
                            type_name: type_name::<R>(),
                        });
                }
                // Advertised types matched but the downcast refused;
                // keep probing with the request handed back.
                SendAttempt::NotApplicable(returned) => request = returned,
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(request = type_name::<R>(), "no entry matched request");

        Err(SendError::Unhandled {
            type_name: type_name::<R>(),
        })
    }

    /// Broadcast `notification` to every matching handler.
    ///
    /// Equivalent to
    /// [`publish_with_cancellation`](Self::publish_with_cancellation)
    /// with a token that is never cancelled.
    pub async fn publish<N: Notification>(&self, notification: &N) -> Result<(), PublishError> {
        self.publish_with_cancellation(notification, CancellationToken::new())
            .await
    }

    /// Broadcast `notification` to every matching handler, propagating
    /// `cancel` into each invocation.
    ///
    /// Matching handlers run sequentially in registration order, awaited
    /// one at a time. The first handler failure aborts the remaining
    /// fan-out and surfaces as [`PublishError::Handler`]; callers needing
    /// isolation between handlers must wrap each handler defensively.
    /// Zero matching handlers is not an error.
    pub async fn publish_with_cancellation<N: Notification>(
        &self,
        notification: &N,
        cancel: CancellationToken,
    ) -> Result<(), PublishError> {
        let erased: &(dyn Any + Send + Sync) = notification;
        let mut matched = 0usize;

        for entry in self.provider.entries() {
            let Some(dispatch) = entry.as_notification() else {
                continue;
            };
            let Some(invocation) = dispatch.try_execute(erased, cancel.clone()) else {
                continue;
            };
            matched += 1;

            #[cfg(feature = "tracing")]
            tracing::trace!(
                notification = type_name::<N>(),
                index = matched,
                "invoking notification entry"
            );

            invocation.await.map_err(|source| PublishError::Handler {
                type_name: type_name::<N>(),
                index: matched,
                source,
            })?;
        }

        Ok(())
    }
}
