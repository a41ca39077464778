//! Type-erased dispatch entries.
//!
//! A dispatch entry is an opaque unit bound at construction time to exactly
//! one concrete message type and, for requests, one response type. It owns
//! the single handler instance it was built to invoke, is immutable after
//! construction, and holds no per-call state, so it may be invoked
//! concurrently by many callers.
//!
//! Erasure works without reflection: an entry advertises the [`TypeId`]s it
//! was bound to and probes incoming messages with an [`Any`] downcast. A
//! mismatch is reported as an explicit "not applicable" sentinel, not an
//! error, so the dispatcher continues probing other entries.
//!
//! # Static vs Dynamic Dispatch
//!
//! The handler traits in [`crate::handler`] use native `async fn` for
//! static dispatch. [`DynRequestDispatch`] and [`DynNotificationDispatch`]
//! are the object-safe counterparts a registry stores, bridged by the two
//! concrete entry variants [`RequestEntry`] and [`NotificationEntry`].

use crate::error::BoxError;
use crate::handler::{NotificationHandler, RequestHandler};
use crate::message::{Notification, Request};
use std::{
    any::{Any, TypeId, type_name},
    future::Future,
    marker::PhantomData,
    pin::Pin,
};
use tokio_util::sync::CancellationToken;

/// An in-flight handler invocation produced by an accepted dispatch.
pub type EntryFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, BoxError>> + Send + 'a>>;

/// Outcome of probing a request entry with a message.
pub enum SendAttempt<'a> {
    /// The entry's bound types match; the handler invocation is under way.
    Accepted(EntryFuture<'a, Box<dyn Any + Send>>),
    /// The concrete type does not match; the request is handed back
    /// untouched so the dispatcher can keep probing.
    NotApplicable(Box<dyn Any + Send>),
}

/// Object-safe request dispatch, bound to one (message, response) pair.
pub trait DynRequestDispatch: Send + Sync + 'static {
    /// `TypeId` of the bound request type.
    fn message_type(&self) -> TypeId;

    /// `TypeId` of the bound response type.
    fn response_type(&self) -> TypeId;

    /// Human-readable name of the bound request type, for diagnostics.
    fn message_name(&self) -> &'static str;

    /// Attempt to service `request`.
    ///
    /// The wrapped handler runs exactly once if the concrete type matches,
    /// zero times otherwise. The erased response downcasts to the bound
    /// response type.
    fn try_execute<'a>(
        &'a self,
        request: Box<dyn Any + Send>,
        cancel: CancellationToken,
    ) -> SendAttempt<'a>;
}

/// Object-safe notification dispatch, bound to one message type.
pub trait DynNotificationDispatch: Send + Sync + 'static {
    /// `TypeId` of the bound notification type.
    fn message_type(&self) -> TypeId;

    /// Human-readable name of the bound notification type, for diagnostics.
    fn message_name(&self) -> &'static str;

    /// Attempt to service `notification`.
    ///
    /// Returns `None` when the concrete type does not match; the handler
    /// is not invoked in that case.
    fn try_execute<'a>(
        &'a self,
        notification: &'a (dyn Any + Send + Sync),
        cancel: CancellationToken,
    ) -> Option<EntryFuture<'a, ()>>;
}

/// The request entry variant: owns one [`RequestHandler`] bound to `R`.
pub struct RequestEntry<R, H> {
    handler: H,
    _bound: PhantomData<fn(R)>,
}

impl<R: Request, H: RequestHandler<R>> RequestEntry<R, H> {
    /// Bind `handler` to request type `R`.
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            _bound: PhantomData,
        }
    }
}

impl<R: Request, H: RequestHandler<R>> DynRequestDispatch for RequestEntry<R, H> {
    fn message_type(&self) -> TypeId {
        TypeId::of::<R>()
    }

    fn response_type(&self) -> TypeId {
        TypeId::of::<R::Response>()
    }

    fn message_name(&self) -> &'static str {
        type_name::<R>()
    }

    fn try_execute<'a>(
        &'a self,
        request: Box<dyn Any + Send>,
        cancel: CancellationToken,
    ) -> SendAttempt<'a> {
        let request = match request.downcast::<R>() {
            Ok(request) => *request,
            Err(other) => return SendAttempt::NotApplicable(other),
        };
        SendAttempt::Accepted(Box::pin(async move {
            let response = self.handler.handle(request, cancel).await?;
            Ok(Box::new(response) as Box<dyn Any + Send>)
        }))
    }
}

/// The notification entry variant: owns one [`NotificationHandler`] bound to `N`.
pub struct NotificationEntry<N, H> {
    handler: H,
    _bound: PhantomData<fn(N)>,
}

impl<N: Notification, H: NotificationHandler<N>> NotificationEntry<N, H> {
    /// Bind `handler` to notification type `N`.
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            _bound: PhantomData,
        }
    }
}

impl<N: Notification, H: NotificationHandler<N>> DynNotificationDispatch for NotificationEntry<N, H> {
    fn message_type(&self) -> TypeId {
        TypeId::of::<N>()
    }

    fn message_name(&self) -> &'static str {
        type_name::<N>()
    }

    fn try_execute<'a>(
        &'a self,
        notification: &'a (dyn Any + Send + Sync),
        cancel: CancellationToken,
    ) -> Option<EntryFuture<'a, ()>> {
        let notification = notification.downcast_ref::<N>()?;
        Some(Box::pin(self.handler.handle(notification, cancel)))
    }
}

/// A registered dispatch entry, tagged by message kind.
///
/// Identity is the pair (bound message type, bound response type or none
/// for notifications).
pub enum DispatchEntry {
    /// An entry servicing one request type.
    Request(Box<dyn DynRequestDispatch>),
    /// An entry servicing one notification type.
    Notification(Box<dyn DynNotificationDispatch>),
}

impl DispatchEntry {
    /// Wrap a request handler into an erased entry.
    pub fn request<R, H>(handler: H) -> Self
    where
        R: Request,
        H: RequestHandler<R>,
    {
        Self::Request(Box::new(RequestEntry::new(handler)))
    }

    /// Wrap a notification handler into an erased entry.
    pub fn notification<N, H>(handler: H) -> Self
    where
        N: Notification,
        H: NotificationHandler<N>,
    {
        Self::Notification(Box::new(NotificationEntry::new(handler)))
    }

    /// Human-readable name of the bound message type.
    pub fn message_name(&self) -> &'static str {
        match self {
            Self::Request(entry) => entry.message_name(),
            Self::Notification(entry) => entry.message_name(),
        }
    }

    /// This entry's request dispatch, if it is the request variant.
    pub fn as_request(&self) -> Option<&dyn DynRequestDispatch> {
        match self {
            Self::Request(entry) => Some(entry.as_ref()),
            Self::Notification(_) => None,
        }
    }

    /// This entry's notification dispatch, if it is the notification variant.
    pub fn as_notification(&self) -> Option<&dyn DynNotificationDispatch> {
        match self {
            Self::Notification(entry) => Some(entry.as_ref()),
            Self::Request(_) => None,
        }
    }
}

/// An ordered enumeration of registered dispatch entries.
///
/// This is the seam between the dispatcher and whatever holds the entries.
/// The standard registry implements it; an external container exposing
/// "all registered entries" can be plugged in instead. Enumeration order
/// must equal registration order and must be stable across calls.
pub trait EntryProvider: Send + Sync {
    /// Iterate over all registered entries in registration order.
    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = &'a DispatchEntry> + Send + 'a>;
}

#[cfg(test)]
mod tests {
    use super::{DispatchEntry, SendAttempt};
    use crate::error::BoxError;
    use crate::handler::NotificationHandler;
    use crate::message::{Notification, Request};
    use std::any::{Any, TypeId};
    use tokio_util::sync::CancellationToken;

    struct Ping;
    impl Request for Ping {
        type Response = u32;
    }

    struct Other;
    impl Request for Other {
        type Response = u32;
    }

    struct Tick;
    impl Notification for Tick {}

    struct Tock;
    impl Notification for Tock {}

    struct NoopTickHandler;
    impl NotificationHandler<Tick> for NoopTickHandler {
        async fn handle(&self, _: &Tick, _: CancellationToken) -> Result<(), BoxError> {
            Ok(())
        }
    }

    fn ping_entry() -> DispatchEntry {
        DispatchEntry::request(|_: Ping, _: CancellationToken| async move {
            Ok::<_, BoxError>(7u32)
        })
    }

    #[test]
    fn request_entry_advertises_bound_types() {
        let entry = ping_entry();
        let dispatch = entry.as_request().unwrap();
        assert_eq!(dispatch.message_type(), TypeId::of::<Ping>());
        assert_eq!(dispatch.response_type(), TypeId::of::<u32>());
        assert!(entry.as_notification().is_none());
    }

    #[test]
    fn mismatched_request_is_handed_back_untouched() {
        let entry = ping_entry();
        let dispatch = entry.as_request().unwrap();

        let probe: Box<dyn Any + Send> = Box::new(Other);
        match dispatch.try_execute(probe, CancellationToken::new()) {
            SendAttempt::NotApplicable(returned) => {
                assert!(returned.downcast::<Other>().is_ok());
            }
            SendAttempt::Accepted(_) => panic!("entry bound to Ping accepted Other"),
        }
    }

    #[test]
    fn matching_request_is_accepted() {
        let entry = ping_entry();
        let dispatch = entry.as_request().unwrap();

        let probe: Box<dyn Any + Send> = Box::new(Ping);
        assert!(matches!(
            dispatch.try_execute(probe, CancellationToken::new()),
            SendAttempt::Accepted(_)
        ));
    }

    #[test]
    fn mismatched_notification_does_not_match() {
        let entry = DispatchEntry::notification::<Tick, _>(NoopTickHandler);
        let dispatch = entry.as_notification().unwrap();

        let tock = Tock;
        let probe: &(dyn Any + Send + Sync) = &tock;
        assert!(dispatch.try_execute(probe, CancellationToken::new()).is_none());
    }
}
