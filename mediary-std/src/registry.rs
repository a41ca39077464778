//! Registry of dispatch entries.
//!
//! This module provides a builder pattern for setup-time registration and
//! a frozen registry for immutable, thread-safe enumeration.

use mediary_core::{
    DispatchEntry, EntryProvider, Notification, NotificationHandler, RegistryError, Request,
    RequestHandler,
};
use std::any::TypeId;
use std::collections::HashSet;

// ============================================================================
// RegistryBuilder - append-only setup surface
// ============================================================================

/// Builder for constructing a [`Registry`].
///
/// Registration is append-only; entry order equals call order and becomes
/// the enumeration order of the built registry. `build()` consumes the
/// builder, so registering after the dispatcher starts serving traffic is
/// unrepresentable.
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .register_request(CreateUserHandler::new())
///     .register_notification(AuditLogHandler::new())
///     .build()?;
/// ```
pub struct RegistryBuilder {
    entries: Vec<DispatchEntry>,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a request handler, binding it to request type `R`.
    pub fn register_request<R, H>(mut self, handler: H) -> Self
    where
        R: Request,
        H: RequestHandler<R>,
    {
        self.register_request_mut(handler);
        self
    }

    /// Register a request handler (mutable version).
    pub fn register_request_mut<R, H>(&mut self, handler: H)
    where
        R: Request,
        H: RequestHandler<R>,
    {
        self.entries.push(DispatchEntry::request(handler));
    }

    /// Register a notification handler, binding it to notification type `N`.
    pub fn register_notification<N, H>(mut self, handler: H) -> Self
    where
        N: Notification,
        H: NotificationHandler<N>,
    {
        self.register_notification_mut(handler);
        self
    }

    /// Register a notification handler (mutable version).
    pub fn register_notification_mut<N, H>(&mut self, handler: H)
    where
        N: Notification,
        H: NotificationHandler<N>,
    {
        self.entries.push(DispatchEntry::notification(handler));
    }

    /// Get the number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the builder has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the builder into an immutable [`Registry`].
    ///
    /// Fails fast when two request entries share the same bound
    /// (message, response) identity: requests have exactly-one-handler
    /// semantics, and rejecting the duplicate here beats silently
    /// resolving every dispatch to whichever entry was registered first.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let mut seen: HashSet<(TypeId, TypeId)> = HashSet::new();
        for entry in &self.entries {
            if let Some(request) = entry.as_request() {
                if !seen.insert((request.message_type(), request.response_type())) {
                    return Err(RegistryError::DuplicateRequest {
                        type_name: request.message_name(),
                    });
                }
            }
        }
        Ok(Registry {
            entries: self.entries,
        })
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Registry - immutable, thread-safe entry storage
// ============================================================================

/// An immutable, thread-safe registry of dispatch entries.
///
/// Created by [`RegistryBuilder::build`]. The registry is a plain ordered
/// container: no filtering or type knowledge lives here, that is the
/// dispatcher's job. Reads take no locks; share it across tasks via `Arc`.
///
/// # Example
/// ```ignore
/// let registry = Arc::new(
///     RegistryBuilder::new()
///         .register_request(handler)
///         .build()?,
/// );
/// let mediator = Mediator::new(registry);
/// ```
pub struct Registry {
    entries: Vec<DispatchEntry>,
}

impl Registry {
    /// Iterate over all entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DispatchEntry> {
        self.entries.iter()
    }

    /// Get the number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntryProvider for Registry {
    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = &'a DispatchEntry> + Send + 'a> {
        Box::new(self.entries.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::RegistryBuilder;
    use mediary_core::{
        BoxError, Notification, NotificationHandler, RegistryError, Request, RequestHandler,
    };
    use tokio_util::sync::CancellationToken;

    struct Ping;
    impl Request for Ping {
        type Response = u32;
    }

    struct PingHandler;
    impl RequestHandler<Ping> for PingHandler {
        async fn handle(&self, _: Ping, _: CancellationToken) -> Result<u32, BoxError> {
            Ok(1)
        }
    }

    struct Tick;
    impl Notification for Tick {}

    struct NoopTickHandler;
    impl NotificationHandler<Tick> for NoopTickHandler {
        async fn handle(&self, _: &Tick, _: CancellationToken) -> Result<(), BoxError> {
            Ok(())
        }
    }

    #[test]
    fn registration_order_is_preserved() {
        let registry = RegistryBuilder::new()
            .register_notification::<Tick, _>(NoopTickHandler)
            .register_request(PingHandler)
            .register_notification::<Tick, _>(NoopTickHandler)
            .build()
            .unwrap();

        assert_eq!(registry.len(), 3);
        let kinds: Vec<bool> = registry.iter().map(|e| e.as_request().is_some()).collect();
        assert_eq!(kinds, vec![false, true, false]);
    }

    #[test]
    fn duplicate_request_registration_is_rejected() {
        let result = RegistryBuilder::new()
            .register_request(PingHandler)
            .register_request(PingHandler)
            .build();

        assert!(matches!(
            result,
            Err(RegistryError::DuplicateRequest { type_name }) if type_name.contains("Ping")
        ));
    }

    #[test]
    fn duplicate_notification_registration_is_allowed() {
        let registry = RegistryBuilder::new()
            .register_notification::<Tick, _>(NoopTickHandler)
            .register_notification::<Tick, _>(NoopTickHandler)
            .build()
            .unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn empty_builder_builds_empty_registry() {
        let builder = RegistryBuilder::new();
        assert!(builder.is_empty());
        let registry = builder.build().unwrap();
        assert!(registry.is_empty());
    }
}
