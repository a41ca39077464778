//! Error types for Mediary.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`MediaryError`] - Top-level error type for all Mediary operations
//! - [`SendError`] - Errors during request resolution
//! - [`PublishError`] - Errors during notification fan-out
//! - [`RegistryError`] - Errors during setup-time registration
//!
//! All dispatch errors name the offending message's concrete type. Handler
//! failures are propagated unchanged as the `source` of the surrounding
//! variant, never swallowed.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Mediary operations.
#[derive(Error, Debug)]
pub enum MediaryError {
    /// An error occurred while resolving a request.
    #[error("send error: {0}")]
    Send(#[from] SendError),

    /// An error occurred while broadcasting a notification.
    #[error("publish error: {0}")]
    Publish(#[from] PublishError),

    /// An error occurred while building the registry.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Errors that can occur while resolving a request.
#[derive(Error, Debug)]
pub enum SendError {
    /// No dispatch entry is bound to this request type.
    #[error("no handler registered for request type `{type_name}`")]
    Unhandled {
        /// Concrete type of the unmatched request.
        type_name: &'static str,
    },

    /// The resolved handler itself failed.
    #[error("handler for request `{type_name}` failed")]
    Handler {
        /// Concrete type of the request being handled.
        type_name: &'static str,
        /// The handler's own error, propagated unchanged.
        #[source]
        source: BoxError,
    },

    /// An entry produced a response of the wrong type.
    ///
    /// Unreachable through the standard registry; only a foreign
    /// [`EntryProvider`](crate::EntryProvider) advertising mismatched
    /// bound types can trigger it.
    #[error("response for request `{type_name}` was not of the declared response type")]
    ResponseType {
        /// Concrete type of the request being handled.
        type_name: &'static str,
    },
}

/// Errors that can occur while broadcasting a notification.
#[derive(Error, Debug)]
pub enum PublishError {
    /// A matching handler failed; the remaining fan-out was aborted.
    #[error("notification handler {index} for `{type_name}` failed")]
    Handler {
        /// Concrete type of the notification being broadcast.
        type_name: &'static str,
        /// 1-based position of the failing handler among matching entries.
        index: usize,
        /// The handler's own error, propagated unchanged.
        #[source]
        source: BoxError,
    },
}

/// Errors that can occur while building a registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Two entries were registered for the same request type.
    ///
    /// Requests have exactly-one-handler semantics; a duplicate is a
    /// misconfiguration rejected at build time rather than silently
    /// resolved to the first registration.
    #[error("duplicate dispatch entry for request type `{type_name}`")]
    DuplicateRequest {
        /// Concrete type of the request registered twice.
        type_name: &'static str,
    },
}
