//! # mediary-core
//!
//! Core traits for the Mediary in-process message dispatch library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! handler crates that don't need the full `mediary-std` implementation.
//!
//! # Architecture
//!
//! Mediary routes two kinds of messages to registered handlers:
//!
//! ## Requests ([`Request`])
//!
//! A request demands exactly one response of a type fixed at compile time.
//! Exactly one [`RequestHandler`] services each request type; resolution
//! stops at the first entry that accepts the message.
//!
//! ## Notifications ([`Notification`])
//!
//! A notification is broadcast fire-and-forget to zero or more
//! [`NotificationHandler`]s, sequentially, in registration order.
//!
//! ## Dispatch Entries ([`DispatchEntry`])
//!
//! Handlers are stored type-erased. Each entry is bound at construction to
//! exactly one concrete message type (and response type, for requests) and
//! probes incoming messages with a `TypeId` test plus an [`Any`] downcast —
//! no reflection, no type-keyed lookup maps. An entry that does not match
//! reports a "not applicable" sentinel so the dispatcher keeps probing.
//!
//! ## Entry Providers ([`EntryProvider`])
//!
//! The dispatcher only requires an ordered enumeration of entries. The
//! standard `Registry` in `mediary-std` implements it; an external
//! container can supply its own.
//!
//! # Error Types
//!
//! - [`MediaryError`] - Top-level error type
//! - [`SendError`] - Request resolution errors
//! - [`PublishError`] - Notification fan-out errors
//! - [`RegistryError`] - Setup-time registration errors
//!
//! [`Any`]: std::any::Any

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod entry;
mod error;
mod handler;
mod message;

// Re-exports
pub use entry::{
    DispatchEntry, DynNotificationDispatch, DynRequestDispatch, EntryFuture, EntryProvider,
    NotificationEntry, RequestEntry, SendAttempt,
};
pub use error::{BoxError, MediaryError, PublishError, RegistryError, SendError};
pub use handler::{NotificationHandler, RequestHandler};
pub use message::{Notification, Request};
