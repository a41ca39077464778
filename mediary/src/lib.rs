//! # mediary - In-Process Message Dispatch
//!
//! `mediary` routes two kinds of messages to registered handlers without
//! runtime reflection or type-keyed lookup maps:
//!
//! - **Requests** resolve to exactly one handler and produce one typed
//!   response ([`Mediator::send`]).
//! - **Notifications** are broadcast fire-and-forget to zero or more
//!   handlers in registration order ([`Mediator::publish`]).
//!
//! Producers depend only on a message's type, never on the handler
//! instance that services it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mediary::{Mediator, RegistryBuilder, Request};
//!
//! struct CreateUser { username: String }
//! impl Request for CreateUser { type Response = bool; }
//!
//! let registry = RegistryBuilder::new()
//!     .register_request(CreateUserHandler::new())
//!     .build()?;
//! let mediator = Mediator::new(Arc::new(registry));
//!
//! let created = mediator.send(CreateUser { username: "john".into() }).await?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use mediary_core::{
    // Errors
    BoxError,
    // Dispatch entries
    DispatchEntry,
    DynNotificationDispatch,
    DynRequestDispatch,
    EntryFuture,
    EntryProvider,
    MediaryError,
    // Message kinds
    Notification,
    NotificationEntry,
    // Handlers
    NotificationHandler,
    PublishError,
    RegistryError,
    Request,
    RequestEntry,
    RequestHandler,
    SendAttempt,
    SendError,
};

pub use mediary_std::{Mediator, Registry, RegistryBuilder};

// Cancellation signal threaded through every handler invocation.
pub use tokio_util::sync::CancellationToken;

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use mediary_std::testing::*;
}

/// Prelude module - common imports for Mediary.
///
/// # Usage
///
/// ```rust,ignore
/// use mediary::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError,
        CancellationToken,
        // Dispatcher
        Mediator,
        // Message kinds
        Notification,
        // Handlers
        NotificationHandler,
        // Registration
        RegistryBuilder,
        Request,
        RequestHandler,
    };
}
