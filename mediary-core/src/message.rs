//! Marker traits for the two message kinds.

/// A message demanding exactly one typed response.
///
/// The response type is an associated type, so a request's concrete type
/// fully determines its response type at compile time. A correctly
/// configured system registers exactly one handler per request type; zero
/// registered handlers is a configuration error surfaced at dispatch time.
///
/// # Example
///
/// ```rust,ignore
/// struct CreateUser { username: String }
///
/// impl Request for CreateUser {
///     type Response = bool;
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Request",
    label = "must be `Send + Sync + 'static` and declare a `Response` type",
    note = "Requests are resolved to exactly one handler and produce one typed response."
)]
pub trait Request: Send + Sync + 'static {
    /// The response produced by this request's handler.
    type Response: Send + 'static;
}

/// A marker trait for fire-and-forget broadcast messages.
///
/// Notifications carry no response. Zero, one, or many handlers may be
/// registered for a notification type; all of them are invoked in
/// registration order and none short-circuits another.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Notification",
    label = "must be `Send + Sync + 'static`",
    note = "Notifications are broadcast to any number of handlers and produce no response."
)]
pub trait Notification: Send + Sync + 'static {}
