use mediary::{
    BoxError, CancellationToken, Notification, NotificationHandler, Request, RequestHandler,
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Message Types
// ============================================================================

#[derive(Clone, Debug)]
pub struct CreateUser {
    pub username: String,
}

impl Request for CreateUser {
    type Response = bool;
}

// Shares CreateUser's response type on purpose: discrimination must hold
// even when two request types nominally coincide on their response.
#[derive(Clone, Debug)]
pub struct RenameUser {
    pub username: String,
}

impl Request for RenameUser {
    type Response = bool;
}

#[derive(Clone, Debug, PartialEq)]
pub struct UserCreated {
    pub username: String,
}

impl Notification for UserCreated {}

#[derive(Clone, Debug, PartialEq)]
pub struct UserDeleted {
    pub username: String,
}

impl Notification for UserDeleted {}

// ============================================================================
// Test Handlers
// ============================================================================

pub struct CreateUserHandler {
    pub calls: Arc<AtomicUsize>,
}

impl RequestHandler<CreateUser> for CreateUserHandler {
    async fn handle(
        &self,
        request: CreateUser,
        _cancel: CancellationToken,
    ) -> Result<bool, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(!request.username.is_empty())
    }
}

pub struct OrderRecordingHandler {
    pub id: usize,
    pub order: Arc<Mutex<Vec<usize>>>,
}

impl NotificationHandler<UserCreated> for OrderRecordingHandler {
    async fn handle(
        &self,
        _notification: &UserCreated,
        _cancel: CancellationToken,
    ) -> Result<(), BoxError> {
        self.order.lock().unwrap().push(self.id);
        Ok(())
    }
}
