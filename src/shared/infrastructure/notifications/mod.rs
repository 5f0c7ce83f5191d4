// Notification sink port.
//
// Purpose
// - Hand user-facing notifications to whatever delivers them (database rows,
//   push, e-mail). Delivery is outside this crate.
//
// Responsibilities
// - Callers treat `notify` as fire-and-forget: a failure is logged by the
//   dispatcher and never undoes the operation that produced it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    Warning,
    OvertimeApproval,
    OvertimeApproved,
    OvertimeDenied,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub org_id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub related_id: Option<String>,
    pub related_type: Option<String>,
}

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("recipient rejected: {0}")]
    Rejected(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, notification: Notification) -> Result<(), NotificationError>;
}

pub mod in_memory;
