//! Per-user notifications emitted alongside ledger events

use super::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message describing a ledger event to one affected user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,

    /// User the notification is addressed to
    pub user_id: UserId,

    pub date: DateTime<Utc>,

    pub message: String,

    /// Transaction kind name or a custom tag such as `statement`
    pub tag: String,

    /// Always false when emitted by the ledger
    pub read: bool,
}
