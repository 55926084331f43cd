//! Identity types for Reshuffle entities

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Account identifier using UUIDv7 for timestamp-sortable IDs.
/// UUIDv7 embeds a Unix timestamp, making IDs naturally sortable by creation time.
pub type AccountId = Uuid;

/// Collection agent identifier.
pub type AgentId = Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Generate a new UUIDv7 AccountId (timestamp-sortable).
pub fn new_account_id() -> AccountId {
    Uuid::now_v7()
}

/// Generate a new UUIDv7 AgentId (timestamp-sortable).
pub fn new_agent_id() -> AgentId {
    Uuid::now_v7()
}
