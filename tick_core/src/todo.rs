use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single task the user wants tracked. The server owns the authoritative
/// copy; we only ever hold the last state we fetched or derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Server-assigned identifier.
    pub id: i64,

    /// What needs doing.
    pub text: String,

    /// Whether it's been done.
    #[serde(default)]
    pub done: bool,

    /// The category the user filed this under, if any. The server may send an
    /// all-zero category for uncategorized todos; an empty name counts as
    /// "no category" for grouping purposes.
    #[serde(default)]
    pub category: Option<Category>,

    /// When the server first saw this todo.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// A named grouping for todos, loaded from the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Server-assigned identifier.
    pub id: i64,

    /// Display name. Unique per user on the server.
    pub name: String,
}
