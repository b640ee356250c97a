//! Frontend Models
//!
//! Data structures matching the `/todos` resource.

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned item identifier
pub type TodoId = u64;

/// To-do item as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<String>,
    /// Opaque creation marker, displayed verbatim
    pub timestamp: String,
}

/// Older rows may carry `"categories": null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Create payload, already normalized by the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTodo {
    pub title: String,
    pub due_date: Option<String>,
    pub categories: Vec<String>,
}

/// Body of `GET {base}/health`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
