//! Bulk action request/result type definitions

use serde::{Deserialize, Serialize};

/// Bulk action applied to every selected row at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BulkAction {
    Delete,
    Enable,
    Disable,
}

impl BulkAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Enable => "enable",
            Self::Disable => "disable",
        }
    }
}

/// A single failed item of a bulk action
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchActionFailure {
    /// Row key
    pub key: String,
    /// Failure reason
    pub reason: String,
}

/// Bulk action result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchActionResult {
    pub action: BulkAction,
    pub success_count: usize,
    pub failed_count: usize,
    pub failures: Vec<BatchActionFailure>,
}

impl BatchActionResult {
    /// Whether every item succeeded
    pub fn is_complete_success(&self) -> bool {
        self.failed_count == 0
    }
}
