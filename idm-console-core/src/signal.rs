//! Reset signals raised by the owning page and acknowledged by the selection controller

use std::fmt;

/// Why a selection reset was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    /// A bulk delete finished successfully
    DeletionCompleted,
    /// The user switched to another tab of the same entity
    TabChanged,
    /// The search filter changed
    FilterChanged,
    /// Page or page size changed
    PageChanged,
    /// The list was explicitly refreshed
    Refreshed,
}

impl fmt::Display for ResetReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::DeletionCompleted => "deletion completed",
            Self::TabChanged => "tab changed",
            Self::FilterChanged => "filter changed",
            Self::PageChanged => "page changed",
            Self::Refreshed => "refreshed",
        };
        f.write_str(s)
    }
}

/// Raise/acknowledge flag.
///
/// The owner raises it; the controller takes it, which resets it to the
/// lowered state. Raising twice before acknowledgement keeps the latest reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetSignal {
    pending: Option<ResetReason>,
}

impl ResetSignal {
    pub fn raise(&mut self, reason: ResetReason) {
        self.pending = Some(reason);
    }

    pub fn is_raised(&self) -> bool {
        self.pending.is_some()
    }

    /// Acknowledge: return the pending reason and lower the flag
    pub fn take(&mut self) -> Option<ResetReason> {
        self.pending.take()
    }
}
