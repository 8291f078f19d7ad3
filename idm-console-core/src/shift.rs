//! Shift modifier state shared by every mounted table
//!
//! One `ShiftTracker` is fed by the front end's single top-level input
//! listener. Tables never subscribe on their own; they hold a read-only
//! [`ShiftHandle`] cloned from the tracker.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Writable side of the shared Shift-held flag
#[derive(Debug, Clone, Default)]
pub struct ShiftTracker {
    held: Arc<AtomicBool>,
}

impl ShiftTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only handle for a table
    pub fn handle(&self) -> ShiftHandle {
        ShiftHandle {
            held: Some(Arc::clone(&self.held)),
        }
    }

    /// Key-down for Shift
    pub fn press(&self) {
        self.set(true);
    }

    /// Key-up for Shift
    pub fn release(&self) {
        self.set(false);
    }

    pub fn set(&self, held: bool) {
        self.held.store(held, Ordering::Relaxed);
    }

    /// Derive the flag from the modifier set carried by any input event.
    ///
    /// Terminals rarely report key-up events, so every key or mouse event
    /// refreshes the flag from its own modifiers.
    pub fn observe_modifiers(&self, shift: bool) {
        self.set(shift);
    }

    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Relaxed)
    }
}

/// Read-only view of the Shift-held flag
///
/// A detached handle (the `Default`) always reads `false`, which makes every
/// toggle a single-row toggle.
#[derive(Debug, Clone, Default)]
pub struct ShiftHandle {
    held: Option<Arc<AtomicBool>>,
}

impl ShiftHandle {
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn is_held(&self) -> bool {
        self.held
            .as_ref()
            .is_some_and(|held| held.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_share_one_flag() {
        let tracker = ShiftTracker::new();
        let hosts = tracker.handle();
        let rules = tracker.handle();

        tracker.press();
        assert!(hosts.is_held() && rules.is_held());

        tracker.release();
        assert!(!hosts.is_held() && !rules.is_held());

        tracker.observe_modifiers(true);
        assert!(tracker.is_held());
    }

    #[test]
    fn detached_handle_never_held() {
        assert!(!ShiftHandle::detached().is_held());
    }
}
