//! Bulk-action button enablement derived from the selection

use serde::Serialize;

use crate::traits::Row;
use crate::types::BulkAction;

/// Status make-up of the selected rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusMix {
    /// Nothing selected
    Empty,
    /// Every selected row is enabled
    AllEnabled,
    /// Every selected row is disabled
    AllDisabled,
    /// Both enabled and disabled rows are selected
    Mixed,
    /// At least one selected row has no status at all
    NoStatus,
}

impl StatusMix {
    pub fn classify<'a, T, I>(selected: I) -> Self
    where
        T: Row + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut mix = Self::Empty;
        for row in selected {
            let Some(enabled) = row.status() else {
                return Self::NoStatus;
            };
            mix = match (mix, enabled) {
                (Self::Empty | Self::AllEnabled, true) => Self::AllEnabled,
                (Self::Empty | Self::AllDisabled, false) => Self::AllDisabled,
                _ => Self::Mixed,
            };
        }
        mix
    }
}

/// Disabled flags for the toolbar's bulk buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkActionState {
    pub delete_disabled: bool,
    pub enable_disabled: bool,
    pub disable_disabled: bool,
}

impl Default for BulkActionState {
    fn default() -> Self {
        Self {
            delete_disabled: true,
            enable_disabled: true,
            disable_disabled: true,
        }
    }
}

impl BulkActionState {
    /// Recompute from the currently selected rows.
    ///
    /// Delete needs a non-empty selection. Enable/disable need a homogeneous
    /// status and only the opposite action is offered.
    pub fn derive<'a, T, I>(selected: I) -> Self
    where
        T: Row + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        Self::from_mix(StatusMix::classify(selected))
    }

    pub fn from_mix(mix: StatusMix) -> Self {
        Self {
            delete_disabled: mix == StatusMix::Empty,
            enable_disabled: mix != StatusMix::AllDisabled,
            disable_disabled: mix != StatusMix::AllEnabled,
        }
    }

    pub fn is_allowed(&self, action: BulkAction) -> bool {
        match action {
            BulkAction::Delete => !self.delete_disabled,
            BulkAction::Enable => !self.enable_disabled,
            BulkAction::Disable => !self.disable_disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{rule, TestRow};

    #[test]
    fn empty_selection_disables_everything() {
        let state = BulkActionState::derive::<TestRow, _>([]);
        assert_eq!(state, BulkActionState::default());
    }

    #[test]
    fn all_enabled_offers_disable_only() {
        let rows = [rule("a", true), rule("b", true)];
        let state = BulkActionState::derive(&rows);
        assert!(!state.delete_disabled);
        assert!(!state.disable_disabled);
        assert!(state.enable_disabled);
    }

    #[test]
    fn all_disabled_offers_enable_only() {
        let rows = [rule("a", false)];
        let state = BulkActionState::derive(&rows);
        assert!(!state.enable_disabled);
        assert!(state.disable_disabled);
    }

    #[test]
    fn mixed_disables_both_status_buttons() {
        let rows = [rule("a", true), rule("b", false)];
        assert_eq!(StatusMix::classify(&rows), StatusMix::Mixed);
        let state = BulkActionState::derive(&rows);
        assert!(!state.delete_disabled);
        assert!(state.enable_disabled && state.disable_disabled);
    }

    #[test]
    fn rows_without_status_allow_delete_only() {
        let rows = [TestRow::new("web01.example.test")];
        let state = BulkActionState::derive(&rows);
        assert!(state.is_allowed(BulkAction::Delete));
        assert!(!state.is_allowed(BulkAction::Enable));
        assert!(!state.is_allowed(BulkAction::Disable));
    }
}
