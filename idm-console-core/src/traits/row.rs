//! Selectable row abstraction

/// One entity rendered as a table line.
///
/// `key()` is the identity attribute (host FQDN, rule CN, ...). Keys are
/// unique within the list handed to one table; an empty key marks a
/// placeholder row that can never be selected.
pub trait Row {
    /// Identity key
    fn key(&self) -> &str;

    /// Whether the row may enter the selection
    fn is_selectable(&self) -> bool {
        !self.key().is_empty()
    }

    /// Enabled/disabled status, `None` for entities without one
    fn status(&self) -> Option<bool> {
        None
    }

    /// Update the status in place. Returns `false` when the entity has none.
    fn set_status(&mut self, _enabled: bool) -> bool {
        false
    }

    /// Case-insensitive keyword match used by search filters
    fn matches(&self, keyword: &str) -> bool {
        self.key()
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}
