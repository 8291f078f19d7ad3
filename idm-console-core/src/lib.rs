//! IdM Console Core Library
//!
//! Platform-independent state for the identity-management console's entity
//! tables:
//! - Row selection with Shift-range support (`selection`)
//! - Pagination re-slicing for client- and server-paged lists (`pagination`)
//! - Bulk-action enablement derived from the selection (`bulk`)
//! - Table controller tying rows, paging, filters and resets together (`table`)
//!
//! The backend is abstracted through the `EntitySource` trait, so the same
//! controllers run against an RPC client or the in-memory source.

pub mod bulk;
pub mod error;
pub mod pagination;
pub mod selection;
pub mod services;
pub mod shift;
pub mod signal;
pub mod table;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use bulk::{BulkActionState, StatusMix};
pub use error::{CoreError, CoreResult};
pub use pagination::{compute_visible_slice, visible_range, Pagination, SliceMode};
pub use selection::{shift_range, PageSelection, SelectionController};
pub use services::EntityService;
pub use shift::{ShiftHandle, ShiftTracker};
pub use signal::{ResetReason, ResetSignal};
pub use table::{FetchOutcome, FetchTicket, TableController};
pub use traits::{EntitySource, InMemoryEntitySource, Row};
