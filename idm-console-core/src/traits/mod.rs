//! Row and data-source abstraction trait definitions

mod entity_source;
mod row;

pub use entity_source::{EntitySource, InMemoryEntitySource};
pub use row::Row;
