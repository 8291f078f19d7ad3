//! 类型定义模块

mod batch;
mod query;

pub use batch::{BatchActionFailure, BatchActionResult, BulkAction};
pub use query::{ListQuery, PaginatedResponse, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
