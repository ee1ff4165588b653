//! Inventory categories and category-agnostic stock operations.
//!
//! Concrete product categories live here next to the generic workflows that
//! drive any `Repository<T>`. Failures from the repository are absorbed by
//! [`CategoryOperations`] and surfaced as [`Outcome`]s and [`Report`]s; nothing
//! in this crate panics or aborts on an invariant violation.

pub mod electronics;
pub mod grocery;
pub mod logger;
pub mod operations;
pub mod sink;

pub use electronics::ElectronicItem;
pub use grocery::GroceryItem;
pub use logger::{InventoryLogger, LoggerError};
pub use operations::{CategoryOperations, Operation, Outcome};
pub use sink::{MemorySink, Report, ReportSink};
