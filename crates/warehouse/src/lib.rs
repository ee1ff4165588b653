//! `stockroom-warehouse` — the warehouse driver.
//!
//! Owns one repository per product category, seeds sample stock and runs the
//! demonstration sequence through the category operations.

pub mod config;
pub mod console;
pub mod manager;

pub use config::{ConfigError, WarehouseConfig};
pub use console::ConsoleSink;
pub use manager::{DemoSummary, SnapshotSummary, WarehouseManager};
