//! Tracing and logging setup shared by the stockroom binaries.

pub use self::tracing::LogFormat;

/// Initialize process-wide tracing with JSON output.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    self::tracing::init(LogFormat::Json);
}

/// Initialize process-wide tracing with the given output format.
pub fn init_with(format: LogFormat) {
    self::tracing::init(format);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
