//! Process-wide logging setup shared by the binaries.

/// Subscriber configuration (filters, output format).
pub mod subscriber;

pub use subscriber::{LogFormat, UnknownLogFormat};

/// Initialize process-wide tracing/logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat) {
    subscriber::init(format);
}
