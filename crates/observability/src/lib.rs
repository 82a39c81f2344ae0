//! Tracing/logging setup shared by binaries and tests embedding the cart.

/// Subscriber configuration (filters, output format).
pub mod subscriber;

pub use subscriber::{LOG_FORMAT_ENV, LogFormat};

/// Initialize process-wide tracing with the format named by
/// `SHOPCART_LOG_FORMAT` and return the format in effect.
///
/// An unrecognized format falls back to JSON and is reported at `warn` once
/// the subscriber is up. This is safe to call multiple times; subsequent
/// calls become no-ops.
pub fn init() -> LogFormat {
    match LogFormat::from_env() {
        Ok(format) => {
            subscriber::init_with(format);
            format
        }
        Err(err) => {
            subscriber::init_with(LogFormat::Json);
            tracing::warn!(
                env = LOG_FORMAT_ENV,
                "{err}; falling back to json logs"
            );
            LogFormat::Json
        }
    }
}

/// Initialize process-wide tracing with an explicit format.
pub fn init_with(format: LogFormat) {
    subscriber::init_with(format);
}
