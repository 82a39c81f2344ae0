//! `init` driven through the environment. Kept in its own test binary because
//! it mutates process-wide state (env vars and the global subscriber).

use shopcart_observability::{LOG_FORMAT_ENV, LogFormat};

#[test]
fn unknown_log_format_falls_back_to_json() {
    // SAFETY: this binary has a single test, so nothing reads the environment
    // concurrently.
    unsafe { std::env::set_var(LOG_FORMAT_ENV, "xml") };

    assert!(LogFormat::from_env().is_err());
    assert_eq!(shopcart_observability::init(), LogFormat::Json);
    assert!(tracing::dispatcher::has_been_set());

    // A second call keeps working against the already-installed subscriber.
    assert_eq!(shopcart_observability::init(), LogFormat::Json);
}
