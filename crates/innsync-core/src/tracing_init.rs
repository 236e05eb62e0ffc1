//! Shared tracing/logging initialization.
//!
//! Host applications and test harnesses embed the library and may race to
//! install the global subscriber, so initialization is idempotent: the first
//! caller wins and later calls are no-ops.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber, if none is installed yet.
///
/// The filter comes from `RUST_LOG` when set, otherwise `default_filter`
/// (e.g. `"innsync_client=info"`). With `log_json` the output is structured
/// JSON lines instead of the human-readable format.
///
/// Returns `true` when this call installed the subscriber, `false` when one
/// was already in place.
pub fn init_tracing(default_filter: &str, log_json: bool) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };
    installed.is_ok()
}
