pub mod persistence;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

pub const DEFAULT_LOG_FILTER: &str = "expense_tracker=info";

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    init_tracing_with(DEFAULT_LOG_FILTER);
}

/// Initializes the global tracing subscriber, preferring `RUST_LOG` over `fallback`.
pub fn init_tracing_with(fallback: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        // A host application may already own the global subscriber.
        let _ = fmt().with_env_filter(filter).try_init();
    });
}
